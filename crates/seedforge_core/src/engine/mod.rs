//! # Bit Generators
//!
//! Six interchangeable deterministic engines behind one contract.
//!
//! ## Contract
//!
//! Every engine produces raw `u32` draws, snapshots its complete state,
//! restores a snapshot of its own algorithm, and resets to the state its
//! constructor would build from the retained seed. Engines are plain data, so
//! `Clone` yields a fully independent copy.
//!
//! ## Closed Set
//!
//! [`Engine`] is the only way the facade holds an engine: an enum of the six
//! variants, dispatched by `match`. Adding an algorithm means adding a variant,
//! never a trait object.

mod lcg;
mod mulberry32;
mod pcg32;
mod sfc32;
mod xorshift128;
mod xoshiro128;

pub use lcg::{Lcg, LcgParams};
pub use mulberry32::Mulberry32;
pub use pcg32::Pcg32;
pub use sfc32::Sfc32;
pub use xorshift128::Xorshift128Plus;
pub use xoshiro128::Xoshiro128StarStar;

use serde::Serialize;

use crate::algorithm::Algorithm;
use crate::error::SeedResult;
use crate::hash::Seed;

/// 2^32 as a float, the divisor that maps a `u32` draw into `[0, 1)`.
pub const TWO_POW_32: f64 = 4_294_967_296.0;

/// The uniform bit-generator contract.
pub trait BitGenerator {
    /// Algorithm implemented by this engine.
    fn algorithm(&self) -> Algorithm;

    /// Next raw draw in `[0, 2^32)`.
    fn next_u32(&mut self) -> u32;

    /// Next draw in `[0, 1)`: `next_u32() / 2^32`.
    #[inline]
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    /// Owned snapshot of the complete engine state.
    fn state(&self) -> GeneratorState;

    /// Restores a snapshot taken from an engine of the same algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SeedError::StateMismatch`] when the snapshot belongs to
    /// another algorithm.
    fn restore(&mut self, state: &GeneratorState) -> SeedResult<()>;

    /// Rebuilds the post-construction state from the retained seed.
    fn reset(&mut self);

    /// Seed the engine was constructed (or last restored) with.
    fn seed(&self) -> &Seed;
}

/// Snapshot of one engine, tagged by algorithm.
///
/// Serializes as the bare algorithm-specific record; the algorithm tag travels
/// next to it in [`crate::GeneratorSnapshot`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GeneratorState {
    /// mulberry32 snapshot.
    Mulberry32(Mulberry32),
    /// xoshiro128** snapshot.
    Xoshiro128StarStar(Xoshiro128StarStar),
    /// xorshift128+ snapshot.
    Xorshift128Plus(Xorshift128Plus),
    /// pcg32 snapshot.
    Pcg32(Pcg32),
    /// sfc32 snapshot.
    Sfc32(Sfc32),
    /// LCG snapshot.
    Lcg(Lcg),
}

impl GeneratorState {
    /// Algorithm this snapshot was taken from.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        match self {
            Self::Mulberry32(_) => Algorithm::Mulberry32,
            Self::Xoshiro128StarStar(_) => Algorithm::Xoshiro128StarStar,
            Self::Xorshift128Plus(_) => Algorithm::Xorshift128Plus,
            Self::Pcg32(_) => Algorithm::Pcg32,
            Self::Sfc32(_) => Algorithm::Sfc32,
            Self::Lcg(_) => Algorithm::Lcg,
        }
    }

    /// Decodes an algorithm-specific record once its algorithm is known.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SeedError::MalformedState`] when the record does not
    /// match the algorithm's field layout, or an LCG record carries an invalid
    /// modulus.
    pub fn from_value(algorithm: Algorithm, value: serde_json::Value) -> SeedResult<Self> {
        let state = match algorithm {
            Algorithm::Mulberry32 => Self::Mulberry32(serde_json::from_value(value)?),
            Algorithm::Xoshiro128StarStar => {
                Self::Xoshiro128StarStar(serde_json::from_value(value)?)
            }
            Algorithm::Xorshift128Plus => Self::Xorshift128Plus(serde_json::from_value(value)?),
            Algorithm::Pcg32 => Self::Pcg32(serde_json::from_value(value)?),
            Algorithm::Sfc32 => Self::Sfc32(serde_json::from_value(value)?),
            Algorithm::Lcg => {
                let lcg: Lcg = serde_json::from_value(value)?;
                lcg.params().validate()?;
                Self::Lcg(lcg)
            }
        };
        Ok(state)
    }
}

/// The live engine held by a generator: exactly one of six variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Engine {
    /// mulberry32 engine.
    Mulberry32(Mulberry32),
    /// xoshiro128** engine.
    Xoshiro128StarStar(Xoshiro128StarStar),
    /// xorshift128+ engine.
    Xorshift128Plus(Xorshift128Plus),
    /// pcg32 engine.
    Pcg32(Pcg32),
    /// sfc32 engine.
    Sfc32(Sfc32),
    /// LCG engine.
    Lcg(Lcg),
}

impl Engine {
    /// Builds an engine of `algorithm` from `seed`.
    #[must_use]
    pub fn new(seed: Seed, algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Mulberry32 => Self::Mulberry32(Mulberry32::new(seed)),
            Algorithm::Xoshiro128StarStar => {
                Self::Xoshiro128StarStar(Xoshiro128StarStar::new(seed))
            }
            Algorithm::Xorshift128Plus => Self::Xorshift128Plus(Xorshift128Plus::new(seed)),
            Algorithm::Pcg32 => Self::Pcg32(Pcg32::new(seed)),
            Algorithm::Sfc32 => Self::Sfc32(Sfc32::new(seed)),
            Algorithm::Lcg => Self::Lcg(Lcg::new(seed)),
        }
    }

    /// Rebuilds a live engine from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SeedError::InvalidParameter`] if an LCG snapshot
    /// carries an invalid modulus.
    pub fn from_state(state: &GeneratorState) -> SeedResult<Self> {
        let engine = match state {
            GeneratorState::Mulberry32(e) => Self::Mulberry32(e.clone()),
            GeneratorState::Xoshiro128StarStar(e) => Self::Xoshiro128StarStar(e.clone()),
            GeneratorState::Xorshift128Plus(e) => Self::Xorshift128Plus(e.clone()),
            GeneratorState::Pcg32(e) => Self::Pcg32(e.clone()),
            GeneratorState::Sfc32(e) => Self::Sfc32(e.clone()),
            GeneratorState::Lcg(e) => {
                e.params().validate()?;
                Self::Lcg(e.clone())
            }
        };
        Ok(engine)
    }

    /// Fresh engine of the same algorithm (and LCG parameters) for a new seed.
    #[must_use]
    pub fn reseeded(&self, seed: Seed) -> Self {
        match self {
            Self::Lcg(lcg) => Self::Lcg(Lcg::with_params(seed, lcg.params())),
            other => Self::new(seed, other.algorithm()),
        }
    }

    fn inner(&self) -> &dyn BitGenerator {
        match self {
            Self::Mulberry32(e) => e,
            Self::Xoshiro128StarStar(e) => e,
            Self::Xorshift128Plus(e) => e,
            Self::Pcg32(e) => e,
            Self::Sfc32(e) => e,
            Self::Lcg(e) => e,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn BitGenerator {
        match self {
            Self::Mulberry32(e) => e,
            Self::Xoshiro128StarStar(e) => e,
            Self::Xorshift128Plus(e) => e,
            Self::Pcg32(e) => e,
            Self::Sfc32(e) => e,
            Self::Lcg(e) => e,
        }
    }
}

impl BitGenerator for Engine {
    fn algorithm(&self) -> Algorithm {
        self.inner().algorithm()
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        // Direct match keeps the hot path free of dynamic dispatch.
        match self {
            Self::Mulberry32(e) => e.next_u32(),
            Self::Xoshiro128StarStar(e) => e.next_u32(),
            Self::Xorshift128Plus(e) => e.next_u32(),
            Self::Pcg32(e) => e.next_u32(),
            Self::Sfc32(e) => e.next_u32(),
            Self::Lcg(e) => e.next_u32(),
        }
    }

    fn state(&self) -> GeneratorState {
        self.inner().state()
    }

    fn restore(&mut self, state: &GeneratorState) -> SeedResult<()> {
        self.inner_mut().restore(state)
    }

    fn reset(&mut self) {
        self.inner_mut().reset();
    }

    fn seed(&self) -> &Seed {
        self.inner().seed()
    }
}

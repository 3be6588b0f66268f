//! Linear congruential generator: `state = (a * state + c) mod m`.
//!
//! The parameters are configurable; the defaults are the Numerical Recipes
//! constants with a full 2^32 modulus.

use serde::{Deserialize, Serialize};

use super::{BitGenerator, GeneratorState};
use crate::algorithm::Algorithm;
use crate::error::{SeedError, SeedResult};
use crate::hash::Seed;

/// LCG parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LcgParams {
    /// Multiplier `a`.
    pub multiplier: u32,
    /// Increment `c`.
    pub increment: u32,
    /// Modulus `m`, in `1..=2^32`.
    pub modulus: u64,
}

impl LcgParams {
    /// Full 32-bit modulus.
    pub const FULL_MODULUS: u64 = 1 << 32;

    /// Rejects a modulus outside `1..=2^32`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::InvalidParameter`] for a zero or oversized modulus.
    pub fn validate(self) -> SeedResult<Self> {
        if self.modulus == 0 || self.modulus > Self::FULL_MODULUS {
            return Err(SeedError::InvalidParameter {
                name: "modulus",
                value: self.modulus as f64,
            });
        }
        Ok(self)
    }
}

impl Default for LcgParams {
    fn default() -> Self {
        Self {
            multiplier: 1_664_525,
            increment: 1_013_904_223,
            modulus: Self::FULL_MODULUS,
        }
    }
}

/// LCG engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lcg {
    state: u32,
    seed: Seed,
    #[serde(flatten)]
    params: LcgParams,
}

impl Lcg {
    /// Creates an engine with the default parameters.
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        Self::with_params(seed, LcgParams::default())
    }

    /// Creates an engine with explicit parameters.
    ///
    /// The caller is expected to have validated `params`; see
    /// [`LcgParams::validate`].
    #[must_use]
    pub fn with_params(seed: Seed, params: LcgParams) -> Self {
        Self {
            state: initial_state(&seed, params),
            seed,
            params,
        }
    }

    /// Active parameters.
    #[must_use]
    pub const fn params(&self) -> LcgParams {
        self.params
    }
}

fn initial_state(seed: &Seed, params: LcgParams) -> u32 {
    (u64::from(seed.to_u32()) % params.modulus.max(1)) as u32
}

impl BitGenerator for Lcg {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lcg
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        let LcgParams {
            multiplier,
            increment,
            modulus,
        } = self.params;
        let modulus = modulus.max(1);
        let next = (u64::from(multiplier) * u64::from(self.state) + u64::from(increment)) % modulus;
        self.state = next as u32;
        if modulus == LcgParams::FULL_MODULUS {
            self.state
        } else {
            // Stretch [0, m) over the full 32-bit range.
            ((next << 32) / modulus) as u32
        }
    }

    fn state(&self) -> GeneratorState {
        GeneratorState::Lcg(self.clone())
    }

    fn restore(&mut self, state: &GeneratorState) -> SeedResult<()> {
        match state {
            GeneratorState::Lcg(saved) => {
                self.params = saved.params.validate()?;
                self.state = saved.state;
                self.seed = saved.seed.clone();
                Ok(())
            }
            other => Err(SeedError::StateMismatch {
                expected: self.algorithm(),
                found: other.algorithm(),
            }),
        }
    }

    fn reset(&mut self) {
        self.state = initial_state(&self.seed, self.params);
    }

    fn seed(&self) -> &Seed {
        &self.seed
    }
}

//! # Generator Facade
//!
//! A stateful wrapper around exactly one [`Engine`].
//!
//! ## Determinism Guarantee
//!
//! Every method draws from the engine in a fixed order, so for a fixed
//! `(seed, algorithm)` any fixed sequence of calls returns the same values on
//! any platform, any time. The only state outside the engine is the
//! [`NormalCache`], and it travels with every snapshot, clone and reset.
//!
//! ## State Protocol
//!
//! - [`Generator::get_state`] / [`Generator::set_state`]: exact save and restore
//! - [`Generator::reset`]: back to the state right after construction
//! - `Clone`: fully independent copy that continues the same stream
//! - [`Generator::fork`]: new generator on a derived seed (consumes one draw)

mod distributions;
mod utilities;

pub use utilities::{Hsl, Rgb, ALPHANUMERIC};

use rand::RngCore;

use crate::algorithm::Algorithm;
use crate::engine::{BitGenerator, Engine};
use crate::error::SeedResult;
use crate::hash::Seed;
use crate::snapshot::{GeneratorSnapshot, NormalCache};

/// Seeded pseudo-random generator.
///
/// # Example
///
/// ```rust
/// use seedforge_core::{Algorithm, Generator};
///
/// let mut rng = Generator::new("test-seed", Algorithm::Xoshiro128StarStar);
/// let roll = rng.int(1, 6);
/// assert!((1..=6).contains(&roll));
///
/// let saved = rng.get_state();
/// let next = rng.random();
/// rng.set_state(&saved).unwrap();
/// assert_eq!(rng.random(), next);
/// ```
#[derive(Clone, Debug)]
pub struct Generator {
    /// Live engine; every draw mutates it.
    engine: Engine,
    /// Engine exactly as constructed, the target of `reset`.
    pristine: Engine,
    /// Spare normal deviate.
    normal_cache: NormalCache,
}

impl Generator {
    /// Creates a generator from a seed and algorithm.
    #[must_use]
    pub fn new(seed: impl Into<Seed>, algorithm: Algorithm) -> Self {
        Self::from_engine(Engine::new(seed.into(), algorithm))
    }

    /// Creates a generator from a seed and an algorithm key or alias.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SeedError::UnknownAlgorithm`] for an unrecognised key.
    pub fn from_key(seed: impl Into<Seed>, key: &str) -> SeedResult<Self> {
        Ok(Self::new(seed, key.parse()?))
    }

    /// Wraps an already-built engine.
    #[must_use]
    pub fn from_engine(engine: Engine) -> Self {
        tracing::debug!(
            algorithm = %engine.algorithm(),
            seed = %engine.seed(),
            "generator created"
        );
        Self {
            pristine: engine.clone(),
            engine,
            normal_cache: NormalCache::default(),
        }
    }

    /// Active algorithm.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.engine.algorithm()
    }

    /// Seed of the active engine.
    #[must_use]
    pub fn seed(&self) -> &Seed {
        self.engine.seed()
    }

    /// Read access to the live engine.
    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Replaces the engine with a freshly seeded one.
    ///
    /// `algorithm` defaults to the active algorithm. The spare normal is
    /// discarded. `reset` still returns to the construction seed.
    pub fn set_seed(&mut self, seed: impl Into<Seed>, algorithm: Option<Algorithm>) {
        let algorithm = algorithm.unwrap_or_else(|| self.algorithm());
        self.engine = Engine::new(seed.into(), algorithm);
        self.normal_cache = NormalCache::default();
        tracing::debug!(
            algorithm = %algorithm,
            seed = %self.engine.seed(),
            "generator reseeded"
        );
    }

    // =========================================================================
    // STATE PROTOCOL
    // =========================================================================

    /// Snapshot of the engine and the normal cache.
    #[must_use]
    pub fn get_state(&self) -> GeneratorSnapshot {
        GeneratorSnapshot {
            generator_state: self.engine.state(),
            normal_cache: self.normal_cache,
        }
    }

    /// Restores a snapshot, including any pending spare normal.
    ///
    /// A snapshot of a different algorithm swaps the engine for one rebuilt
    /// from the snapshot. A rejected snapshot leaves the generator unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SeedError::InvalidParameter`] if an LCG snapshot
    /// carries an invalid modulus.
    pub fn set_state(&mut self, snapshot: &GeneratorSnapshot) -> SeedResult<()> {
        if snapshot.algorithm() == self.algorithm() {
            self.engine.restore(&snapshot.generator_state)?;
        } else {
            self.engine = Engine::from_state(&snapshot.generator_state)?;
        }
        self.normal_cache = snapshot.normal_cache;
        tracing::debug!(algorithm = %snapshot.algorithm(), "generator state restored");
        Ok(())
    }

    /// Returns to the exact state right after construction.
    ///
    /// Any `set_seed` or cross-algorithm `set_state` since construction is
    /// discarded.
    pub fn reset(&mut self) {
        self.engine = self.pristine.clone();
        self.normal_cache = NormalCache::default();
        tracing::debug!(algorithm = %self.algorithm(), "generator reset");
    }

    /// Derives an independent generator for `label`.
    ///
    /// The child seed is `"{algorithm}:{draw}:{label}"` where `draw` is one
    /// [`Generator::random_int`] taken from this generator, so forking
    /// **advances this stream by one draw**. Re-running the same program from
    /// the same seed reproduces the same forks.
    pub fn fork(&mut self, label: &str) -> Self {
        let algorithm = self.algorithm();
        let draw = self.random_int();
        let derived = format!("{algorithm}:{draw}:{label}");
        tracing::debug!(%algorithm, label, derived = %derived, "generator forked");
        Self::from_engine(self.engine.reseeded(Seed::Text(derived)))
    }

    // =========================================================================
    // UNIFORM DRAWS
    // =========================================================================

    /// Uniform float in `[0, 1)`.
    #[inline]
    pub fn random(&mut self) -> f64 {
        self.engine.next_f64()
    }

    /// Raw 32-bit draw.
    #[inline]
    pub fn random_int(&mut self) -> u32 {
        self.engine.next_u32()
    }

    /// Uniform float in `[min, max)`.
    #[inline]
    pub fn float(&mut self, min: f64, max: f64) -> f64 {
        min + self.random() * (max - min)
    }

    /// Uniform integer in `[min, max]`, both ends inclusive.
    ///
    /// The span is computed in 128 bits, so the full `i64` range is valid.
    /// `min > max` is caller error; the result is then unspecified.
    #[inline]
    pub fn int(&mut self, min: i64, max: i64) -> i64 {
        let (min, max) = (i128::from(min), i128::from(max));
        let span = (max - min + 1) as f64;
        let value = min + (self.random() * span).floor() as i128;
        // Rounding of a wide span to f64 can land one past `max`.
        value.min(max) as i64
    }

    /// `true` with probability `p`.
    #[inline]
    pub fn bool(&mut self, p: f64) -> bool {
        self.random() < p
    }

    /// `1` with probability `p`, otherwise `-1`.
    #[inline]
    pub fn sign(&mut self, p: f64) -> i32 {
        if self.bool(p) {
            1
        } else {
            -1
        }
    }
}

/// Lets a generator drive any `rand` API while keeping its own stream.
impl RngCore for Generator {
    fn next_u32(&mut self) -> u32 {
        self.random_int()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.random_int());
        let lo = u64::from(self.random_int());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.random_int().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

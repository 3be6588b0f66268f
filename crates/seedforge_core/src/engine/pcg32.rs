//! pcg32 (XSH-RR): a 64-bit LCG whose output is the xorshifted high bits
//! rotated by the top five state bits. Period 2^64.
//!
//! Saved state splits the 64-bit state and increment into 32-bit halves so
//! the payload stays within the exact-integer range of every JSON reader.

use serde::{Deserialize, Serialize};

use super::{BitGenerator, GeneratorState};
use crate::algorithm::Algorithm;
use crate::error::{SeedError, SeedResult};
use crate::hash::Seed;

/// LCG multiplier from the PCG paper.
const MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// Fixed stream increment (must be odd).
const INCREMENT: u64 = 0xda3e_39cb_94b9_5bdb;

/// pcg32 engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Pcg32Halves", from = "Pcg32Halves")]
pub struct Pcg32 {
    state: u64,
    inc: u64,
    seed: Seed,
}

/// Wire form of [`Pcg32`]: 64-bit words as hi/lo halves.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Pcg32Halves {
    state_hi: u32,
    state_lo: u32,
    inc_hi: u32,
    inc_lo: u32,
    seed: Seed,
}

impl From<Pcg32> for Pcg32Halves {
    fn from(pcg: Pcg32) -> Self {
        Self {
            state_hi: (pcg.state >> 32) as u32,
            state_lo: pcg.state as u32,
            inc_hi: (pcg.inc >> 32) as u32,
            inc_lo: pcg.inc as u32,
            seed: pcg.seed,
        }
    }
}

impl From<Pcg32Halves> for Pcg32 {
    fn from(halves: Pcg32Halves) -> Self {
        Self {
            state: (u64::from(halves.state_hi) << 32) | u64::from(halves.state_lo),
            inc: (u64::from(halves.inc_hi) << 32) | u64::from(halves.inc_lo),
            seed: halves.seed,
        }
    }
}

impl Pcg32 {
    /// Creates an engine from the 32-bit seed and the fixed stream increment.
    ///
    /// Seeding runs the standard two warm-up steps before the first output.
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        let mut pcg = Self {
            state: 0,
            inc: INCREMENT,
            seed,
        };
        pcg.seed_state();
        pcg
    }

    fn seed_state(&mut self) {
        self.state = 0;
        self.inc = INCREMENT;
        self.step();
        self.state = self.state.wrapping_add(u64::from(self.seed.to_u32()));
        self.step();
    }

    #[inline]
    fn step(&mut self) {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(self.inc);
    }
}

impl BitGenerator for Pcg32 {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Pcg32
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.step();
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn state(&self) -> GeneratorState {
        GeneratorState::Pcg32(self.clone())
    }

    fn restore(&mut self, state: &GeneratorState) -> SeedResult<()> {
        match state {
            GeneratorState::Pcg32(saved) => {
                self.state = saved.state;
                self.inc = saved.inc;
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
        self.seed_state();
    }

    fn seed(&self) -> &Seed {
        &self.seed
    }
}

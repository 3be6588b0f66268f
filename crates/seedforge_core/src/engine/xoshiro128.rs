//! xoshiro128**: four 32-bit words updated by xor, shift and rotate, with the
//! `**` (multiply-rotate-multiply) output scrambler. Period 2^128 - 1.

use serde::{Deserialize, Serialize};

use super::{BitGenerator, GeneratorState};
use crate::algorithm::Algorithm;
use crate::error::{SeedError, SeedResult};
use crate::hash::Seed;

/// Jump polynomial: applying it advances the stream by 2^64 draws.
const JUMP: [u32; 4] = [0x8764_000b, 0xf542_d2d3, 0x6fa0_35c3, 0x77f2_db5b];

/// xoshiro128** engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xoshiro128StarStar {
    s: [u32; 4],
    seed: Seed,
}

impl Xoshiro128StarStar {
    /// Creates an engine from the `cyrb128` hash of the seed.
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        Self {
            s: seed_words(&seed),
            seed,
        }
    }

    /// Advances the stream by 2^64 draws.
    ///
    /// Jumping a clone gives a non-overlapping sub-stream for parallel work.
    pub fn jump(&mut self) {
        let mut acc = [0u32; 4];
        for word in JUMP {
            for bit in 0..32 {
                if word & (1 << bit) != 0 {
                    for (a, s) in acc.iter_mut().zip(self.s) {
                        *a ^= s;
                    }
                }
                self.next_u32();
            }
        }
        self.s = acc;
        tracing::trace!(seed = %self.seed, "xoshiro128** jumped 2^64 draws");
    }
}

/// 128-bit seed words; the all-zero state is a fixed point and is replaced.
pub(super) fn seed_words(seed: &Seed) -> [u32; 4] {
    let words = seed.to_u128_words();
    if words == [0; 4] {
        [1, 0, 0, 0]
    } else {
        words
    }
}

impl BitGenerator for Xoshiro128StarStar {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Xoshiro128StarStar
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        let s = &mut self.s;
        let result = s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = s[1] << 9;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];
        s[2] ^= t;
        s[3] = s[3].rotate_left(11);

        result
    }

    fn state(&self) -> GeneratorState {
        GeneratorState::Xoshiro128StarStar(self.clone())
    }

    fn restore(&mut self, state: &GeneratorState) -> SeedResult<()> {
        match state {
            GeneratorState::Xoshiro128StarStar(saved) => {
                self.s = saved.s;
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
        self.s = seed_words(&self.seed);
    }

    fn seed(&self) -> &Seed {
        &self.seed
    }
}

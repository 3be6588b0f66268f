//! xorshift128+ (32-bit words): Marsaglia's four-word shift register with the
//! words rotated one slot per draw and an additive output stage.

use serde::{Deserialize, Serialize};

use super::xoshiro128::seed_words;
use super::{BitGenerator, GeneratorState};
use crate::algorithm::Algorithm;
use crate::error::{SeedError, SeedResult};
use crate::hash::Seed;

/// xorshift128+ engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xorshift128Plus {
    s: [u32; 4],
    seed: Seed,
}

impl Xorshift128Plus {
    /// Creates an engine from the `cyrb128` hash of the seed.
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        Self {
            s: seed_words(&seed),
            seed,
        }
    }
}

impl BitGenerator for Xorshift128Plus {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Xorshift128Plus
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        let [x, y, z, w] = self.s;
        let t = x ^ (x << 11);
        let next = w ^ (w >> 19) ^ t ^ (t >> 8);
        self.s = [y, z, w, next];
        next.wrapping_add(y)
    }

    fn state(&self) -> GeneratorState {
        GeneratorState::Xorshift128Plus(self.clone())
    }

    fn restore(&mut self, state: &GeneratorState) -> SeedResult<()> {
        match state {
            GeneratorState::Xorshift128Plus(saved) => {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_rotate() {
        let mut rng = Xorshift128Plus::new(Seed::from("rotate"));
        let before = rng.s;
        rng.next_u32();
        assert_eq!(rng.s[0..3], before[1..4]);
    }

    #[test]
    fn test_differs_from_xoshiro_on_same_seed() {
        use super::super::Xoshiro128StarStar;
        let mut a = Xorshift128Plus::new(Seed::from("same"));
        let mut b = Xoshiro128StarStar::new(Seed::from("same"));
        let a_head: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let b_head: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(a_head, b_head);
    }

    #[test]
    fn test_reference_stream() {
        let mut rng = Xorshift128Plus::new(Seed::from("test-seed"));
        let head: Vec<u32> = (0..4).map(|_| rng.next_u32()).collect();
        assert_eq!(head, [0x47b1_dee3, 0xe593_9247, 0xe310_b259, 0xd9be_ce4c]);
    }
}

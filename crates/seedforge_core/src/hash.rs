//! # Seed Hashing
//!
//! Turns caller seeds into engine seed material.
//!
//! Both hashes walk the UTF-16 code units of the input and use 32-bit
//! wrapping arithmetic only, so a given string hashes identically on every
//! platform and in every implementation that follows the same recipe.

use std::fmt;

use rand::RngCore;
use serde::{Deserialize, Serialize};

/// A caller-supplied seed.
///
/// Integers and strings are kept apart so that each engine can canonicalize
/// them the way it needs: 32-bit engines fold integers directly, 128-bit
/// engines hash their decimal rendering.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    /// Integer seed.
    Int(i64),
    /// String seed.
    Text(String),
}

impl Seed {
    /// Derives a fresh seed from an injected entropy source.
    ///
    /// This is the only way to get a "random" seed; the core never reads
    /// clocks or OS entropy itself.
    #[must_use]
    pub fn from_entropy<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::Int(i64::from(rng.next_u32()))
    }

    /// 32-bit seed material: integers fold to their low word, strings hash.
    #[must_use]
    pub fn to_u32(&self) -> u32 {
        match self {
            Self::Int(n) => *n as u32,
            Self::Text(s) => string_to_seed(s),
        }
    }

    /// 128-bit seed material via [`cyrb128`].
    #[must_use]
    pub fn to_u128_words(&self) -> [u32; 4] {
        match self {
            Self::Int(n) => cyrb128(&n.to_string()),
            Self::Text(s) => cyrb128(s),
        }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self::Int(value as i64)
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i32> for Seed {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Seed {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Rolling `31 * hash + code` string hash. The empty string maps to 0.
#[must_use]
pub fn string_to_seed(s: &str) -> u32 {
    s.encode_utf16().fold(0u32, |hash, code| {
        hash.wrapping_mul(31).wrapping_add(u32::from(code))
    })
}

/// 128-bit string hash: four multiply-xor accumulators plus an avalanche pass.
#[must_use]
pub fn cyrb128(s: &str) -> [u32; 4] {
    let mut h1: u32 = 1_779_033_703;
    let mut h2: u32 = 3_144_134_277;
    let mut h3: u32 = 1_013_904_242;
    let mut h4: u32 = 2_773_480_762;

    for code in s.encode_utf16() {
        let k = u32::from(code);
        h1 = h2 ^ (h1 ^ k).wrapping_mul(597_399_067);
        h2 = h3 ^ (h2 ^ k).wrapping_mul(2_869_860_233);
        h3 = h4 ^ (h3 ^ k).wrapping_mul(951_274_213);
        // Reads the h1 updated on the first line.
        h4 = h1 ^ (h4 ^ k).wrapping_mul(2_716_044_179);
    }

    h1 = (h3 ^ (h1 >> 18)).wrapping_mul(597_399_067);
    h2 = (h4 ^ (h2 >> 22)).wrapping_mul(2_869_860_233);
    h3 = (h1 ^ (h3 >> 17)).wrapping_mul(951_274_213);
    h4 = (h2 ^ (h4 >> 19)).wrapping_mul(2_716_044_179);

    h1 ^= h2 ^ h3 ^ h4;
    h2 ^= h1;
    h3 ^= h1;
    h4 ^= h1;

    [h1, h2, h3, h4]
}

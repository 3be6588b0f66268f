//! # Algorithm Selection
//!
//! The closed set of bit-generation engines and their string keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SeedError;

/// One of the six supported bit-generation algorithms.
///
/// Serialized as its canonical name; parsed from the canonical name or any
/// documented alias, case-insensitively.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Algorithm {
    /// `mulberry32`: 32-bit counter with two multiply-xor-shift rounds.
    Mulberry32,
    /// `xoshiro128**`: 128-bit xor/shift/rotate state, `**` scrambler.
    #[default]
    Xoshiro128StarStar,
    /// `xorshift128+`: 128-bit shift register, additive output.
    Xorshift128Plus,
    /// `pcg32`: 64-bit LCG with XSH-RR output permutation.
    Pcg32,
    /// `sfc32`: small fast counting generator.
    Sfc32,
    /// `lcg`: classic linear congruential generator.
    Lcg,
}

impl Algorithm {
    /// All algorithms, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Mulberry32,
        Self::Xoshiro128StarStar,
        Self::Xorshift128Plus,
        Self::Pcg32,
        Self::Sfc32,
        Self::Lcg,
    ];

    /// Canonical name, as written into saved state.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mulberry32 => "mulberry32",
            Self::Xoshiro128StarStar => "xoshiro128**",
            Self::Xorshift128Plus => "xorshift128+",
            Self::Pcg32 => "pcg32",
            Self::Sfc32 => "sfc32",
            Self::Lcg => "lcg",
        }
    }

    /// Accepted lowercase keys, canonical name first.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Mulberry32 => &["mulberry32", "mulberry"],
            Self::Xoshiro128StarStar => &["xoshiro128**", "xoshiro128ss", "xoshiro128", "xoshiro"],
            Self::Xorshift128Plus => &[
                "xorshift128+",
                "xorshift128plus",
                "xorshift128",
                "xorshift",
            ],
            Self::Pcg32 => &["pcg32", "pcg"],
            Self::Sfc32 => &["sfc32", "sfc"],
            Self::Lcg => &["lcg"],
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SeedError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let key = key.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.aliases().contains(&key.as_str()))
            .ok_or(SeedError::UnknownAlgorithm(key))
    }
}

impl TryFrom<String> for Algorithm {
    type Error = SeedError;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        key.parse()
    }
}

impl From<Algorithm> for &'static str {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.name()
    }
}

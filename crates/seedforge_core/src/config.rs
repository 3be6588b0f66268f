//! # Generator Configuration
//!
//! Declarative generator setup, loadable from TOML:
//!
//! ```toml
//! seed = "world-42"
//! algorithm = "pcg"
//!
//! # Only read when algorithm = "lcg"; omitted fields keep their defaults.
//! [lcg]
//! multiplier = 1103515245
//! increment = 12345
//! modulus = 2147483648
//! ```

use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;
use crate::engine::{Engine, Lcg, LcgParams};
use crate::error::SeedResult;
use crate::generator::Generator;
use crate::hash::Seed;

/// Configuration for building a [`Generator`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Seed material, string or integer.
    pub seed: Seed,
    /// Engine algorithm; accepts any alias.
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Custom LCG parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lcg: Option<LcgParams>,
}

impl GeneratorConfig {
    /// Configuration with the default algorithm.
    #[must_use]
    pub fn new(seed: impl Into<Seed>) -> Self {
        Self {
            seed: seed.into(),
            algorithm: Algorithm::default(),
            lcg: None,
        }
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SeedError::InvalidConfig`] for malformed TOML, a
    /// missing seed, or an unknown algorithm.
    pub fn from_toml_str(source: &str) -> SeedResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Builds the configured generator.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SeedError::InvalidParameter`] if LCG parameters carry
    /// an invalid modulus.
    pub fn build(&self) -> SeedResult<Generator> {
        let engine = match (self.algorithm, self.lcg) {
            (Algorithm::Lcg, Some(params)) => {
                Engine::Lcg(Lcg::with_params(self.seed.clone(), params.validate()?))
            }
            (algorithm, _) => Engine::new(self.seed.clone(), algorithm),
        };
        Ok(Generator::from_engine(engine))
    }
}

impl Generator {
    /// Builds a generator from a [`GeneratorConfig`].
    ///
    /// # Errors
    ///
    /// See [`GeneratorConfig::build`].
    pub fn from_config(config: &GeneratorConfig) -> SeedResult<Self> {
        config.build()
    }
}

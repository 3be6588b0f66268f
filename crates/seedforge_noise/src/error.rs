//! # Noise Error Types

use thiserror::Error;

/// Errors that can occur when configuring a noise field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseError {
    /// A fractal parameter is outside its domain.
    #[error("invalid fractal parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name as it appears in the configuration.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<toml::de::Error> for NoiseError {
    fn from(err: toml::de::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

/// Result type for noise configuration.
pub type NoiseResult<T> = Result<T, NoiseError>;

//! # Generator Error Types
//!
//! Every error here is a configuration error: it signals caller misuse and is
//! reported immediately. Nothing in the core is retried.

use thiserror::Error;

use crate::algorithm::Algorithm;

/// Errors that can occur when configuring or restoring a generator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeedError {
    /// Algorithm key did not match any known engine or alias.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Items and weights passed to a weighted pick differ in length.
    #[error("items and weights differ in length: {items} items, {weights} weights")]
    LengthMismatch {
        /// Number of items supplied.
        items: usize,
        /// Number of weights supplied.
        weights: usize,
    },

    /// A distribution parameter is outside its domain.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name as it appears in the distribution signature.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A snapshot was applied to an engine of a different algorithm.
    #[error("state mismatch: engine is {expected}, snapshot is {found}")]
    StateMismatch {
        /// Algorithm of the engine being restored.
        expected: Algorithm,
        /// Algorithm recorded in the snapshot.
        found: Algorithm,
    },

    /// A saved-state payload could not be decoded.
    #[error("malformed state payload: {0}")]
    MalformedState(String),

    /// A configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for SeedError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedState(err.to_string())
    }
}

impl From<toml::de::Error> for SeedError {
    fn from(err: toml::de::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

/// Result type for generator operations.
pub type SeedResult<T> = Result<T, SeedError>;

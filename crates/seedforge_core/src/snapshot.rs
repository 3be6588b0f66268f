//! # Saved Generator State
//!
//! The persisted payload of a [`crate::Generator`]:
//!
//! ```text
//! {
//!   "algorithm": "xoshiro128**",
//!   "generatorState": { ...algorithm-specific fields... },
//!   "normalCache": { "spare": 0.42 | null, "hasSpare": true | false }
//! }
//! ```
//!
//! The field layout is a compatibility contract; readers in other languages
//! decode the same shape.

use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::algorithm::Algorithm;
use crate::engine::GeneratorState;
use crate::error::SeedResult;

/// Spare value from the polar Box–Muller transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "NormalCacheRepr", from = "NormalCacheRepr")]
pub struct NormalCache {
    /// Cached second normal deviate, consumed by the next `normal()` call.
    pub spare: Option<f64>,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NormalCacheRepr {
    spare: Option<f64>,
    has_spare: bool,
}

impl From<NormalCache> for NormalCacheRepr {
    fn from(cache: NormalCache) -> Self {
        Self {
            spare: cache.spare,
            has_spare: cache.spare.is_some(),
        }
    }
}

impl From<NormalCacheRepr> for NormalCache {
    fn from(repr: NormalCacheRepr) -> Self {
        Self {
            spare: repr.spare.filter(|_| repr.has_spare),
        }
    }
}

/// Complete, restorable state of a generator.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorSnapshot {
    /// Engine snapshot; its variant is the algorithm tag.
    pub generator_state: GeneratorState,
    /// Pending spare normal deviate.
    pub normal_cache: NormalCache,
}

impl GeneratorSnapshot {
    /// Algorithm of the saved engine.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.generator_state.algorithm()
    }

    /// Encodes the payload as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SeedError::MalformedState`] if serialization fails.
    pub fn to_json(&self) -> SeedResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SeedError::MalformedState`] for invalid JSON, an unknown
    /// algorithm key, or a record that does not match its algorithm tag.
    pub fn from_json(json: &str) -> SeedResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Serialize for GeneratorSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("GeneratorSnapshot", 3)?;
        state.serialize_field("algorithm", &self.algorithm())?;
        state.serialize_field("generatorState", &self.generator_state)?;
        state.serialize_field("normalCache", &self.normal_cache)?;
        state.end()
    }
}

/// Payload as read off the wire, before the record is matched to its tag.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSnapshot {
    algorithm: Algorithm,
    generator_state: serde_json::Value,
    #[serde(default)]
    normal_cache: NormalCache,
}

impl<'de> Deserialize<'de> for GeneratorSnapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSnapshot::deserialize(deserializer)?;
        let generator_state = GeneratorState::from_value(raw.algorithm, raw.generator_state)
            .map_err(D::Error::custom)?;
        Ok(Self {
            generator_state,
            normal_cache: raw.normal_cache,
        })
    }
}

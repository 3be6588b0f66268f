//! # SEEDFORGE Core
//!
//! Deterministic pseudo-random generation: a seed in, an infinitely
//! reproducible stream out.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: same seed and algorithm, same stream, on any platform
//! 2. **Explicit**: no OS entropy and no clocks; callers inject entropy
//! 3. **Restorable**: complete state can be saved, restored, reset and forked
//! 4. **Interchangeable**: six engines behind one contract
//!
//! ## Core Components
//!
//! - [`hash`]: string and integer seeds to 32/128-bit seed material
//! - [`engine`]: mulberry32, xoshiro128**, xorshift128+, pcg32, sfc32, LCG
//! - [`Generator`]: uniform draws, distributions, utilities, state protocol
//! - [`GeneratorSnapshot`]: the persisted state payload
//! - [`GeneratorConfig`]: TOML-loadable generator setup
//!
//! ## Example
//!
//! ```rust
//! use seedforge_core::{Algorithm, Generator};
//!
//! let mut rng = Generator::new("world-42", Algorithm::Pcg32);
//! let height = rng.normal(100.0, 15.0);
//! let loot = rng.pick(&["sword", "shield", "potion"]);
//!
//! let mut terrain = rng.fork("terrain");
//! let _ = (height, loot, terrain.random());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod algorithm;
pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod hash;
pub mod snapshot;

pub use algorithm::Algorithm;
pub use config::GeneratorConfig;
pub use engine::{BitGenerator, Engine, GeneratorState, LcgParams};
pub use error::{SeedError, SeedResult};
pub use generator::{Generator, Hsl, Rgb, ALPHANUMERIC};
pub use hash::{cyrb128, string_to_seed, Seed};
pub use snapshot::{GeneratorSnapshot, NormalCache};

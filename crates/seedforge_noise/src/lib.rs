//! # SEEDFORGE Noise
//!
//! Deterministic spatial noise fields for procedural content.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: same seed, same field, on any platform
//! 2. **Seeded by the core**: permutation tables are shuffled by a
//!    [`seedforge_core::Generator`] built from the noise seed
//! 3. **Read-only sampling**: no state changes and no allocation per sample
//!
//! ## Core Components
//!
//! - [`ValueNoise`]: 1D/2D/3D lattice noise in `[0, 1]`
//! - [`SimplexNoise`]: 2D/3D gradient noise in about `[-1, 1]`
//! - [`Fractal`]: fBm and ridged octave sums over any [`NoiseField`]
//!
//! ## Example
//!
//! ```rust
//! use seedforge_noise::{Fractal, FractalParams, SimplexNoise};
//!
//! let params = FractalParams::from_toml_str("octaves = 6").unwrap();
//! let terrain = Fractal::new(SimplexNoise::new("world-42"), params).unwrap();
//! let height = terrain.fbm(0.01 * 1200.0, Some(0.01 * -340.0), None);
//! assert!((-1.0..=1.0).contains(&height));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod fractal;
mod permutation;
pub mod simplex;
pub mod value;

pub use error::{NoiseError, NoiseResult};
pub use fractal::{Fractal, FractalParams, NoiseField};
pub use simplex::SimplexNoise;
pub use value::ValueNoise;

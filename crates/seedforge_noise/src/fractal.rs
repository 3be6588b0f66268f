//! # Fractal Noise
//!
//! Octave summation over any [`NoiseField`]: each octave samples the base
//! field at `frequency` (starting at 1, multiplied by `lacunarity`) and
//! weights it by `amplitude` (starting at 1, multiplied by `persistence`).
//! The sum is normalised by the total amplitude, so an fBm of a `[0, 1]`
//! field stays in `[0, 1]` and an fBm of a `[-1, 1]` field in `[-1, 1]`.
//!
//! ## Configuration
//!
//! ```toml
//! octaves = 6
//! persistence = 0.45
//! lacunarity = 2.1
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, NoiseResult};

/// A noise function sampleable in one, two or three dimensions.
pub trait NoiseField {
    /// 1D sample.
    fn sample1(&self, x: f64) -> f64;

    /// 2D sample.
    fn sample2(&self, x: f64, y: f64) -> f64;

    /// 3D sample.
    fn sample3(&self, x: f64, y: f64, z: f64) -> f64;
}

/// Octave parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalParams {
    /// Number of layers summed (at least 1).
    pub octaves: u32,
    /// Amplitude multiplier per octave.
    pub persistence: f64,
    /// Frequency multiplier per octave.
    pub lacunarity: f64,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

impl FractalParams {
    /// Parses and validates a TOML document; omitted keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfig`] for malformed TOML, or
    /// [`NoiseError::InvalidParameter`] as [`FractalParams::validate`] does.
    pub fn from_toml_str(source: &str) -> NoiseResult<Self> {
        let params: Self = toml::from_str(source)?;
        params.validate()
    }

    /// Rejects parameters that make the normalised sum undefined.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidParameter`] for zero octaves or a
    /// non-positive (or non-finite) persistence or lacunarity.
    pub fn validate(self) -> NoiseResult<Self> {
        if self.octaves == 0 {
            return Err(NoiseError::InvalidParameter {
                name: "octaves",
                value: 0.0,
            });
        }
        for (name, value) in [
            ("persistence", self.persistence),
            ("lacunarity", self.lacunarity),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(NoiseError::InvalidParameter { name, value });
            }
        }
        Ok(self)
    }
}

/// Fractal combinator over a base noise field.
///
/// # Example
///
/// ```rust
/// use seedforge_noise::{Fractal, FractalParams, SimplexNoise};
///
/// let terrain = Fractal::new(SimplexNoise::new(42), FractalParams::default()).unwrap();
/// let height = terrain.fbm(12.5, Some(-3.0), None);
/// let ridges = terrain.ridged(12.5, Some(-3.0), None);
/// assert!((-1.0..=1.0).contains(&height));
/// assert!((0.0..=1.0).contains(&ridges));
/// ```
#[derive(Clone, Debug)]
pub struct Fractal<N> {
    noise: N,
    params: FractalParams,
}

impl<N: NoiseField> Fractal<N> {
    /// Wraps `noise` with validated octave parameters.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidParameter`] as
    /// [`FractalParams::validate`] does.
    pub fn new(noise: N, params: FractalParams) -> NoiseResult<Self> {
        Ok(Self {
            noise,
            params: params.validate()?,
        })
    }

    /// Base noise field.
    #[must_use]
    pub const fn noise(&self) -> &N {
        &self.noise
    }

    /// Active octave parameters.
    #[must_use]
    pub const fn params(&self) -> FractalParams {
        self.params
    }

    /// Fractal Brownian motion.
    ///
    /// The dimension follows the coordinates given: `x` alone samples 1D,
    /// `x, y` 2D, and any `z` samples 3D (a missing `y` then reads as 0).
    #[must_use]
    pub fn fbm(&self, x: f64, y: Option<f64>, z: Option<f64>) -> f64 {
        self.accumulate(x, y, z, |n| n)
    }

    /// Ridged multifractal: each octave contributes `(1 - |n|)^2`.
    ///
    /// Over a `[-1, 1]` field the result lies in `[0, 1]`, with sharp crests
    /// where the base noise crosses zero.
    #[must_use]
    pub fn ridged(&self, x: f64, y: Option<f64>, z: Option<f64>) -> f64 {
        self.accumulate(x, y, z, |n| {
            let ridge = 1.0 - n.abs();
            ridge * ridge
        })
    }

    fn accumulate(
        &self,
        x: f64,
        y: Option<f64>,
        z: Option<f64>,
        shape: impl Fn(f64) -> f64,
    ) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;

        for _ in 0..self.params.octaves {
            let n = match (y, z) {
                (None, None) => self.noise.sample1(x * frequency),
                (Some(y), None) => self.noise.sample2(x * frequency, y * frequency),
                (y, Some(z)) => self.noise.sample3(
                    x * frequency,
                    y.unwrap_or(0.0) * frequency,
                    z * frequency,
                ),
            };
            total += shape(n) * amplitude;
            max_amplitude += amplitude;
            amplitude *= self.params.persistence;
            frequency *= self.params.lacunarity;
        }

        total / max_amplitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SimplexNoise, ValueNoise};

    /// Field that reports which dimension was sampled.
    struct DimensionMarker;

    impl NoiseField for DimensionMarker {
        fn sample1(&self, _x: f64) -> f64 {
            0.1
        }

        fn sample2(&self, _x: f64, _y: f64) -> f64 {
            0.2
        }

        fn sample3(&self, _x: f64, _y: f64, _z: f64) -> f64 {
            0.3
        }
    }

    #[test]
    fn test_dimension_follows_arguments() {
        let fractal = Fractal::new(DimensionMarker, FractalParams::default()).unwrap();
        assert!((fractal.fbm(1.0, None, None) - 0.1).abs() < 1e-12);
        assert!((fractal.fbm(1.0, Some(2.0), None) - 0.2).abs() < 1e-12);
        assert!((fractal.fbm(1.0, Some(2.0), Some(3.0)) - 0.3).abs() < 1e-12);
        assert!((fractal.fbm(1.0, None, Some(3.0)) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_accessors_expose_parts() {
        let params = FractalParams {
            octaves: 3,
            ..FractalParams::default()
        };
        let fractal = Fractal::new(DimensionMarker, params).unwrap();
        assert_eq!(fractal.params(), params);
        assert!((fractal.noise().sample1(0.0) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_single_octave_is_base_noise() {
        let params = FractalParams {
            octaves: 1,
            ..FractalParams::default()
        };
        let fractal = Fractal::new(SimplexNoise::new(5), params).unwrap();
        let base = SimplexNoise::new(5);
        for i in 0..50 {
            let x = f64::from(i) * 0.31;
            assert_eq!(
                fractal.fbm(x, Some(x * 0.5), None).to_bits(),
                base.noise2d(x, x * 0.5).to_bits()
            );
        }
    }

    #[test]
    fn test_fbm_value_stays_in_unit_range() {
        let fractal = Fractal::new(ValueNoise::new(9), FractalParams::default()).unwrap();
        for i in 0..2_000 {
            let x = f64::from(i) * 0.07 - 70.0;
            let v = fractal.fbm(x, Some(x * 1.3), Some(-x));
            assert!((0.0..=1.0).contains(&v), "{v}");
        }
    }

    #[test]
    fn test_fbm_simplex_range() {
        let params = FractalParams {
            octaves: 6,
            ..FractalParams::default()
        };
        let fractal = Fractal::new(SimplexNoise::new(42), params).unwrap();
        for i in 0..2_000 {
            let x = f64::from(i) * 0.11 - 110.0;
            let v = fractal.fbm(x, Some(x * 0.7), None);
            assert!((-1.0..=1.0).contains(&v), "{v}");
        }
    }

    #[test]
    fn test_ridged_range() {
        let fractal = Fractal::new(SimplexNoise::new(42), FractalParams::default()).unwrap();
        for i in 0..2_000 {
            let x = f64::from(i) * 0.13;
            let v = fractal.ridged(x, Some(-x), Some(x * 0.5));
            assert!((0.0..=1.0).contains(&v), "{v}");
        }
    }

    #[test]
    fn test_params_from_toml() {
        let params = FractalParams::from_toml_str("octaves = 6\npersistence = 0.45").unwrap();
        assert_eq!(params.octaves, 6);
        assert!((params.persistence - 0.45).abs() < f64::EPSILON);
        assert!((params.lacunarity - 2.0).abs() < f64::EPSILON);
        assert_eq!(FractalParams::from_toml_str("").unwrap(), FractalParams::default());
    }

    #[test]
    fn test_params_rejected() {
        assert!(matches!(
            FractalParams::from_toml_str("octaves = 0"),
            Err(NoiseError::InvalidParameter { name: "octaves", .. })
        ));
        assert!(matches!(
            FractalParams::from_toml_str("lacunarity = -2.0"),
            Err(NoiseError::InvalidParameter { name: "lacunarity", .. })
        ));
        assert!(matches!(
            FractalParams::from_toml_str("octaves = \"many\""),
            Err(NoiseError::InvalidConfig(_))
        ));
        let flat = FractalParams {
            persistence: 0.0,
            ..FractalParams::default()
        };
        assert!(Fractal::new(DimensionMarker, flat).is_err());
    }
}

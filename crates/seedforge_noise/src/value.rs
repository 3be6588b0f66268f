//! # Value Noise
//!
//! Lattice noise: every integer lattice point carries a pseudo-random value
//! `hash / 255`, and samples between lattice points blend the surrounding
//! corners with the quintic fade `6t^5 - 15t^4 + 10t^3`.
//!
//! Output is **exactly** `[0, 1]`: a convex blend of values that are
//! themselves in `[0, 1]`.

use seedforge_core::{Algorithm, Seed};

use crate::fractal::NoiseField;
use crate::permutation::{cell, next_cell, PermutationTable};

/// 1D/2D/3D value noise.
///
/// # Example
///
/// ```rust
/// use seedforge_noise::ValueNoise;
///
/// let noise = ValueNoise::new("caves");
/// let density = noise.noise3d(1.5, 2.25, -0.75);
/// assert!((0.0..=1.0).contains(&density));
/// ```
#[derive(Clone, Debug)]
pub struct ValueNoise {
    perm: PermutationTable,
}

impl ValueNoise {
    /// Creates value noise whose table is shuffled by the default algorithm.
    #[must_use]
    pub fn new(seed: impl Into<Seed>) -> Self {
        Self::with_algorithm(seed, Algorithm::default())
    }

    /// Creates value noise whose table is shuffled by `algorithm`.
    #[must_use]
    pub fn with_algorithm(seed: impl Into<Seed>, algorithm: Algorithm) -> Self {
        Self {
            perm: PermutationTable::new(seed.into(), algorithm),
        }
    }

    /// 1D value noise in `[0, 1]`.
    #[must_use]
    pub fn noise1d(&self, x: f64) -> f64 {
        let (x0, u) = split(x);
        let x1 = next_cell(x0);

        lerp(self.hash1(x0), self.hash1(x1), u)
    }

    /// 2D value noise in `[0, 1]`.
    #[must_use]
    pub fn noise2d(&self, x: f64, y: f64) -> f64 {
        let (x0, u) = split(x);
        let (y0, v) = split(y);
        let (x1, y1) = (next_cell(x0), next_cell(y0));

        let bottom = lerp(self.hash2(x0, y0), self.hash2(x1, y0), u);
        let top = lerp(self.hash2(x0, y1), self.hash2(x1, y1), u);
        lerp(bottom, top, v)
    }

    /// 3D value noise in `[0, 1]`.
    #[must_use]
    pub fn noise3d(&self, x: f64, y: f64, z: f64) -> f64 {
        let (x0, u) = split(x);
        let (y0, v) = split(y);
        let (z0, w) = split(z);
        let (x1, y1, z1) = (next_cell(x0), next_cell(y0), next_cell(z0));

        let near = lerp(
            lerp(self.hash3(x0, y0, z0), self.hash3(x1, y0, z0), u),
            lerp(self.hash3(x0, y1, z0), self.hash3(x1, y1, z0), u),
            v,
        );
        let far = lerp(
            lerp(self.hash3(x0, y0, z1), self.hash3(x1, y0, z1), u),
            lerp(self.hash3(x0, y1, z1), self.hash3(x1, y1, z1), u),
            v,
        );
        lerp(near, far, w)
    }

    #[inline]
    fn hash1(&self, x: usize) -> f64 {
        unit(self.perm.get(x))
    }

    #[inline]
    fn hash2(&self, x: usize, y: usize) -> f64 {
        unit(self.perm.get(self.perm.get(x) + y))
    }

    #[inline]
    fn hash3(&self, x: usize, y: usize, z: usize) -> f64 {
        let xy = self.perm.get(self.perm.get(x) + y);
        unit(self.perm.get(xy + z))
    }
}

impl NoiseField for ValueNoise {
    fn sample1(&self, x: f64) -> f64 {
        self.noise1d(x)
    }

    fn sample2(&self, x: f64, y: f64) -> f64 {
        self.noise2d(x, y)
    }

    fn sample3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.noise3d(x, y, z)
    }
}

/// Lattice cell of `x` and the faded offset inside it.
#[inline]
fn split(x: f64) -> (usize, f64) {
    let floor = x.floor();
    (cell(floor), fade(x - floor))
}

/// Quintic fade curve.
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

#[inline]
fn unit(hash: usize) -> f64 {
    hash as f64 / 255.0
}

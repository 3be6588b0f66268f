//! Array, geometric and special-value helpers.

use std::f64::consts::TAU;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Generator;
use crate::error::{SeedError, SeedResult};

/// Default character set for [`Generator::string`].
pub const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// An RGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// An HSL color: hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue, `0..360`.
    pub hue: u16,
    /// Saturation, `0..=100`.
    pub saturation: u8,
    /// Lightness, `0..=100`.
    pub lightness: u8,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

impl Generator {
    // =========================================================================
    // ARRAYS
    // =========================================================================

    /// Fisher–Yates shuffle in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.int(0, i as i64) as usize;
            items.swap(i, j);
        }
    }

    /// Shuffled copy; `items` is untouched.
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut copy = items.to_vec();
        self.shuffle(&mut copy);
        copy
    }

    /// Uniformly chosen element, or `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.int(0, items.len() as i64 - 1) as usize;
        items.get(index)
    }

    /// `min(n, len)` distinct elements in random order; `items` is untouched.
    pub fn sample<T: Clone>(&mut self, items: &[T], n: usize) -> Vec<T> {
        let mut copy = self.shuffled(items);
        copy.truncate(n);
        copy
    }

    /// Element chosen with probability proportional to its weight.
    ///
    /// Scans the cumulative weights and returns the first item at which the
    /// running remainder reaches zero; the last item catches rounding.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::LengthMismatch`] if the slices differ in length.
    pub fn weighted_pick<'a, T>(
        &mut self,
        items: &'a [T],
        weights: &[f64],
    ) -> SeedResult<Option<&'a T>> {
        if items.len() != weights.len() {
            return Err(SeedError::LengthMismatch {
                items: items.len(),
                weights: weights.len(),
            });
        }
        let index = self.weighted_index(weights);
        Ok(index.and_then(|i| items.get(i)))
    }

    /// Weighted pick over `(item, weight)` pairs, the keyed form of
    /// [`Generator::weighted_pick`].
    pub fn weighted_pick_pairs<'a, T>(&mut self, entries: &'a [(T, f64)]) -> Option<&'a T> {
        let weights: Vec<f64> = entries.iter().map(|(_, weight)| *weight).collect();
        self.weighted_index(&weights)
            .and_then(|i| entries.get(i))
            .map(|(item, _)| item)
    }

    fn weighted_index(&mut self, weights: &[f64]) -> Option<usize> {
        let last = weights.len().checked_sub(1)?;
        let total: f64 = weights.iter().sum();
        let mut remaining = self.random() * total;
        for (i, weight) in weights.iter().enumerate() {
            remaining -= weight;
            if remaining <= 0.0 {
                return Some(i);
            }
        }
        Some(last)
    }

    // =========================================================================
    // GEOMETRY
    // =========================================================================

    /// Uniform point inside a disc of `radius`.
    ///
    /// The radius is `radius * sqrt(U)` so the density is uniform per area.
    pub fn point_in_circle(&mut self, radius: f64) -> (f64, f64) {
        let angle = self.random() * TAU;
        let r = radius * self.random().sqrt();
        (r * angle.cos(), r * angle.sin())
    }

    /// Uniform point on a circle of `radius`.
    pub fn point_on_circle(&mut self, radius: f64) -> (f64, f64) {
        let angle = self.random() * TAU;
        (radius * angle.cos(), radius * angle.sin())
    }

    /// Uniform point inside a ball of `radius`.
    ///
    /// The radius is `radius * cbrt(U)` so the density is uniform per volume.
    pub fn point_in_sphere(&mut self, radius: f64) -> (f64, f64, f64) {
        let (x, y, z) = self.point_on_sphere(1.0);
        let r = radius * self.random().cbrt();
        (x * r, y * r, z * r)
    }

    /// Uniform point on a sphere of `radius` (Archimedes' projection).
    pub fn point_on_sphere(&mut self, radius: f64) -> (f64, f64, f64) {
        let z = self.random() * 2.0 - 1.0;
        let angle = self.random() * TAU;
        let ring = (1.0 - z * z).sqrt();
        (
            radius * ring * angle.cos(),
            radius * ring * angle.sin(),
            radius * z,
        )
    }

    // =========================================================================
    // SPECIAL VALUES
    // =========================================================================

    /// RFC 4122 version-4 UUID built from 128 drawn bits.
    pub fn uuid(&mut self) -> String {
        let mut bytes = [0u8; 16];
        for chunk in bytes.chunks_exact_mut(4) {
            chunk.copy_from_slice(&self.random_int().to_be_bytes());
        }
        uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .hyphenated()
            .to_string()
    }

    /// Hex color `#rrggbb`.
    pub fn color(&mut self) -> String {
        format!("#{:06x}", self.int(0, 0xFF_FFFF))
    }

    /// Random RGB color.
    pub fn color_rgb(&mut self) -> Rgb {
        Rgb {
            r: self.int(0, 255) as u8,
            g: self.int(0, 255) as u8,
            b: self.int(0, 255) as u8,
        }
    }

    /// Random HSL color.
    pub fn color_hsl(&mut self) -> Hsl {
        Hsl {
            hue: self.int(0, 359) as u16,
            saturation: self.int(0, 100) as u8,
            lightness: self.int(0, 100) as u8,
        }
    }

    /// Uniform character from `charset`, or `None` if it is empty.
    pub fn char(&mut self, charset: &str) -> Option<char> {
        let chars: Vec<char> = charset.chars().collect();
        self.pick(&chars).copied()
    }

    /// String of `len` characters drawn from `charset`.
    ///
    /// An empty `charset` yields an empty string.
    pub fn string(&mut self, len: usize, charset: &str) -> String {
        let chars: Vec<char> = charset.chars().collect();
        if chars.is_empty() {
            return String::new();
        }
        (0..len).filter_map(|_| self.pick(&chars).copied()).collect()
    }
}

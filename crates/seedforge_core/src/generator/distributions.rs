//! Statistical distributions over the uniform stream.
//!
//! Rejection loops (normal, gamma, von Mises) run until acceptance. There is
//! no iteration cap.

use std::f64::consts::PI;

use super::Generator;
use crate::error::{SeedError, SeedResult};

impl Generator {
    /// Normal deviate via the Marsaglia polar method.
    ///
    /// Each accepted pair yields two deviates; the second is cached and
    /// returned (rescaled) by the next call.
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        if let Some(spare) = self.normal_cache.spare.take() {
            return mean + std_dev * spare;
        }

        let (u, v, s) = loop {
            let u = self.random() * 2.0 - 1.0;
            let v = self.random() * 2.0 - 1.0;
            let s = u * u + v * v;
            if s > 0.0 && s < 1.0 {
                break (u, v, s);
            }
        };

        let factor = (-2.0 * s.ln() / s).sqrt();
        self.normal_cache.spare = Some(v * factor);
        mean + std_dev * u * factor
    }

    /// Exponential deviate with rate `lambda` (inverse CDF).
    pub fn exponential(&mut self, lambda: f64) -> f64 {
        -(1.0 - self.random()).ln() / lambda
    }

    /// Poisson count with mean `lambda` (Knuth's multiplicative method).
    pub fn poisson(&mut self, lambda: f64) -> u64 {
        let limit = (-lambda).exp();
        let mut product = 1.0;
        let mut iterations = 0u64;
        loop {
            iterations += 1;
            product *= self.random();
            if product <= limit {
                return iterations - 1;
            }
        }
    }

    /// Number of successes in `n` Bernoulli(`p`) trials.
    pub fn binomial(&mut self, n: u64, p: f64) -> u64 {
        (0..n).map(|_| u64::from(self.random() < p)).sum()
    }

    /// Pareto deviate with shape `alpha` and scale (minimum) `xm`.
    pub fn pareto(&mut self, alpha: f64, xm: f64) -> f64 {
        xm / (1.0 - self.random()).powf(1.0 / alpha)
    }

    /// Gamma deviate (Marsaglia–Tsang).
    ///
    /// Shapes below 1 are boosted: `gamma(1 + shape) * U^(1 / shape)`.
    pub fn gamma(&mut self, shape: f64, scale: f64) -> f64 {
        if shape < 1.0 {
            let boosted = self.gamma(1.0 + shape, scale);
            return boosted * self.random().powf(1.0 / shape);
        }

        let d = shape - 1.0 / 3.0;
        let c = 1.0 / (9.0 * d).sqrt();
        loop {
            let (x, v) = loop {
                let x = self.normal(0.0, 1.0);
                let v = 1.0 + c * x;
                if v > 0.0 {
                    break (x, v);
                }
            };
            let v = v * v * v;
            let u = self.random();
            let x2 = x * x;
            // Squeeze first, full log test second.
            if u < 1.0 - 0.0331 * x2 * x2 || u.ln() < 0.5 * x2 + d * (1.0 - v + v.ln()) {
                return d * v * scale;
            }
        }
    }

    /// Beta deviate as `X / (X + Y)` of two gamma draws.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::InvalidParameter`] if either shape is not positive.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn beta(&mut self, alpha: f64, beta: f64) -> SeedResult<f64> {
        // Negated comparisons also reject NaN.
        if !(alpha > 0.0) {
            return Err(SeedError::InvalidParameter {
                name: "alpha",
                value: alpha,
            });
        }
        if !(beta > 0.0) {
            return Err(SeedError::InvalidParameter {
                name: "beta",
                value: beta,
            });
        }
        let x = self.gamma(alpha, 1.0);
        let y = self.gamma(beta, 1.0);
        Ok(x / (x + y))
    }

    /// Triangular deviate on `[min, max]` peaking at `mode` (inverse CDF).
    pub fn triangular(&mut self, min: f64, max: f64, mode: f64) -> f64 {
        let u = self.random();
        let range = max - min;
        let split = (mode - min) / range;
        if u < split {
            min + (u * range * (mode - min)).sqrt()
        } else {
            max - ((1.0 - u) * range * (max - mode)).sqrt()
        }
    }

    /// Log-normal deviate: `exp(normal(mu, sigma))`.
    pub fn log_normal(&mut self, mu: f64, sigma: f64) -> f64 {
        self.normal(mu, sigma).exp()
    }

    /// Weibull deviate (inverse CDF).
    pub fn weibull(&mut self, scale: f64, shape: f64) -> f64 {
        scale * (-(1.0 - self.random()).ln()).powf(1.0 / shape)
    }

    /// Cauchy deviate: tangent of a uniform angle.
    pub fn cauchy(&mut self, location: f64, scale: f64) -> f64 {
        location + scale * (PI * (self.random() - 0.5)).tan()
    }

    /// Number of Bernoulli(`p`) trials up to and including the first success.
    ///
    /// Support is `1, 2, ...`; `p >= 1` always returns 1.
    pub fn geometric(&mut self, p: f64) -> u64 {
        if p >= 1.0 {
            return 1;
        }
        let u = self.random();
        let trials = ((1.0 - u).ln() / (1.0 - p).ln()).ceil();
        (trials as u64).max(1)
    }

    /// Zipf rank in `1..=n` with exponent `s` (inverse CDF over `k^-s`).
    ///
    /// `n == 0` returns 0.
    pub fn zipf(&mut self, n: u64, s: f64) -> u64 {
        if n == 0 {
            return 0;
        }
        let weight = |k: u64| (k as f64).powf(-s);
        let harmonic: f64 = (1..=n).map(weight).sum();
        let mut remaining = self.random() * harmonic;
        for k in 1..=n {
            remaining -= weight(k);
            if remaining <= 0.0 {
                return k;
            }
        }
        n
    }

    /// Chi-squared deviate with `k` degrees of freedom: `gamma(k / 2, 2)`.
    pub fn chi_squared(&mut self, k: f64) -> f64 {
        self.gamma(k / 2.0, 2.0)
    }

    /// Student's t deviate: `Z / sqrt(chi_squared(df) / df)`.
    pub fn student_t(&mut self, df: f64) -> f64 {
        let z = self.normal(0.0, 1.0);
        z / (self.chi_squared(df) / df).sqrt()
    }

    /// Von Mises (circular normal) angle around `mu` with concentration
    /// `kappa` (Best–Fisher rejection).
    ///
    /// The result lies within π of `mu`. `kappa` near zero is the uniform
    /// circle.
    pub fn von_mises(&mut self, mu: f64, kappa: f64) -> f64 {
        if kappa < 1e-6 {
            return mu + PI * (2.0 * self.random() - 1.0);
        }

        let tau = 1.0 + (1.0 + 4.0 * kappa * kappa).sqrt();
        let rho = (tau - (2.0 * tau).sqrt()) / (2.0 * kappa);
        let r = (1.0 + rho * rho) / (2.0 * rho);

        loop {
            let z = (PI * self.random()).cos();
            let f = (1.0 + r * z) / (r + z);
            let c = kappa * (r - f);
            let u2 = self.random();
            if c * (2.0 - c) - u2 > 0.0 || (c / u2).ln() + 1.0 - c >= 0.0 {
                let offset = f.clamp(-1.0, 1.0).acos();
                return if self.random() > 0.5 {
                    mu + offset
                } else {
                    mu - offset
                };
            }
        }
    }

    /// Successes in `draws` draws without replacement from a population of
    /// `population` items containing `successes` successes.
    ///
    /// `successes` is clamped to `population` and `draws` to `population`.
    pub fn hypergeometric(&mut self, population: u64, successes: u64, draws: u64) -> u64 {
        let mut remaining = population;
        let mut remaining_successes = successes.min(population);
        let mut found = 0;
        for _ in 0..draws.min(population) {
            let p = remaining_successes as f64 / remaining as f64;
            if self.random() < p {
                found += 1;
                remaining_successes -= 1;
            }
            remaining -= 1;
        }
        found
    }
}

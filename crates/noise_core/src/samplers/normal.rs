//! Gaussian samples via the Box–Muller transform.

use std::f64::consts::TAU;

use super::{base_noise, check_clamp};
use crate::math::scale::unit_open_closed;
use crate::noise::Noise;
use crate::traits::Sampler;
use crate::types::{Coord, NoiseError, NoiseOptions};

/// Pair of independent normal deviates per coordinate.
///
/// # Algorithm
///
/// With `θ` uniform on `[0, 2π]` (channel 0) and `u` uniform on `(0, 1]`
/// (channel 1):
///
/// ```text
/// r = sqrt(-2 ln u)
/// (σ r cos θ + μ, σ r sin θ + μ)
/// ```
///
/// An optional clamp truncates each component into `[lo, hi]`, which piles
/// the clipped mass onto the bounds.
///
/// # Examples
/// ```
/// use noise_core::samplers::NormalPair;
/// use noise_core::{NoiseOptions, Sampler};
///
/// let normal = NormalPair::new(NoiseOptions::default())
///     .unwrap()
///     .with_mean(100.0)
///     .with_stddev(15.0)
///     .unwrap();
/// let (a, b) = normal.sample(7);
/// assert!(a.is_finite() && b.is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct NormalPair {
    angle: Noise,
    radius: Noise,
    mean: f64,
    stddev: f64,
    clamp: Option<(f64, f64)>,
}

impl NormalPair {
    /// Standard normal sampler (`μ = 0`, `σ = 1`).
    pub fn new(options: NoiseOptions) -> Result<Self, NoiseError> {
        let base = base_noise(options)?;
        Ok(Self {
            angle: base.channel_with_range(0, 0.0, TAU)?,
            radius: base.channel(1),
            mean: 0.0,
            stddev: 1.0,
            clamp: None,
        })
    }

    /// Copy with a different mean.
    pub fn with_mean(mut self, mean: f64) -> Self {
        self.mean = mean;
        self
    }

    /// Copy with a different standard deviation.
    ///
    /// # Returns
    ///
    /// * `Err(NoiseError::InvalidParameter)` - negative or non-finite `stddev`
    pub fn with_stddev(mut self, stddev: f64) -> Result<Self, NoiseError> {
        if !stddev.is_finite() || stddev < 0.0 {
            return Err(NoiseError::InvalidParameter {
                name: "stddev",
                reason: format!("{} must be finite and non-negative", stddev),
            });
        }
        self.stddev = stddev;
        Ok(self)
    }

    /// Copy truncating both components into `[lo, hi]`.
    pub fn with_clamp(mut self, lo: f64, hi: f64) -> Result<Self, NoiseError> {
        check_clamp(lo, hi)?;
        self.clamp = Some((lo, hi));
        Ok(self)
    }

    /// Mean of each component.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation of each component.
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    #[inline]
    fn finish(&self, z: f64) -> f64 {
        let value = self.stddev * z + self.mean;
        match self.clamp {
            Some((lo, hi)) => value.clamp(lo, hi),
            None => value,
        }
    }
}

impl Sampler for NormalPair {
    type Output = (f64, f64);

    #[inline]
    fn sample_at(&self, coord: Coord) -> (f64, f64) {
        let theta = self.angle.sample_at(coord);
        let u = unit_open_closed(self.radius.raw(coord));
        let r = (-2.0 * u.ln()).sqrt();
        let (sin, cos) = theta.sin_cos();
        (self.finish(r * cos), self.finish(r * sin))
    }
}

/// Scalar normal sampler: the first component of a [`NormalPair`].
///
/// # Examples
/// ```
/// use noise_core::samplers::Normal;
/// use noise_core::{NoiseOptions, Sampler};
///
/// let normal = Normal::new(NoiseOptions::default()).unwrap().with_clamp(-3.0, 3.0).unwrap();
/// assert!(normal.sequence().take(1000).all(|z| (-3.0..=3.0).contains(&z)));
/// ```
#[derive(Debug, Clone)]
pub struct Normal {
    pair: NormalPair,
}

impl Normal {
    /// Standard normal sampler (`μ = 0`, `σ = 1`).
    pub fn new(options: NoiseOptions) -> Result<Self, NoiseError> {
        Ok(Self {
            pair: NormalPair::new(options)?,
        })
    }

    /// Copy with a different mean.
    pub fn with_mean(self, mean: f64) -> Self {
        Self {
            pair: self.pair.with_mean(mean),
        }
    }

    /// Copy with a different standard deviation.
    pub fn with_stddev(self, stddev: f64) -> Result<Self, NoiseError> {
        Ok(Self {
            pair: self.pair.with_stddev(stddev)?,
        })
    }

    /// Copy truncating the output into `[lo, hi]`.
    pub fn with_clamp(self, lo: f64, hi: f64) -> Result<Self, NoiseError> {
        Ok(Self {
            pair: self.pair.with_clamp(lo, hi)?,
        })
    }
}

impl Sampler for Normal {
    type Output = f64;

    #[inline]
    fn sample_at(&self, coord: Coord) -> f64 {
        self.pair.sample_at(coord).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moments(values: impl Iterator<Item = f64>) -> (f64, f64) {
        let values: Vec<f64> = values.collect();
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        (mean, var.sqrt())
    }

    #[test]
    fn test_standard_moments() {
        let normal = Normal::new(NoiseOptions::default()).unwrap();
        let (mean, sd) = moments(normal.sequence().take(100_000));
        assert!(mean.abs() < 0.01, "mean {}", mean);
        assert!((sd - 1.0).abs() < 0.01, "sd {}", sd);
    }

    #[test]
    fn test_shifted_moments() {
        let normal = Normal::new(NoiseOptions::default())
            .unwrap()
            .with_mean(10.0)
            .with_stddev(10.0)
            .unwrap();
        let (mean, sd) = moments(normal.sequence().take(100_000));
        assert!((mean - 10.0).abs() < 0.1, "mean {}", mean);
        assert!((sd - 10.0).abs() < 0.1, "sd {}", sd);
    }

    #[test]
    fn test_pair_components_are_finite_and_uncorrelated() {
        let pair = NormalPair::new(NoiseOptions::default().with_seed(17)).unwrap();
        let samples: Vec<(f64, f64)> = pair.sequence().take(50_000).collect();
        assert!(samples.iter().all(|(a, b)| a.is_finite() && b.is_finite()));
        let n = samples.len() as f64;
        let cov = samples.iter().map(|(a, b)| a * b).sum::<f64>() / n;
        assert!(cov.abs() < 0.03, "covariance {}", cov);
    }

    #[test]
    fn test_clamp_bounds_output() {
        let pair = NormalPair::new(NoiseOptions::default())
            .unwrap()
            .with_clamp(-0.5, 0.5)
            .unwrap();
        for (a, b) in pair.sequence().take(10_000) {
            assert!((-0.5..=0.5).contains(&a));
            assert!((-0.5..=0.5).contains(&b));
        }
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let pair = NormalPair::new(NoiseOptions::default()).unwrap();
        assert!(pair.clone().with_stddev(f64::NAN).is_err());
        assert!(pair.clone().with_stddev(-1.0).is_err());
        assert!(pair.with_clamp(1.0, -1.0).is_err());
    }
}

//! Poisson counts by inverse-transform sampling.

use tracing::debug;

use super::base_noise;
use crate::math::scale::unit_closed_open;
use crate::noise::Noise;
use crate::traits::Sampler;
use crate::types::{Coord, NoiseError, NoiseOptions};

/// Largest supported rate; the CDF walk is linear in `λ`.
pub const MAX_LAMBDA: f64 = 30.0;

/// Poisson sampler with rate `λ` in `(0, 30]`.
///
/// # Algorithm
///
/// Walk the cumulative distribution until it passes a uniform `u` in
/// `[0, 1)`:
///
/// ```text
/// x = 0, p = e^-λ, s = p
/// while u > s { x += 1; p *= λ / x; s += p }
/// ```
///
/// # Examples
/// ```
/// use noise_core::samplers::Poisson;
/// use noise_core::{NoiseError, NoiseOptions, Sampler};
///
/// let arrivals = Poisson::new(2.0, NoiseOptions::default()).unwrap();
/// let total: u32 = arrivals.sequence().take(1000).sum();
/// assert!(total > 1800 && total < 2200);
///
/// assert_eq!(
///     Poisson::new(50.0, NoiseOptions::default()).unwrap_err(),
///     NoiseError::InvalidLambda(50.0)
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Poisson {
    noise: Noise,
    lambda: f64,
    clamp: Option<(u32, u32)>,
}

impl Poisson {
    /// Build a sampler with rate `lambda`.
    ///
    /// # Returns
    ///
    /// * `Err(NoiseError::InvalidLambda)` - `lambda` outside `(0, 30]`
    pub fn new(lambda: f64, options: NoiseOptions) -> Result<Self, NoiseError> {
        if !(lambda > 0.0 && lambda <= MAX_LAMBDA) {
            return Err(NoiseError::InvalidLambda(lambda));
        }
        debug!(lambda, "built poisson sampler");
        Ok(Self {
            noise: base_noise(options)?,
            lambda,
            clamp: None,
        })
    }

    /// Copy restricting counts to `[lo, hi]`.
    ///
    /// # Returns
    ///
    /// * `Err(NoiseError::InvalidParameter)` - `lo > hi`
    pub fn with_clamp(mut self, lo: u32, hi: u32) -> Result<Self, NoiseError> {
        if lo > hi {
            return Err(NoiseError::InvalidParameter {
                name: "clamp",
                reason: format!("lower bound {} exceeds upper bound {}", lo, hi),
            });
        }
        self.clamp = Some((lo, hi));
        Ok(self)
    }

    /// The rate.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl Sampler for Poisson {
    type Output = u32;

    fn sample_at(&self, coord: Coord) -> u32 {
        let u = unit_closed_open(self.noise.raw(coord));
        let mut x = 0u32;
        let mut p = (-self.lambda).exp();
        let mut s = p;
        // p underflows to 0 before s can stall below u
        while u > s && p > 0.0 {
            x += 1;
            p *= self.lambda / x as f64;
            s += p;
        }
        match self.clamp {
            Some((lo, hi)) => x.clamp(lo, hi),
            None => x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mean(sampler: &Poisson, n: usize) -> f64 {
        sampler.sequence().take(n).map(f64::from).sum::<f64>() / n as f64
    }

    #[test]
    fn test_mean_matches_lambda() {
        for (lambda, seed) in [(2.0, 0), (2.0, 9), (0.5, 5), (30.0, 0)] {
            let sampler = Poisson::new(lambda, NoiseOptions::default().with_seed(seed)).unwrap();
            let m = mean(&sampler, 10_000);
            assert!(
                (m - lambda).abs() < 0.05 * lambda,
                "lambda {} seed {} mean {}",
                lambda,
                seed,
                m
            );
        }
    }

    #[test]
    fn test_lambda_gate() {
        for lambda in [-1.0, 0.0, 30.5, 50.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    Poisson::new(lambda, NoiseOptions::default()),
                    Err(NoiseError::InvalidLambda(_))
                ),
                "lambda {} accepted",
                lambda
            );
        }
        assert!(Poisson::new(MAX_LAMBDA, NoiseOptions::default()).is_ok());
    }

    #[test]
    fn test_clamp() {
        let sampler = Poisson::new(5.0, NoiseOptions::default())
            .unwrap()
            .with_clamp(3, 6)
            .unwrap();
        assert!(sampler.sequence().take(5_000).all(|x| (3..=6).contains(&x)));
        assert!(Poisson::new(5.0, NoiseOptions::default())
            .unwrap()
            .with_clamp(6, 3)
            .is_err());
    }
}

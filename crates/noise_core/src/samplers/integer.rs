//! Uniform integers and discrete indices.

use super::base_noise;
use crate::noise::Noise;
use crate::traits::Sampler;
use crate::types::{Coord, NoiseError, NoiseOptions};

/// Uniform integer on the inclusive range `[lo, hi]`.
///
/// The hash is scaled onto `[lo, hi + 1]` and floored; the single hash value
/// that lands exactly on `hi + 1` is folded back onto `hi`.
///
/// # Examples
/// ```
/// use noise_core::samplers::Integers;
/// use noise_core::{NoiseOptions, Sampler};
///
/// let digits = Integers::new(0, 9, NoiseOptions::default()).unwrap();
/// assert!(digits.sequence().take(100).all(|d| (0..=9).contains(&d)));
/// ```
#[derive(Debug, Clone)]
pub struct Integers {
    noise: Noise,
    lo: i64,
    hi: i64,
}

impl Integers {
    /// Build a sampler over `[lo, hi]`.
    ///
    /// # Returns
    ///
    /// * `Err(NoiseError::InvalidParameter)` - `lo > hi`
    pub fn new(lo: i64, hi: i64, options: NoiseOptions) -> Result<Self, NoiseError> {
        if lo > hi {
            return Err(NoiseError::InvalidParameter {
                name: "range",
                reason: format!("lower bound {} exceeds upper bound {}", lo, hi),
            });
        }
        let noise = base_noise(options)?
            .channel_with_range(0, lo as f64, hi as f64 + 1.0)?
            .with_discrete(true);
        Ok(Self { noise, lo, hi })
    }

    /// Sampler over the indices `0..len` of a collection.
    ///
    /// # Returns
    ///
    /// * `Err(NoiseError::EmptyList)` - `len == 0`
    pub fn index(len: usize, options: NoiseOptions) -> Result<Self, NoiseError> {
        if len == 0 {
            return Err(NoiseError::EmptyList);
        }
        Self::new(0, len as i64 - 1, options)
    }

    /// Inclusive bounds.
    pub fn bounds(&self) -> (i64, i64) {
        (self.lo, self.hi)
    }
}

impl Sampler for Integers {
    type Output = i64;

    #[inline]
    fn sample_at(&self, coord: Coord) -> i64 {
        (self.noise.sample_at(coord) as i64).clamp(self.lo, self.hi)
    }
}

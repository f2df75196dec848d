//! Fair coin flips.

use super::base_noise;
use crate::noise::Noise;
use crate::traits::Sampler;
use crate::types::{Coord, NoiseError, NoiseOptions};

/// Boolean sampler: the hash scaled onto `[0, 2]` and compared with 1.
///
/// # Examples
/// ```
/// use noise_core::samplers::Boolean;
/// use noise_core::{NoiseOptions, Sampler};
///
/// let coin = Boolean::new(NoiseOptions::default().with_seed(4)).unwrap();
/// let heads = coin.sequence().take(1000).filter(|&b| b).count();
/// assert!(heads > 400 && heads < 600);
/// ```
#[derive(Debug, Clone)]
pub struct Boolean {
    noise: Noise,
}

impl Boolean {
    /// Build a boolean sampler.
    pub fn new(options: NoiseOptions) -> Result<Self, NoiseError> {
        let noise = base_noise(options)?.channel_with_range(0, 0.0, 2.0)?;
        Ok(Self { noise })
    }
}

impl Sampler for Boolean {
    type Output = bool;

    #[inline]
    fn sample_at(&self, coord: Coord) -> bool {
        self.noise.sample_at(coord) > 1.0
    }
}

//! Vectors of independently ranged components.

use super::base_noise;
use crate::noise::Noise;
use crate::traits::Sampler;
use crate::types::{Coord, NoiseError, NoiseOptions};

/// `N` uniform components, component `k` on channel `k` with its own range.
///
/// # Examples
/// ```
/// use noise_core::samplers::VectorNoise;
/// use noise_core::{NoiseOptions, Sampler};
///
/// let wind = VectorNoise::new([(-1.0, 1.0), (0.0, 50.0)], NoiseOptions::default()).unwrap();
/// let [direction, speed] = wind.sample(12);
/// assert!((-1.0..=1.0).contains(&direction));
/// assert!((0.0..=50.0).contains(&speed));
/// ```
#[derive(Debug, Clone)]
pub struct VectorNoise<const N: usize> {
    components: Vec<Noise>,
    ranges: [(f64, f64); N],
}

impl<const N: usize> VectorNoise<N> {
    /// Build a sampler with one `(lo, hi)` range per component.
    ///
    /// # Returns
    ///
    /// * `Err(NoiseError::InvalidRange)` - a non-finite bound
    pub fn new(ranges: [(f64, f64); N], options: NoiseOptions) -> Result<Self, NoiseError> {
        let base = base_noise(options)?;
        let components = ranges
            .iter()
            .enumerate()
            .map(|(channel, &(lo, hi))| base.channel_with_range(channel, lo, hi))
            .collect::<Result<Vec<_>, NoiseError>>()?;
        Ok(Self { components, ranges })
    }

    /// Output range of each component.
    pub fn ranges(&self) -> [(f64, f64); N] {
        self.ranges
    }
}

impl<const N: usize> Sampler for VectorNoise<N> {
    type Output = [f64; N];

    #[inline]
    fn sample_at(&self, coord: Coord) -> [f64; N] {
        std::array::from_fn(|k| self.components[k].sample_at(coord))
    }
}

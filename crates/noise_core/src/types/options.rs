//! Generator configuration.

use serde::{Deserialize, Serialize};

use super::{Dimensions, NoiseError, Seed, SeedObserver};
use crate::math::hash::HashAlgorithm;

/// Configuration of a [`Noise`](crate::Noise) generator.
///
/// `octave` and `lerp` act on the coordinate before hashing; `range` and
/// `discrete` act on the hashed value. Every field has a getter and a
/// `with_*` builder returning a modified copy.
///
/// # Serialisation
///
/// All fields except the seed observer round-trip through serde. Missing
/// fields take their defaults, so an empty TOML table is a valid
/// configuration:
///
/// ```toml
/// dimensions = 2
/// seed = "random"
/// lerp = true
/// range = [0.0, 10.0]
/// ```
///
/// # Example
///
/// ```
/// use noise_core::{Dimensions, NoiseOptions};
///
/// let options = NoiseOptions::default()
///     .with_dimensions(Dimensions::Two)
///     .with_range(0.0, 10.0)
///     .with_seed(7);
/// assert_eq!(options.range(), Some((0.0, 10.0)));
/// assert_eq!(options.octave(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseOptions {
    dimensions: Dimensions,
    seed: Seed,
    lerp: bool,
    range: Option<(f64, f64)>,
    discrete: bool,
    octave: u32,
    algorithm: HashAlgorithm,
    #[serde(skip)]
    on_seed: Option<SeedObserver>,
}

impl NoiseOptions {
    /// Number of coordinate axes read by the generator.
    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Seed, possibly symbolic.
    #[inline]
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Whether real coordinates are interpolated between lattice samples.
    #[inline]
    pub fn lerp(&self) -> bool {
        self.lerp
    }

    /// Output range, or `None` for raw hash values.
    #[inline]
    pub fn range(&self) -> Option<(f64, f64)> {
        self.range
    }

    /// Whether scaled output is floored to an integer.
    #[inline]
    pub fn discrete(&self) -> bool {
        self.discrete
    }

    /// Right shift applied to the folded coordinate.
    #[inline]
    pub fn octave(&self) -> u32 {
        self.octave
    }

    /// Bit-mix hash used for lattice samples.
    #[inline]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Callback run when a symbolic seed resolves.
    #[inline]
    pub fn on_seed(&self) -> Option<&SeedObserver> {
        self.on_seed.as_ref()
    }

    /// Copy with a different dimensionality.
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Copy with a different seed.
    pub fn with_seed(mut self, seed: impl Into<Seed>) -> Self {
        self.seed = seed.into();
        self
    }

    /// Copy with interpolation switched on or off.
    pub fn with_lerp(mut self, lerp: bool) -> Self {
        self.lerp = lerp;
        self
    }

    /// Copy with output scaled onto `[lo, hi]`.
    pub fn with_range(mut self, lo: f64, hi: f64) -> Self {
        self.range = Some((lo, hi));
        self
    }

    /// Copy returning raw hash values.
    pub fn without_range(mut self) -> Self {
        self.range = None;
        self
    }

    /// Copy with flooring switched on or off.
    pub fn with_discrete(mut self, discrete: bool) -> Self {
        self.discrete = discrete;
        self
    }

    /// Copy with a different octave level.
    pub fn with_octave(mut self, octave: u32) -> Self {
        self.octave = octave;
        self
    }

    /// Copy with a different hash algorithm.
    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Copy that reports the resolved seed to `callback`.
    ///
    /// The callback runs once, synchronously, when a `Random`, `Generate`
    /// or `Declaration` seed resolves. Fixed seeds never trigger it.
    pub fn with_on_seed(mut self, callback: impl Fn(i32) + Send + Sync + 'static) -> Self {
        self.on_seed = Some(SeedObserver::new(callback));
        self
    }

    /// Check the options for combinations no generator can honour.
    ///
    /// # Returns
    ///
    /// * `Err(NoiseError::UnsupportedInterpolation)` - `lerp` with four
    ///   dimensions
    /// * `Err(NoiseError::InvalidRange)` - non-finite range bounds
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.lerp && self.dimensions == Dimensions::Four {
            return Err(NoiseError::UnsupportedInterpolation(4));
        }
        if let Some((lo, hi)) = self.range {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(NoiseError::InvalidRange { lo, hi });
            }
        }
        Ok(())
    }
}

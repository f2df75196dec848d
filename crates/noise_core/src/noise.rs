//! The noise generator.
//!
//! [`Noise`] turns a coordinate into a value in four steps:
//!
//! 1. floor each axis onto the `i32` lattice (or, with `lerp`, find the
//!    surrounding lattice cell)
//! 2. fold the lattice point to one scalar and apply the octave shift
//! 3. hash the scalar with the resolved seed
//! 4. interpolate the cell corners, then scale and floor as configured
//!
//! Generators are immutable. Composite samplers derive *channels* from a
//! generator: copies that share the seed cell but hash with a decorrelated
//! seed and their own output range.

use std::sync::Arc;

use tracing::debug;

use crate::math::fold::{fold, octave, to_lattice};
use crate::math::interpolators::{lerp1, lerp2, lerp3, Cube, LatticeAxis};
use crate::math::scale::Scale;
use crate::samplers::channel::channel_mask;
use crate::traits::Sampler;
use crate::types::{Coord, Dimensions, NoiseError, NoiseOptions, SeedCell};

/// How real coordinates are turned into lattice samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Interpolation {
    /// Floor every axis
    Nearest,
    /// Lerp between two samples
    Linear,
    /// Bilerp between four samples
    Bilinear,
    /// Trilerp between eight samples
    Trilinear,
}

impl Interpolation {
    fn select(options: &NoiseOptions) -> Result<Self, NoiseError> {
        if !options.lerp() {
            return Ok(Interpolation::Nearest);
        }
        match options.dimensions() {
            Dimensions::One => Ok(Interpolation::Linear),
            Dimensions::Two => Ok(Interpolation::Bilinear),
            Dimensions::Three => Ok(Interpolation::Trilinear),
            Dimensions::Four => Err(NoiseError::UnsupportedInterpolation(4)),
        }
    }
}

/// Deterministic, coordinate-addressable noise generator.
///
/// Cloning is cheap and clones share the resolved seed.
///
/// # Examples
/// ```
/// use noise_core::{Dimensions, Noise, NoiseOptions, Sampler};
///
/// let dice = Noise::new(
///     NoiseOptions::default()
///         .with_range(1.0, 7.0)
///         .with_discrete(true)
///         .with_seed(99),
/// )
/// .unwrap();
/// let roll = dice.sample(0);
/// assert!((1.0..=7.0).contains(&roll) && roll.fract() == 0.0);
///
/// // Four-dimensional interpolation is rejected up front
/// let err = Noise::new(
///     NoiseOptions::default()
///         .with_dimensions(Dimensions::Four)
///         .with_lerp(true),
/// );
/// assert!(err.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Noise {
    options: NoiseOptions,
    interpolation: Interpolation,
    scale: Option<Scale>,
    seed: Arc<SeedCell>,
    seed_mask: i32,
}

impl Noise {
    /// Build a generator.
    ///
    /// `Fixed` and `Declaration` seeds resolve here; `Random` and `Generate`
    /// seeds resolve on the first sample.
    ///
    /// # Returns
    ///
    /// * `Err(NoiseError::UnsupportedInterpolation)` - `lerp` with four
    ///   dimensions
    /// * `Err(NoiseError::InvalidRange)` - non-finite range bounds
    pub fn new(options: NoiseOptions) -> Result<Self, NoiseError> {
        options.validate()?;
        let interpolation = Interpolation::select(&options)?;
        let scale = options
            .range()
            .map(|(lo, hi)| Scale::new(lo, hi))
            .transpose()?;
        let seed = Arc::new(SeedCell::new(
            options.seed().clone(),
            options.on_seed().cloned(),
        ));

        debug!(
            dimensions = options.dimensions().count(),
            seed_mode = options.seed().mode(),
            lerp = options.lerp(),
            octave = options.octave(),
            algorithm = options.algorithm().name(),
            "built noise generator"
        );

        Ok(Self {
            options,
            interpolation,
            scale,
            seed,
            seed_mask: 0,
        })
    }

    /// Options the generator was built from.
    #[inline]
    pub fn options(&self) -> &NoiseOptions {
        &self.options
    }

    /// Effective seed, resolving a symbolic seed if this is the first use.
    #[inline]
    pub fn seed(&self) -> i32 {
        self.seed.get() ^ self.seed_mask
    }

    /// Decorrelated copy hashing with channel `index` of this generator's
    /// seed.
    ///
    /// Channel 0 is the generator itself. The copy shares the seed cell, so
    /// a symbolic seed still resolves once.
    pub fn channel(&self, index: usize) -> Self {
        let mut derived = self.clone();
        derived.seed_mask = self.seed_mask ^ channel_mask(index);
        derived
    }

    /// Channel `index` with its output scaled onto `[lo, hi]`.
    ///
    /// # Returns
    ///
    /// * `Err(NoiseError::InvalidRange)` - non-finite bounds
    pub fn channel_with_range(&self, index: usize, lo: f64, hi: f64) -> Result<Self, NoiseError> {
        let mut derived = self.channel(index);
        derived.scale = Some(Scale::new(lo, hi)?);
        derived.options = derived.options.with_range(lo, hi);
        Ok(derived)
    }

    /// Copy with flooring switched on or off, sharing the seed cell.
    pub fn with_discrete(&self, discrete: bool) -> Self {
        let mut derived = self.clone();
        derived.options = derived.options.with_discrete(discrete);
        derived
    }

    /// Hash of a single lattice point, before any scaling.
    #[inline]
    pub fn lattice(&self, point: [i32; 4]) -> i32 {
        self.lattice_with_seed(self.seed(), point)
    }

    #[inline]
    fn lattice_with_seed(&self, seed: i32, point: [i32; 4]) -> i32 {
        let position = octave(fold(self.options.dimensions(), point), self.options.octave());
        self.options.algorithm().hash(seed, position)
    }

    /// Unscaled value at a coordinate: the lattice hash, or the
    /// interpolation of the surrounding hashes when `lerp` is on.
    ///
    /// The result lies in `[i32::MIN, i32::MAX]`.
    pub fn raw(&self, coord: Coord) -> f64 {
        let seed = self.seed();
        let [x, y, z, w] = coord.axes();
        match self.interpolation {
            Interpolation::Nearest => {
                let point = [to_lattice(x), to_lattice(y), to_lattice(z), to_lattice(w)];
                self.lattice_with_seed(seed, point) as f64
            }
            Interpolation::Linear => {
                let ax = LatticeAxis::new(x);
                let at = |px: i32| self.lattice_with_seed(seed, [px, 0, 0, 0]) as f64;
                lerp1(at(ax.lo), at(ax.hi), ax.t)
            }
            Interpolation::Bilinear => {
                let (ax, ay) = (LatticeAxis::new(x), LatticeAxis::new(y));
                let at = |px: i32, py: i32| self.lattice_with_seed(seed, [px, py, 0, 0]) as f64;
                lerp2(
                    at(ax.lo, ay.lo),
                    at(ax.lo, ay.hi),
                    at(ax.hi, ay.lo),
                    at(ax.hi, ay.hi),
                    ax.t,
                    ay.t,
                )
            }
            Interpolation::Trilinear => {
                let (ax, ay, az) = (LatticeAxis::new(x), LatticeAxis::new(y), LatticeAxis::new(z));
                let at = |px: i32, py: i32, pz: i32| {
                    self.lattice_with_seed(seed, [px, py, pz, 0]) as f64
                };
                let cube = Cube {
                    f000: at(ax.lo, ay.lo, az.lo),
                    f001: at(ax.lo, ay.lo, az.hi),
                    f010: at(ax.lo, ay.hi, az.lo),
                    f011: at(ax.lo, ay.hi, az.hi),
                    f100: at(ax.hi, ay.lo, az.lo),
                    f101: at(ax.hi, ay.lo, az.hi),
                    f110: at(ax.hi, ay.hi, az.lo),
                    f111: at(ax.hi, ay.hi, az.hi),
                };
                lerp3(&cube, ax.t, ay.t, az.t)
            }
        }
    }
}

impl Sampler for Noise {
    type Output = f64;

    #[inline]
    fn sample_at(&self, coord: Coord) -> f64 {
        let raw = self.raw(coord);
        let value = match &self.scale {
            Some(scale) => scale.apply(raw),
            None => raw,
        };
        if self.options.discrete() {
            value.floor()
        } else {
            value
        }
    }
}

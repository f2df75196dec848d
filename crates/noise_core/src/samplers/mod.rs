//! Distribution samplers built on [`Noise`].
//!
//! Every sampler is constructed from [`NoiseOptions`] and validates its
//! parameters up front; sampling is infallible. The options' `range` and
//! `discrete` fields are replaced by whatever the sampler needs, while the
//! seed, dimensionality, interpolation, octave and hash algorithm carry over.
//!
//! | sampler | output |
//! |---|---|
//! | [`Boolean`] | `bool`, 50/50 |
//! | [`Integers`] | `i64` uniform on an inclusive range |
//! | [`ListPick`] | uniform or weighted item of a list |
//! | [`NormalPair`], [`Normal`] | Gaussian pairs and scalars (Box–Muller) |
//! | [`Poisson`] | `u32` counts |
//! | [`UnitCircle`], [`UnitSphere`] | points on the unit circle / sphere |
//! | [`Disc`], [`Ball`] | points uniform in a disc / ball or shell |
//! | [`Dice`] | sum of dice rolls |
//! | [`VectorNoise`] | `[f64; N]` of independently ranged values |
//!
//! Composite samplers draw each component from its own *channel* of the
//! generator (see [`channel::channel_mask`]).

pub mod boolean;
pub mod channel;
pub mod dice;
pub mod geometry;
pub mod integer;
pub mod list;
pub mod normal;
pub mod poisson;
pub mod vector;

pub use boolean::Boolean;
pub use dice::Dice;
pub use geometry::{Ball, Disc, UnitCircle, UnitSphere};
pub use integer::Integers;
pub use list::ListPick;
pub use normal::{Normal, NormalPair};
pub use poisson::Poisson;
pub use vector::VectorNoise;

use crate::noise::Noise;
use crate::types::{NoiseError, NoiseOptions};

/// Generator producing raw hash values from `options`.
pub(crate) fn base_noise(options: NoiseOptions) -> Result<Noise, NoiseError> {
    Noise::new(options.without_range().with_discrete(false))
}

/// Reject a clamp whose bounds are unordered or not finite.
pub(crate) fn check_clamp(lo: f64, hi: f64) -> Result<(), NoiseError> {
    if !lo.is_finite() || !hi.is_finite() {
        return Err(NoiseError::InvalidRange { lo, hi });
    }
    if lo > hi {
        return Err(NoiseError::InvalidParameter {
            name: "clamp",
            reason: format!("lower bound {} exceeds upper bound {}", lo, hi),
        });
    }
    Ok(())
}

//! Range scaling of hash values.

use super::hash::{HASH_MIN, HASH_SPAN};
use crate::types::NoiseError;

/// Affine map from the hash domain `[-0x7fffffff, 0x7fffffff]` onto
/// `[lo, hi]`.
///
/// Hash values are taken as `f64` so interpolated samples can be scaled
/// with the same map. Inputs below `HASH_MIN` (only `i32::MIN`) are folded
/// onto `HASH_MIN`.
///
/// # Example
///
/// ```
/// use noise_core::math::scale::Scale;
///
/// let scale = Scale::new(0.0, 10.0).unwrap();
/// assert_eq!(scale.apply(-0x7fff_ffff as f64), 0.0);
/// assert_eq!(scale.apply(0x7fff_ffff as f64), 10.0);
/// assert_eq!(scale.apply(0.0), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    lo: f64,
    hi: f64,
}

impl Scale {
    /// Construct a scale onto `[lo, hi]`.
    ///
    /// `lo > hi` is allowed and produces a decreasing map.
    ///
    /// # Returns
    ///
    /// * `Err(NoiseError::InvalidRange)` - Either bound is not finite
    pub fn new(lo: f64, hi: f64) -> Result<Self, NoiseError> {
        if !lo.is_finite() || !hi.is_finite() {
            return Err(NoiseError::InvalidRange { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Lower bound of the target range.
    #[inline]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper bound of the target range.
    #[inline]
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Scale a (possibly interpolated) hash value.
    #[inline]
    pub fn apply(&self, hash: f64) -> f64 {
        unit_closed(hash) * (self.hi - self.lo) + self.lo
    }

    /// Scale and floor, for integer-valued ranges.
    ///
    /// Callers wanting the inclusive range `[a, b]` construct the scale with
    /// `hi = b + 1`.
    #[inline]
    pub fn apply_discrete(&self, hash: f64) -> f64 {
        self.apply(hash).floor()
    }
}

/// Hash value mapped onto `[0, 1]`.
#[inline]
pub fn unit_closed(hash: f64) -> f64 {
    (hash.max(HASH_MIN as f64) - HASH_MIN as f64) / HASH_SPAN
}

/// Hash value mapped onto `(0, 1]`.
///
/// The lowest hash maps to `1 / (2^32 - 1)` rather than 0, so the result is
/// safe to pass to `ln`.
#[inline]
pub fn unit_open_closed(hash: f64) -> f64 {
    (hash.max(HASH_MIN as f64) - HASH_MIN as f64 + 1.0) / (HASH_SPAN + 1.0)
}

/// Hash value mapped onto `[0, 1)`.
#[inline]
pub fn unit_closed_open(hash: f64) -> f64 {
    (hash.max(HASH_MIN as f64) - HASH_MIN as f64) / (HASH_SPAN + 1.0)
}

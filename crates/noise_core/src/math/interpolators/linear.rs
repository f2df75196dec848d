//! Linear interpolation and lattice decomposition.

use crate::math::fold::{to_lattice, to_lattice_ceil};
use num_traits::Float;

/// Linear interpolation between `f0` (at `t = 0`) and `f1` (at `t = 1`).
///
/// Returns `f0` exactly when `t == 0`, which keeps interpolated noise equal
/// to the raw samples at lattice points.
///
/// # Example
///
/// ```
/// use noise_core::math::interpolators::lerp1;
///
/// assert_eq!(lerp1(2.0, 4.0, 0.0), 2.0);
/// assert_eq!(lerp1(2.0, 4.0, 0.5), 3.0);
/// ```
#[inline]
pub fn lerp1<T: Float>(f0: T, f1: T, t: T) -> T {
    f0 + t * (f1 - f0)
}

/// One axis of the lattice cell containing a real coordinate.
///
/// `lo` and `hi` are the floor and ceiling of the coordinate (equal on
/// lattice points) and `t = x - floor(x)` lies in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeAxis {
    /// Floor of the coordinate
    pub lo: i32,
    /// Ceiling of the coordinate
    pub hi: i32,
    /// Fractional position within the cell
    pub t: f64,
}

impl LatticeAxis {
    /// Decompose a real coordinate.
    ///
    /// Non-finite coordinates collapse onto a lattice point with `t = 0`.
    #[inline]
    pub fn new(x: f64) -> Self {
        if !x.is_finite() {
            let p = to_lattice(x);
            return Self { lo: p, hi: p, t: 0.0 };
        }
        let floor = x.floor();
        Self {
            lo: to_lattice(x),
            hi: to_lattice_ceil(x),
            t: x - floor,
        }
    }
}

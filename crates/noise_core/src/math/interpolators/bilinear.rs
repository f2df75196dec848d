//! Bilinear interpolation over a unit square.

use num_traits::Float;

/// Bilinear interpolation of four corner samples.
///
/// # Formula
///
/// ```text
/// z = (1-u)(1-v)*f00 + (1-u)*v*f01 + u*(1-v)*f10 + u*v*f11
/// ```
///
/// where `f_ij` is the sample at `(x_i, y_j)` and `(u, v)` the fractional
/// position within the cell.
///
/// # Example
///
/// ```
/// use noise_core::math::interpolators::lerp2;
///
/// let z = lerp2(0.0, 1.0, 2.0, 3.0, 0.5, 0.5);
/// assert_eq!(z, 1.5);
/// ```
#[inline]
pub fn lerp2<T: Float>(f00: T, f01: T, f10: T, f11: T, u: T, v: T) -> T {
    let one = T::one();
    (one - u) * (one - v) * f00 + (one - u) * v * f01 + u * (one - v) * f10 + u * v * f11
}

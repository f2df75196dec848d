//! Trilinear interpolation over a unit cube.

use num_traits::Float;

/// The eight corner samples of a lattice cube.
///
/// `fxyz` is the sample at `(x_x, y_y, z_z)`, so `f100` lies one step along
/// the x axis from `f000`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube<T> {
    /// Corner (0, 0, 0)
    pub f000: T,
    /// Corner (0, 0, 1)
    pub f001: T,
    /// Corner (0, 1, 0)
    pub f010: T,
    /// Corner (0, 1, 1)
    pub f011: T,
    /// Corner (1, 0, 0)
    pub f100: T,
    /// Corner (1, 0, 1)
    pub f101: T,
    /// Corner (1, 1, 0)
    pub f110: T,
    /// Corner (1, 1, 1)
    pub f111: T,
}

/// Trilinear interpolation of a cube of samples at fractional position
/// `(u, v, w)`.
///
/// # Example
///
/// ```
/// use noise_core::math::interpolators::{lerp3, Cube};
///
/// let cube = Cube {
///     f000: 0.0, f001: 1.0, f010: 2.0, f011: 3.0,
///     f100: 4.0, f101: 5.0, f110: 6.0, f111: 7.0,
/// };
/// assert_eq!(lerp3(&cube, 0.0, 0.0, 0.0), 0.0);
/// assert!((lerp3::<f64>(&cube, 0.5, 0.5, 0.5) - 3.5).abs() < 1e-12);
/// ```
#[inline]
pub fn lerp3<T: Float>(cube: &Cube<T>, u: T, v: T, w: T) -> T {
    let one = T::one();
    let (iu, iv, iw) = (one - u, one - v, one - w);
    cube.f000 * iu * iv * iw
        + cube.f100 * u * iv * iw
        + cube.f010 * iu * v * iw
        + cube.f001 * iu * iv * w
        + cube.f101 * u * iv * w
        + cube.f011 * iu * v * w
        + cube.f110 * u * v * iw
        + cube.f111 * u * v * w
}

//! Uniform points on and inside circles and spheres.
//!
//! | sampler | channels | output |
//! |---|---|---|
//! | [`UnitCircle`] | angle (0) | `[f64; 2]` on the circle |
//! | [`UnitSphere`] | angle (0), height (1) | `[f64; 3]` on the sphere |
//! | [`Disc`] | angle (0), radius (1) | `[f64; 2]` in a disc or annulus |
//! | [`Ball`] | angle (0), height (1), radius (2) | `[f64; 3]` in a ball or shell |
//!
//! Radii are drawn uniformly in `r²` (discs) or `r³` (balls) so that points
//! are uniform by area or volume.

use std::f64::consts::TAU;

use super::base_noise;
use crate::noise::Noise;
use crate::traits::Sampler;
use crate::types::{Coord, NoiseError, NoiseOptions};

/// Reject radii that are negative, unordered or not finite.
fn check_radii(inner: f64, outer: f64) -> Result<(), NoiseError> {
    if !inner.is_finite() || !outer.is_finite() {
        return Err(NoiseError::InvalidRange { lo: inner, hi: outer });
    }
    if inner < 0.0 || inner > outer {
        return Err(NoiseError::InvalidParameter {
            name: "radius",
            reason: format!("need 0 <= inner <= outer, got [{}, {}]", inner, outer),
        });
    }
    Ok(())
}

/// Points on the unit circle.
///
/// The angle is uniform over `[0, 2π]` by default, or over any arc set with
/// [`UnitCircle::with_arc`].
///
/// # Examples
/// ```
/// use noise_core::samplers::UnitCircle;
/// use noise_core::{NoiseOptions, Sampler};
///
/// let circle = UnitCircle::new(NoiseOptions::default()).unwrap();
/// let [x, y] = circle.sample(0);
/// assert!((x.hypot(y) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct UnitCircle {
    angle: Noise,
}

impl UnitCircle {
    /// Points over the full circle.
    pub fn new(options: NoiseOptions) -> Result<Self, NoiseError> {
        Self::from_base(&base_noise(options)?, 0.0, TAU)
    }

    fn from_base(base: &Noise, lo: f64, hi: f64) -> Result<Self, NoiseError> {
        Ok(Self {
            angle: base.channel_with_range(0, lo, hi)?,
        })
    }

    /// Copy restricted to angles in `[lo, hi]` radians.
    ///
    /// # Returns
    ///
    /// * `Err(NoiseError::InvalidRange)` - non-finite bounds
    pub fn with_arc(&self, lo: f64, hi: f64) -> Result<Self, NoiseError> {
        Self::from_base(&self.angle, lo, hi)
    }
}

impl Sampler for UnitCircle {
    type Output = [f64; 2];

    #[inline]
    fn sample_at(&self, coord: Coord) -> [f64; 2] {
        let (sin, cos) = self.angle.sample_at(coord).sin_cos();
        [cos, sin]
    }
}

/// Points on the unit sphere.
///
/// Uses the cylinder projection: with `θ` uniform on `[0, 2π]` and `z`
/// uniform on `[-1, 1]`, `(sqrt(1 - z²) cos θ, sqrt(1 - z²) sin θ, z)` is
/// uniform on the sphere.
///
/// # Examples
/// ```
/// use noise_core::samplers::UnitSphere;
/// use noise_core::{NoiseOptions, Sampler};
///
/// let sphere = UnitSphere::new(NoiseOptions::default()).unwrap();
/// let [x, y, z] = sphere.sample(5);
/// assert!(((x * x + y * y + z * z).sqrt() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct UnitSphere {
    angle: Noise,
    height: Noise,
}

impl UnitSphere {
    /// Points over the whole sphere.
    pub fn new(options: NoiseOptions) -> Result<Self, NoiseError> {
        Self::from_base(&base_noise(options)?)
    }

    fn from_base(base: &Noise) -> Result<Self, NoiseError> {
        Ok(Self {
            angle: base.channel_with_range(0, 0.0, TAU)?,
            height: base.channel_with_range(1, -1.0, 1.0)?,
        })
    }
}

impl Sampler for UnitSphere {
    type Output = [f64; 3];

    #[inline]
    fn sample_at(&self, coord: Coord) -> [f64; 3] {
        let (sin, cos) = self.angle.sample_at(coord).sin_cos();
        let z = self.height.sample_at(coord);
        let r = (1.0 - z * z).max(0.0).sqrt();
        [r * cos, r * sin, z]
    }
}

/// Points uniform by area in a disc or annulus centred on the origin.
///
/// # Examples
/// ```
/// use noise_core::samplers::Disc;
/// use noise_core::{NoiseOptions, Sampler};
///
/// let ring = Disc::new(NoiseOptions::default()).unwrap().with_radii(2.0, 5.0).unwrap();
/// let [x, y] = ring.sample(3);
/// let d = x.hypot(y);
/// assert!(d >= 2.0 - 1e-9 && d <= 5.0 + 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Disc {
    circle: UnitCircle,
    base: Noise,
    radius: Noise,
    inner: f64,
    outer: f64,
}

impl Disc {
    /// Points in the unit disc.
    pub fn new(options: NoiseOptions) -> Result<Self, NoiseError> {
        let base = base_noise(options)?;
        Ok(Self {
            circle: UnitCircle::from_base(&base, 0.0, TAU)?,
            radius: base.channel_with_range(1, 0.0, 1.0)?,
            base,
            inner: 0.0,
            outer: 1.0,
        })
    }

    /// Copy sampling the annulus `inner <= r <= outer`.
    ///
    /// # Returns
    ///
    /// * `Err(NoiseError::InvalidRange)` - non-finite radii
    /// * `Err(NoiseError::InvalidParameter)` - negative or unordered radii
    pub fn with_radii(&self, inner: f64, outer: f64) -> Result<Self, NoiseError> {
        check_radii(inner, outer)?;
        Ok(Self {
            circle: self.circle.clone(),
            radius: self.base.channel_with_range(1, inner * inner, outer * outer)?,
            base: self.base.clone(),
            inner,
            outer,
        })
    }

    /// Inner and outer radius.
    pub fn radii(&self) -> (f64, f64) {
        (self.inner, self.outer)
    }
}

impl Sampler for Disc {
    type Output = [f64; 2];

    #[inline]
    fn sample_at(&self, coord: Coord) -> [f64; 2] {
        let [x, y] = self.circle.sample_at(coord);
        let r = self.radius.sample_at(coord).max(0.0).sqrt();
        [x * r, y * r]
    }
}

/// Points uniform by volume in a ball or spherical shell centred on the
/// origin.
///
/// # Examples
/// ```
/// use noise_core::samplers::Ball;
/// use noise_core::{NoiseOptions, Sampler};
///
/// let shell = Ball::new(NoiseOptions::default()).unwrap().with_radii(10.0, 20.0).unwrap();
/// let [x, y, z] = shell.sample(8);
/// let d = (x * x + y * y + z * z).sqrt();
/// assert!(d >= 10.0 - 1e-9 && d <= 20.0 + 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Ball {
    sphere: UnitSphere,
    base: Noise,
    radius: Noise,
    inner: f64,
    outer: f64,
}

impl Ball {
    /// Points in the unit ball.
    pub fn new(options: NoiseOptions) -> Result<Self, NoiseError> {
        let base = base_noise(options)?;
        Ok(Self {
            sphere: UnitSphere::from_base(&base)?,
            radius: base.channel_with_range(2, 0.0, 1.0)?,
            base,
            inner: 0.0,
            outer: 1.0,
        })
    }

    /// Copy sampling the shell `inner <= r <= outer`.
    ///
    /// # Returns
    ///
    /// * `Err(NoiseError::InvalidRange)` - non-finite radii
    /// * `Err(NoiseError::InvalidParameter)` - negative or unordered radii
    pub fn with_radii(&self, inner: f64, outer: f64) -> Result<Self, NoiseError> {
        check_radii(inner, outer)?;
        Ok(Self {
            sphere: self.sphere.clone(),
            radius: self.base.channel_with_range(2, inner.powi(3), outer.powi(3))?,
            base: self.base.clone(),
            inner,
            outer,
        })
    }

    /// Inner and outer radius.
    pub fn radii(&self) -> (f64, f64) {
        (self.inner, self.outer)
    }
}

impl Sampler for Ball {
    type Output = [f64; 3];

    #[inline]
    fn sample_at(&self, coord: Coord) -> [f64; 3] {
        let [x, y, z] = self.sphere.sample_at(coord);
        let r = self.radius.sample_at(coord).max(0.0).cbrt();
        [x * r, y * r, z * r]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(point: &[f64]) -> f64 {
        point.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    #[test]
    fn test_circle_points_have_unit_length() {
        let circle = UnitCircle::new(NoiseOptions::default().with_seed(2)).unwrap();
        for p in circle.sequence().take(1_000) {
            assert!((norm(&p) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_circle_centroid_near_origin() {
        let circle = UnitCircle::new(NoiseOptions::default()).unwrap();
        let n = 100_000;
        let (sx, sy) = circle
            .stream()
            .take(n)
            .fold((0.0, 0.0), |(sx, sy), [x, y]| (sx + x, sy + y));
        assert!((sx / n as f64).abs() < 0.01 && (sy / n as f64).abs() < 0.01);
    }

    #[test]
    fn test_circle_arc() {
        let arc = UnitCircle::new(NoiseOptions::default())
            .unwrap()
            .with_arc(0.0, std::f64::consts::FRAC_PI_2)
            .unwrap();
        for [x, y] in arc.sequence().take(1_000) {
            assert!(x >= -1e-12 && y >= -1e-12);
        }
    }

    #[test]
    fn test_sphere_octants_balanced() {
        let sphere = UnitSphere::new(NoiseOptions::default()).unwrap();
        let n = 100_000;
        let mut octants = [0usize; 8];
        for [x, y, z] in sphere.sequence().take(n) {
            let index = (x > 0.0) as usize | ((y > 0.0) as usize) << 1 | ((z > 0.0) as usize) << 2;
            octants[index] += 1;
        }
        let expected = n as f64 / 8.0;
        for &count in &octants {
            assert!((count as f64 - expected).abs() / expected < 0.05, "{:?}", octants);
        }
    }

    #[test]
    fn test_disc_uniform_by_area() {
        let disc = Disc::new(NoiseOptions::default()).unwrap();
        let n = 100_000;
        let mut bins = [0usize; 10];
        for p in disc.sequence().take(n) {
            let r2 = p[0] * p[0] + p[1] * p[1];
            bins[((r2 * 10.0) as usize).min(9)] += 1;
        }
        for &count in &bins {
            assert!((count as f64 - 10_000.0).abs() < 1_000.0, "{:?}", bins);
        }
    }

    #[test]
    fn test_annulus_bounds() {
        let ring = Disc::new(NoiseOptions::default()).unwrap().with_radii(2.0, 5.0).unwrap();
        assert_eq!(ring.radii(), (2.0, 5.0));
        for p in ring.sequence().take(10_000) {
            let d = norm(&p);
            assert!(d >= 2.0 - 1e-9 && d <= 5.0 + 1e-9);
        }
    }

    #[test]
    fn test_ball_radius_bounds() {
        let ball = Ball::new(NoiseOptions::default()).unwrap();
        for p in ball.sequence().take(10_000) {
            assert!(norm(&p) <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn test_invalid_radii() {
        let disc = Disc::new(NoiseOptions::default()).unwrap();
        assert!(disc.with_radii(-1.0, 1.0).is_err());
        assert!(disc.with_radii(3.0, 2.0).is_err());
        let ball = Ball::new(NoiseOptions::default()).unwrap();
        assert!(matches!(
            ball.with_radii(0.0, f64::INFINITY),
            Err(NoiseError::InvalidRange { .. })
        ));
    }
}

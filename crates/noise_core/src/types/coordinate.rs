//! Noise coordinates.

use serde::{Deserialize, Serialize};

use super::NoiseError;

/// Dimensionality of a generator.
///
/// Serialised as the integer 1, 2, 3 or 4.
///
/// # Examples
/// ```
/// use noise_core::Dimensions;
///
/// assert_eq!(Dimensions::try_from(3u8).unwrap(), Dimensions::Three);
/// assert_eq!(Dimensions::Two.count(), 2);
/// assert!(Dimensions::try_from(5u8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Dimensions {
    /// One axis (default)
    #[default]
    One,
    /// Two axes
    Two,
    /// Three axes
    Three,
    /// Four axes
    Four,
}

impl Dimensions {
    /// Number of axes.
    #[inline]
    pub fn count(self) -> usize {
        match self {
            Dimensions::One => 1,
            Dimensions::Two => 2,
            Dimensions::Three => 3,
            Dimensions::Four => 4,
        }
    }
}

impl TryFrom<u8> for Dimensions {
    type Error = NoiseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Dimensions::One),
            2 => Ok(Dimensions::Two),
            3 => Ok(Dimensions::Three),
            4 => Ok(Dimensions::Four),
            other => Err(NoiseError::InvalidDimensions(other)),
        }
    }
}

impl From<Dimensions> for u8 {
    fn from(dimensions: Dimensions) -> Self {
        dimensions.count() as u8
    }
}

/// A coordinate of up to four axes; missing axes are 0.
///
/// Built from `()`, scalars, tuples, arrays and slices. Elements beyond the
/// fourth are ignored.
///
/// # Examples
/// ```
/// use noise_core::Coord;
///
/// assert_eq!(Coord::from(()), Coord::ORIGIN);
/// assert_eq!(Coord::from(2.5).axes(), [2.5, 0.0, 0.0, 0.0]);
/// assert_eq!(Coord::from((1, 2)).axes(), [1.0, 2.0, 0.0, 0.0]);
/// assert_eq!(Coord::from([1.0, 2.0, 3.0]), Coord::new(1.0, 2.0, 3.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coord([f64; 4]);

impl Coord {
    /// The origin.
    pub const ORIGIN: Coord = Coord([0.0; 4]);

    /// A coordinate from all four axes.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Coord([x, y, z, w])
    }

    /// All four axes.
    #[inline]
    pub fn axes(&self) -> [f64; 4] {
        self.0
    }

    /// First axis.
    #[inline]
    pub fn x(&self) -> f64 {
        self.0[0]
    }
}

impl From<()> for Coord {
    fn from(_: ()) -> Self {
        Coord::ORIGIN
    }
}

impl From<f64> for Coord {
    fn from(x: f64) -> Self {
        Coord([x, 0.0, 0.0, 0.0])
    }
}

impl From<i32> for Coord {
    fn from(x: i32) -> Self {
        Coord([x as f64, 0.0, 0.0, 0.0])
    }
}

impl From<i64> for Coord {
    fn from(x: i64) -> Self {
        Coord([x as f64, 0.0, 0.0, 0.0])
    }
}

impl From<&[f64]> for Coord {
    fn from(xs: &[f64]) -> Self {
        let mut axes = [0.0; 4];
        for (axis, &value) in axes.iter_mut().zip(xs) {
            *axis = value;
        }
        Coord(axes)
    }
}

impl<const N: usize> From<[f64; N]> for Coord {
    fn from(xs: [f64; N]) -> Self {
        Coord::from(&xs[..])
    }
}

impl<const N: usize> From<[i32; N]> for Coord {
    fn from(xs: [i32; N]) -> Self {
        let mut axes = [0.0; 4];
        for (axis, &value) in axes.iter_mut().zip(xs.iter()) {
            *axis = value as f64;
        }
        Coord(axes)
    }
}

macro_rules! impl_coord_from_tuple {
    ($($ty:ident => $var:ident),+) => {
        impl<$($ty),+> From<($($ty,)+)> for Coord
        where
            $($ty: Into<f64>),+
        {
            fn from(($($var,)+): ($($ty,)+)) -> Self {
                Coord::from([$($var.into()),+])
            }
        }
    };
}

impl_coord_from_tuple!(A => a);
impl_coord_from_tuple!(A => a, B => b);
impl_coord_from_tuple!(A => a, B => b, C => c);
impl_coord_from_tuple!(A => a, B => b, C => c, D => d);

//! Multilinear interpolation between lattice samples.
//!
//! Smooth noise is produced by hashing the integer lattice points that
//! surround a real coordinate and blending the corner samples by the
//! coordinate's fractional part.
//!
//! ## Available Interpolators
//!
//! - [`lerp1`]: linear interpolation between two samples
//! - [`lerp2`]: bilinear interpolation over the four corners of a square
//! - [`lerp3`]: trilinear interpolation over the eight corners of a cube
//! - [`LatticeAxis`]: floor / ceil / fraction decomposition of one axis
//!
//! Four-dimensional interpolation is not provided; generators requesting it
//! are rejected at construction.
//!
//! ## Generic Kernels
//!
//! The kernels are generic over `T: num_traits::Float`, so they work for
//! `f32` as well as the `f64` used by the noise pipeline.
//!
//! ## Example
//!
//! ```
//! use noise_core::math::interpolators::{lerp1, LatticeAxis};
//!
//! let axis = LatticeAxis::new(2.25);
//! assert_eq!((axis.lo, axis.hi), (2, 3));
//! assert_eq!(lerp1(10.0, 20.0, axis.t), 12.5);
//! ```

mod bilinear;
mod linear;
mod trilinear;

pub use bilinear::lerp2;
pub use linear::{lerp1, LatticeAxis};
pub use trilinear::{lerp3, Cube};

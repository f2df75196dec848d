//! Numerical building blocks of the noise pipeline.
//!
//! - [`hash`]: bit-mixing hash functions `(seed, position) -> i32`
//! - [`fold`]: multi-dimensional coordinate folding and octave coarsening
//! - [`scale`]: affine mapping of the hash domain onto caller ranges
//! - [`interpolators`]: lerp / bilerp / trilerp between lattice samples

pub mod fold;
pub mod hash;
pub mod interpolators;
pub mod scale;

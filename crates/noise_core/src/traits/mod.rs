//! Core traits for coordinate-addressable sampling.
//!
//! This module defines:
//! - Sampling at a coordinate (`Sampler` trait)
//! - Lazy evaluation over consecutive coordinates (`Sequence`)
//! - Generic output transforms (`Mapped`)
//!
//! Tuples of up to four samplers are samplers themselves, returning the
//! tuple of their outputs.

pub mod sampler;

pub use sampler::{Mapped, Sampler, Sequence};

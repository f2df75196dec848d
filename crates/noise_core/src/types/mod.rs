//! Core types: seeds, coordinates, options and errors.

pub mod coordinate;
pub mod error;
pub mod options;
pub mod seed;

pub use coordinate::{Coord, Dimensions};
pub use error::NoiseError;
pub use options::NoiseOptions;
pub use seed::{Seed, SeedCell, SeedObserver, SeedSequence};

pub use crate::math::hash::HashAlgorithm;

//! Error types for structured error handling.
//!
//! Every fallible operation in the library returns [`NoiseError`]. Errors are
//! raised when a generator or sampler is constructed; sampling itself is
//! infallible.

use thiserror::Error;

/// Categorised noise configuration errors.
///
/// # Variants
/// - `UnsupportedInterpolation`: interpolation requested for 4 dimensions
/// - `InvalidDimensions`: dimensionality outside 1..=4
/// - `InvalidRange`: non-finite range or radius bounds
/// - `InvalidLambda`: Poisson rate outside (0, 30]
/// - `EmptyList`: list sampler without items
/// - `InvalidWeight`: negative or non-finite weight, or zero total weight
/// - `InvalidDice`: empty dice set or a die with no sides
/// - `InvalidParameter`: any other out-of-domain parameter
///
/// # Examples
/// ```
/// use noise_core::NoiseError;
///
/// let err = NoiseError::InvalidLambda(50.0);
/// assert_eq!(format!("{}", err), "Poisson lambda 50 outside supported range (0, 30]");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseError {
    /// Interpolation is only implemented for 1 to 3 dimensions.
    #[error("Interpolation is not supported for {0} dimensions")]
    UnsupportedInterpolation(u8),

    /// Dimensionality outside the supported range.
    #[error("Invalid dimensions {0}: must be 1, 2, 3 or 4")]
    InvalidDimensions(u8),

    /// Range bounds must be finite.
    #[error("Invalid range [{lo}, {hi}]: bounds must be finite")]
    InvalidRange {
        /// Lower bound
        lo: f64,
        /// Upper bound
        hi: f64,
    },

    /// Poisson sampling is restricted to rates in (0, 30].
    #[error("Poisson lambda {0} outside supported range (0, 30]")]
    InvalidLambda(f64),

    /// A list sampler needs at least one item.
    #[error("List sampler requires at least one item")]
    EmptyList,

    /// Weights must be finite and non-negative.
    #[error("Invalid weight at index {index}: {reason}")]
    InvalidWeight {
        /// Index of the offending weight
        index: usize,
        /// Description of the problem
        reason: String,
    },

    /// Dice sets need at least one die, each with at least one side.
    #[error("Invalid dice: {0}")]
    InvalidDice(String),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the invalid value
        reason: String,
    },
}

//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from grid and axis construction
//! - `OpticsError`: Errors from closed-form optics formulas

use thiserror::Error;

/// Interpolation-related errors.
///
/// Raised while building an [`Axis`](crate::math::interpolators::Axis) or a
/// [`BilinearGrid`](crate::math::interpolators::BilinearGrid). Evaluation
/// itself never fails: out-of-range queries are handled by the boundary mode.
///
/// # Variants
/// - `InsufficientData`: Not enough samples or values
/// - `NonMonotonicAxis`: Axis samples are not strictly increasing
/// - `InvalidInput`: General invalid input error
///
/// # Examples
/// ```
/// use photonics_core::types::InterpolationError;
///
/// let err = InterpolationError::NonMonotonicAxis { index: 3 };
/// assert!(format!("{}", err).contains("index 3"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Axis samples are not strictly increasing.
    #[error("Axis is not strictly increasing at index {index}")]
    NonMonotonicAxis {
        /// Index of the first offending sample
        index: usize,
    },

    /// General invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Errors from the closed-form optics helpers.
///
/// # Examples
/// ```
/// use photonics_core::types::OpticsError;
///
/// let err = OpticsError::InvalidParameter { name: "radius", value: -1.0 };
/// assert_eq!(format!("{}", err), "Invalid parameter: radius = -1 (must be positive)");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OpticsError {
    /// A physical quantity that must be positive was not.
    #[error("Invalid parameter: {name} = {value} (must be positive)")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },
}

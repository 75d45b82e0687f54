//! Error types for table loading and lookups.

use photonics_core::types::{InterpolationError, OpticsError};
use thiserror::Error;

/// Errors from the effective-index tables.
///
/// The type is `Clone` so the global store can cache a load failure and
/// hand the same error to every caller.
///
/// # Examples
///
/// ```
/// use photonics_neff::NeffError;
///
/// let err = NeffError::ShapeMismatch { widths: 3, wavelengths: 2 };
/// assert!(err.to_string().contains("3 widths"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NeffError {
    /// Table file absent or malformed.
    #[error("Malformed table file {file}: {reason}")]
    FileFormat {
        /// File name or path
        file: String,
        /// What was wrong
        reason: String,
    },

    /// Batched query slices of different lengths.
    #[error("Batch shape mismatch: {widths} widths vs {wavelengths} wavelengths")]
    ShapeMismatch {
        /// Number of widths supplied
        widths: usize,
        /// Number of wavelengths supplied
        wavelengths: usize,
    },

    /// Unrecognised table name.
    #[error("Unknown table: {0}. Expected one of: combined, te0, tm0, te1, tm1, te2")]
    UnknownTable(String),

    /// Axis or grid construction failed.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Closed-form optics helper rejected its input.
    #[error("Optics error: {0}")]
    Optics(#[from] OpticsError),
}

impl NeffError {
    pub(crate) fn file_format(file: impl Into<String>, reason: impl Into<String>) -> Self {
        NeffError::FileFormat {
            file: file.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_format_display() {
        let err = NeffError::file_format("neff.csv", "row 3 is ragged");
        assert_eq!(
            err.to_string(),
            "Malformed table file neff.csv: row 3 is ragged"
        );
    }

    #[test]
    fn test_from_interpolation_error() {
        let err: NeffError = InterpolationError::NonMonotonicAxis { index: 2 }.into();
        assert!(matches!(err, NeffError::Interpolation(_)));
    }

    #[test]
    fn test_unknown_table_display() {
        let err = NeffError::UnknownTable("te9".to_string());
        assert!(err.to_string().starts_with("Unknown table: te9"));
    }
}

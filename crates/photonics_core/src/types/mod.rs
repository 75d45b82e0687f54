//! Core numeric and error types.
//!
//! This module provides:
//! - `dual`: the [`Scalar`] trait shared by `f64` and num-dual's dual numbers
//! - `error`: Structured error types for interpolation and optics operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Scalar`], [`DualNumber`] from `dual`
//! - [`InterpolationError`], [`OpticsError`] from `error`

pub mod dual;
pub mod error;

pub use dual::{DualNumber, Scalar};
pub use error::{InterpolationError, OpticsError};

//! Numerical building blocks.
//!
//! - [`interpolators`]: axis mapping and order-1 grid interpolation
//! - [`derivative`](mod@derivative): central finite-difference derivatives

pub mod derivative;
pub mod interpolators;

pub use derivative::{derivative, derivative_with_step};

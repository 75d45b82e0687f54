//! # photonics_core: Numerical Foundation for Silicon Photonics Lookups
//!
//! ## Layer 1 (Foundation) Role
//!
//! photonics_core is the bottom layer of the workspace, providing:
//! - The order-1 grid interpolation kernel (`math::interpolators`)
//! - Affine coordinate mapping from physical values to grid indices (`math::interpolators::Axis`)
//! - A dual-number compatible scalar trait (`types::dual`)
//! - Central finite-difference derivatives (`math::derivative`)
//! - Closed-form optics formulas: Sellmeier permittivity, group index, ring FSR (`physics`)
//! - Error types: `InterpolationError`, `OpticsError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other photonics_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - num-dual: Dual number types and forward-mode automatic differentiation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use photonics_core::math::interpolators::{Axis, BilinearGrid, BoundaryMode};
//!
//! let rows = Axis::new(vec![0.0, 1.0]).unwrap();
//! let cols = Axis::new(vec![10.0, 20.0]).unwrap();
//! let grid = BilinearGrid::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//!
//! let r = rows.fractional_index(0.5_f64);
//! let c = cols.fractional_index(15.0_f64);
//! let z = grid.map_coordinates(r, c, BoundaryMode::Clamp);
//! assert!((z - 2.5).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod physics;
pub mod types;

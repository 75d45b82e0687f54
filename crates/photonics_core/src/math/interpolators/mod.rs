//! Grid interpolation for precomputed simulation tables.
//!
//! ## Components
//!
//! - [`Axis`]: sampled coordinate vector with the affine map from a physical
//!   value to a fractional grid index
//! - [`BilinearGrid`]: row-major 2D grid evaluated with order-1 interpolation
//!   at fractional coordinates
//! - [`BoundaryMode`]: how corners outside the grid are filled
//!
//! ## AD Compatibility
//!
//! Evaluation is generic over [`Scalar`](crate::types::Scalar), enabling use with:
//! - `f64`: Standard lookups
//! - `Dual64`: Forward-mode derivatives via num-dual
//!
//! ## Example
//!
//! ```
//! use photonics_core::math::interpolators::{Axis, BilinearGrid, BoundaryMode};
//!
//! let xs = Axis::new(vec![0.0, 1.0, 2.0]).unwrap();
//! let ys = Axis::new(vec![0.0, 1.0]).unwrap();
//! // z = x + 10 y
//! let grid = BilinearGrid::from_rows(&[
//!     vec![0.0, 10.0],
//!     vec![1.0, 11.0],
//!     vec![2.0, 12.0],
//! ])
//! .unwrap();
//!
//! let z = grid.map_coordinates(
//!     xs.fractional_index(1.5_f64),
//!     ys.fractional_index(0.5_f64),
//!     BoundaryMode::Clamp,
//! );
//! assert!((z - 6.5).abs() < 1e-12);
//! ```

mod axis;
mod bilinear;


pub use axis::Axis;
pub use bilinear::{BilinearGrid, BoundaryMode};

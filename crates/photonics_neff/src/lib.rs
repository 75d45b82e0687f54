//! # photonics_neff: Effective-Index Tables for SOI Strip Waveguides
//!
//! ## Layer 2 (Tables) Role
//!
//! photonics_neff sits on top of photonics_core and provides:
//! - Six precomputed effective-index tables for a 220 nm silicon strip in
//!   silicon dioxide, embedded at compile time (`table`)
//! - Bilinear lookups by waveguide width and wavelength (`lookup`)
//! - Forward-mode gradients of those lookups (`gradient`)
//! - Group index and ring free spectral range from the tables (`dispersion`)
//!
//! ## Tables
//!
//! | Table | Function | Notes |
//! |---|---|---|
//! | combined | [`neff`] | fundamental mode, also used by [`grad_neff`] |
//! | TE0 | [`neff_te0`] | |
//! | TM0 | [`neff_tm0`] | evaluated on TE0's axes |
//! | TE1 | [`neff_te1`] | evaluated on TE0's axes |
//! | TM1 | [`neff_tm1`] | evaluated on TE0's axes |
//! | TE2 | [`neff_te2`] | evaluated on TE0's axes |
//!
//! Width and wavelength are in microns. The packaged grid covers width
//! 0.24 - 0.7 µm and wavelength 1.2 - 1.7 µm. Queries outside the grid are
//! answered with the nearest edge value, not rejected. For the zero fill of
//! `ndimage.map_coordinates`' default constant mode, build the store with
//! `with_boundary(BoundaryMode::Constant(0.0))` (see [`NeffTables::with_boundary`]).
//!
//! ## Usage Examples
//!
//! ```rust
//! use photonics_neff::{grad_neff, neff, neff_te1};
//!
//! let n = neff(0.5, 1.55).unwrap();
//! let g = grad_neff(0.5, 1.55, 1).unwrap();
//! assert!(n > neff_te1(0.5, 1.55).unwrap());
//! assert!(g.d_width > 0.0);
//! ```
//!
//! ## Shared State
//!
//! The tables are parsed once, on the first lookup, into a process-wide
//! read-only store ([`NeffTables::global`]). Build a separate store with
//! [`NeffTables::load_from_dir`] to use tables from disk.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod error;

pub mod dispersion;
pub mod gradient;
pub mod lookup;
pub mod table;

pub use dispersion::{group_index, ring_fsr};
pub use error::NeffError;
pub use gradient::{grad_neff, NeffGradient};
pub use lookup::{lookup, neff, neff_batch, neff_te0, neff_te1, neff_te2, neff_tm0, neff_tm1};
pub use table::{EffectiveIndexTable, GridLayout, NeffTables, TableId};

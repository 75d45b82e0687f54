//! Closed-form optics formulas.
//!
//! - [`permittivity`]: Sellmeier dispersion of silicon and silicon dioxide
//! - [`dispersion`]: group index and ring resonator free spectral range
//!
//! All lengths are in microns.

pub mod dispersion;
pub mod permittivity;

pub use dispersion::{fsr, group_index_from_slope, ring_circumference};
pub use permittivity::{perm_oxide, perm_si, Sellmeier};

//! Derivatives of the effective index with respect to width and wavelength.
//!
//! Forward-mode automatic differentiation: each partial derivative is one
//! lookup with a [`DualNumber`] seeded on that coordinate. The result is the
//! exact derivative of the bilinear formula on the enclosing cell, so it is
//! constant along each axis inside a cell and jumps at cell boundaries
//! (where the cell on the upper side is used).

use crate::table::{NeffTables, TableId};
use crate::NeffError;
use photonics_core::types::DualNumber;
use tracing::trace;

/// Partial derivatives of the effective index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeffGradient {
    /// ∂neff/∂width, per micron.
    pub d_width: f64,
    /// ∂neff/∂wavelength, per micron.
    pub d_wavelength: f64,
}

impl NeffGradient {
    /// `(d_width, d_wavelength)`.
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.d_width, self.d_wavelength)
    }
}

impl NeffTables {
    /// Gradient of `table` at `(width, wavelength)`.
    pub fn gradient(&self, table: TableId, width: f64, wavelength: f64) -> NeffGradient {
        let d_width = self
            .evaluate(table, DualNumber::new(width, 1.0), DualNumber::from(wavelength))
            .eps;
        let d_wavelength = self
            .evaluate(table, DualNumber::from(width), DualNumber::new(wavelength, 1.0))
            .eps;
        NeffGradient {
            d_width,
            d_wavelength,
        }
    }
}

/// Gradient of the combined effective index at `(width, wavelength)`.
///
/// `mode` (documented as 1 - 5) is accepted but **does not select a table**:
/// the combined table is differentiated for every value. Use
/// [`NeffTables::gradient`] to differentiate a specific mode table.
///
/// # Examples
///
/// ```
/// use photonics_neff::grad_neff;
///
/// let g = grad_neff(0.5, 1.55, 1).unwrap();
/// assert!(g.d_width > 0.0);
/// assert!(g.d_wavelength < 0.0);
/// assert_eq!(g, grad_neff(0.5, 1.55, 3).unwrap());
/// ```
pub fn grad_neff(width: f64, wavelength: f64, mode: u8) -> Result<NeffGradient, NeffError> {
    trace!(mode, "mode does not select a table; differentiating the combined table");
    Ok(NeffTables::global()?.gradient(TableId::Combined, width, wavelength))
}

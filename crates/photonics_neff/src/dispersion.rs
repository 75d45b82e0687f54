//! Group index and ring free spectral range from the tables.
//!
//! The wavelength slope comes from the dual-number gradient, so within a
//! cell it is the exact slope of the interpolant.

use crate::table::{NeffTables, TableId};
use crate::NeffError;
use photonics_core::physics::{fsr, group_index_from_slope, ring_circumference};

impl NeffTables {
    /// Group index of `table` at `(width, wavelength)`.
    pub fn group_index(&self, table: TableId, width: f64, wavelength: f64) -> f64 {
        let n = self.lookup(table, width, wavelength);
        let slope = self.gradient(table, width, wavelength).d_wavelength;
        group_index_from_slope(n, wavelength, slope)
    }

    /// Free spectral range, in microns, of a ring of `radius` microns.
    ///
    /// # Returns
    ///
    /// * `Err(NeffError::Optics)` - Non-positive radius, wavelength, or group index
    pub fn ring_fsr(
        &self,
        table: TableId,
        width: f64,
        wavelength: f64,
        radius: f64,
    ) -> Result<f64, NeffError> {
        let ng = self.group_index(table, width, wavelength);
        Ok(fsr(ng, wavelength, ring_circumference(radius))?)
    }
}

/// Group index of the combined table.
///
/// # Examples
///
/// ```
/// use photonics_neff::{group_index, neff};
///
/// let ng = group_index(0.5, 1.55).unwrap();
/// assert!(ng > neff(0.5, 1.55).unwrap());
/// ```
pub fn group_index(width: f64, wavelength: f64) -> Result<f64, NeffError> {
    Ok(NeffTables::global()?.group_index(TableId::Combined, width, wavelength))
}

/// Ring free spectral range in microns, using the combined table.
pub fn ring_fsr(width: f64, wavelength: f64, radius: f64) -> Result<f64, NeffError> {
    NeffTables::global()?.ring_fsr(TableId::Combined, width, wavelength, radius)
}

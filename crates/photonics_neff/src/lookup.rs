//! Effective-index lookups.
//!
//! Six entry points, one per packaged table, each taking width then
//! wavelength in microns:
//!
//! | Function | Table |
//! |---|---|
//! | [`neff`] | combined (fundamental) |
//! | [`neff_te0`] | TE0 |
//! | [`neff_tm0`] | TM0 |
//! | [`neff_te1`] | TE1 |
//! | [`neff_tm1`] | TM1 |
//! | [`neff_te2`] | TE2 |
//!
//! Documented valid ranges are width 0.24 - 0.7 µm and wavelength
//! 1.2 - 1.7 µm. Queries outside them are **not rejected**: with the
//! default boundary mode they return the nearest edge value of the table.

use crate::table::{NeffTables, TableId};
use crate::NeffError;
use photonics_core::types::Scalar;

impl NeffTables {
    /// Effective index from `table` at `(width, wavelength)`.
    #[inline]
    pub fn lookup(&self, table: TableId, width: f64, wavelength: f64) -> f64 {
        self.evaluate(table, width, wavelength)
    }

    /// Generic lookup; pass dual numbers to differentiate.
    #[inline]
    pub fn evaluate<T: Scalar>(&self, table: TableId, width: T, wavelength: T) -> T {
        self.table(table).evaluate(width, wavelength, self.boundary())
    }

    /// Batched lookup, one result per `(width, wavelength)` pair.
    ///
    /// A one-element slice is repeated against the other slice, so a single
    /// width can be swept over many wavelengths and vice versa.
    ///
    /// # Returns
    ///
    /// * `Err(NeffError::ShapeMismatch)` - Lengths differ and neither is 1
    pub fn lookup_batch(
        &self,
        table: TableId,
        widths: &[f64],
        wavelengths: &[f64],
    ) -> Result<Vec<f64>, NeffError> {
        let table = self.table(table);
        let boundary = self.boundary();
        let eval = |w: f64, l: f64| table.evaluate(w, l, boundary);
        match (widths, wavelengths) {
            (w, l) if w.len() == l.len() => {
                Ok(w.iter().zip(l).map(|(&w, &l)| eval(w, l)).collect())
            }
            ([w], l) => Ok(l.iter().map(|&l| eval(*w, l)).collect()),
            (w, [l]) => Ok(w.iter().map(|&w| eval(w, *l)).collect()),
            (w, l) => Err(NeffError::ShapeMismatch {
                widths: w.len(),
                wavelengths: l.len(),
            }),
        }
    }
}

/// Effective index of the combined (fundamental) table.
///
/// # Examples
///
/// ```
/// let n = photonics_neff::neff(0.5, 1.55).unwrap();
/// assert!(n > 2.3 && n < 2.6);
/// ```
pub fn neff(width: f64, wavelength: f64) -> Result<f64, NeffError> {
    lookup(TableId::Combined, width, wavelength)
}

/// Effective index of the TE0 mode.
pub fn neff_te0(width: f64, wavelength: f64) -> Result<f64, NeffError> {
    lookup(TableId::Te0, width, wavelength)
}

/// Effective index of the TM0 mode.
pub fn neff_tm0(width: f64, wavelength: f64) -> Result<f64, NeffError> {
    lookup(TableId::Tm0, width, wavelength)
}

/// Effective index of the TE1 mode.
///
/// Below cutoff the table holds the oxide cladding index.
pub fn neff_te1(width: f64, wavelength: f64) -> Result<f64, NeffError> {
    lookup(TableId::Te1, width, wavelength)
}

/// Effective index of the TM1 mode.
///
/// Below cutoff the table holds the oxide cladding index.
pub fn neff_tm1(width: f64, wavelength: f64) -> Result<f64, NeffError> {
    lookup(TableId::Tm1, width, wavelength)
}

/// Effective index of the TE2 mode.
///
/// Below cutoff the table holds the oxide cladding index.
pub fn neff_te2(width: f64, wavelength: f64) -> Result<f64, NeffError> {
    lookup(TableId::Te2, width, wavelength)
}

/// Lookup on any table of the shared store.
pub fn lookup(table: TableId, width: f64, wavelength: f64) -> Result<f64, NeffError> {
    Ok(NeffTables::global()?.lookup(table, width, wavelength))
}

/// Batched lookup on the shared store; one result per `(width, wavelength)`
/// pair, with a one-element slice repeated against the other.
///
/// # Examples
///
/// ```
/// use photonics_neff::{neff, neff_batch, TableId};
///
/// let out = neff_batch(TableId::Combined, &[0.4, 0.5], &[1.31, 1.55]).unwrap();
/// assert_eq!(out[1], neff(0.5, 1.55).unwrap());
/// ```
pub fn neff_batch(
    table: TableId,
    widths: &[f64],
    wavelengths: &[f64],
) -> Result<Vec<f64>, NeffError> {
    NeffTables::global()?.lookup_batch(table, widths, wavelengths)
}

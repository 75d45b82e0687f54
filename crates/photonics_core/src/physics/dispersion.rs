//! Group index and ring resonator free spectral range.

use crate::types::OpticsError;
use std::f64::consts::PI;

/// Group index from the effective index and its wavelength slope.
///
/// ```text
/// n_g = n_eff - λ · ∂n_eff/∂λ
/// ```
///
/// # Examples
///
/// ```
/// use photonics_core::physics::group_index_from_slope;
///
/// // Typical 500 nm strip waveguide at 1.55 µm
/// let ng = group_index_from_slope(2.44, 1.55, -1.1);
/// assert!((ng - 4.145).abs() < 1e-12);
/// ```
#[inline]
pub fn group_index_from_slope(neff: f64, wavelength: f64, dneff_dwavelength: f64) -> f64 {
    neff - wavelength * dneff_dwavelength
}

/// Free spectral range of a resonator, in the units of `wavelength`.
///
/// ```text
/// FSR = λ² / (n_g · L)
/// ```
///
/// # Arguments
///
/// * `group_index` - Group index of the guided mode
/// * `wavelength` - Wavelength in microns
/// * `round_trip_length` - Optical path length of one round trip in microns
///
/// # Returns
///
/// * `Err(OpticsError::InvalidParameter)` - Any argument not strictly positive
pub fn fsr(group_index: f64, wavelength: f64, round_trip_length: f64) -> Result<f64, OpticsError> {
    positive("group_index", group_index)?;
    positive("wavelength", wavelength)?;
    positive("round_trip_length", round_trip_length)?;
    Ok(wavelength * wavelength / (group_index * round_trip_length))
}

/// Round-trip length of a circular ring of `radius` microns.
#[inline]
pub fn ring_circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

fn positive(name: &'static str, value: f64) -> Result<(), OpticsError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(OpticsError::InvalidParameter { name, value })
    }
}

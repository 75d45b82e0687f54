//! Sellmeier dispersion models for the waveguide materials.
//!
//! ```text
//! eps(λ) = n(λ)^2 = 1 + Σ B_k λ² / (λ² - C_k²)
//! ```
//!
//! with λ in microns. Coefficients:
//! - Silicon: H. H. Li, *J. Phys. Chem. Ref. Data* **9**, 561 (1980), room temperature fit
//! - Fused silica: I. H. Malitson, *J. Opt. Soc. Am.* **55**, 1205 (1965)

use num_traits::Float;

/// Three-term Sellmeier model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sellmeier {
    /// Oscillator strengths `B_k`.
    pub b: [f64; 3],
    /// Resonance wavelengths `C_k` in microns.
    pub c: [f64; 3],
}

impl Sellmeier {
    /// Crystalline silicon, valid roughly 1.2 µm to 14 µm.
    pub const SILICON: Sellmeier = Sellmeier {
        b: [10.6684293, 0.0030434748, 1.54133408],
        c: [0.301516485, 1.13475115, 1104.0],
    };

    /// Fused silica, valid roughly 0.21 µm to 3.7 µm.
    pub const SILICA: Sellmeier = Sellmeier {
        b: [0.6961663, 0.4079426, 0.8974794],
        c: [0.0684043, 0.1162414, 9.896161],
    };

    /// Relative permittivity at `wavelength` (microns).
    ///
    /// Wavelengths at a resonance `C_k` divide by zero and return a
    /// non-finite value.
    pub fn permittivity<T: Float>(&self, wavelength: T) -> T {
        let l2 = wavelength * wavelength;
        self.b
            .iter()
            .zip(self.c.iter())
            .fold(T::one(), |acc, (&b, &c)| {
                let b = T::from(b).unwrap_or_else(T::nan);
                let c = T::from(c).unwrap_or_else(T::nan);
                acc + b * l2 / (l2 - c * c)
            })
    }

    /// Refractive index at `wavelength` (microns).
    #[inline]
    pub fn index<T: Float>(&self, wavelength: T) -> T {
        self.permittivity(wavelength).sqrt()
    }
}

/// Relative permittivity of silicon at `wavelength` (microns).
///
/// # Examples
///
/// ```
/// use photonics_core::physics::perm_si;
///
/// let n = perm_si(1.55_f64).sqrt();
/// assert!((n - 3.4777).abs() < 1e-3);
/// ```
#[inline]
pub fn perm_si<T: Float>(wavelength: T) -> T {
    Sellmeier::SILICON.permittivity(wavelength)
}

/// Relative permittivity of silicon dioxide at `wavelength` (microns).
///
/// # Examples
///
/// ```
/// use photonics_core::physics::perm_oxide;
///
/// let n = perm_oxide(1.55_f64).sqrt();
/// assert!((n - 1.4440).abs() < 1e-3);
/// ```
#[inline]
pub fn perm_oxide<T: Float>(wavelength: T) -> T {
    Sellmeier::SILICA.permittivity(wavelength)
}

//! Dual number type integration for automatic differentiation.
//!
//! The interpolation kernel is written once against the [`Scalar`] bound and
//! evaluated either with plain `f64` (lookups) or with [`DualNumber`]
//! (forward-mode gradients). Table data itself is always `f64`; only the
//! query coordinates carry derivative information.
//!
//! ## Usage
//!
//! ```
//! use photonics_core::types::dual::{DualNumber, Scalar};
//!
//! fn square<T: Scalar>(x: T) -> T {
//!     x * x
//! }
//!
//! let x = DualNumber::new(3.0, 1.0); // seed dx/dx = 1
//! let y = square(x);
//! assert_eq!(y.re, 9.0);
//! assert_eq!(y.eps, 6.0);
//! ```

use num_dual::DualNum;

/// Type alias for num-dual's Dual64 (f64-based dual numbers).
///
/// - `re`: Real part (function value)
/// - `eps`: Dual part (directional derivative)
pub type DualNumber = num_dual::Dual64;

/// Scalar type accepted by the interpolation kernel.
///
/// `DualNum<f64>` supplies arithmetic with `f64` operands, conversion from
/// `f64`, and access to the real part through `re()`, which is all the
/// kernel needs to locate a grid cell and weight its corners.
pub trait Scalar: DualNum<f64> + Copy {
    /// Real part of the value, used for cell location.
    #[inline]
    fn value(&self) -> f64 {
        self.re()
    }
}

impl<T: DualNum<f64> + Copy> Scalar for T {}

#[cfg(test)]
mod tests {
    use super::*;

    fn affine<T: Scalar>(x: T) -> T {
        x * 2.0 + 1.0
    }

    #[test]
    fn test_f64_is_scalar() {
        assert_eq!(affine(3.0_f64), 7.0);
        assert_eq!(3.0_f64.value(), 3.0);
    }

    #[test]
    fn test_dual_propagates_derivative() {
        let y = affine(DualNumber::new(3.0, 1.0));
        assert_eq!(y.re, 7.0);
        assert_eq!(y.eps, 2.0);
        assert_eq!(DualNumber::new(1.5, 4.0).value(), 1.5);
    }
}

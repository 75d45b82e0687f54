//! Central finite-difference derivatives.
//!
//! Used where a closed-form or dual-number derivative is not available, and
//! by tests as an independent check on the dual-number gradients.

/// Default step for [`derivative`], in the units of `x`.
pub const DEFAULT_STEP: f64 = 1e-6;

/// Compute the derivative of `f` at `x` with a central difference.
///
/// # Examples
///
/// ```
/// use photonics_core::math::derivative;
///
/// let d = derivative(|x| x * x, 3.0);
/// assert!((d - 6.0).abs() < 1e-6);
/// ```
#[inline]
pub fn derivative<F>(f: F, x: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    derivative_with_step(f, x, DEFAULT_STEP)
}

/// Compute the derivative of `f` at `x` with a caller-supplied step `h`.
///
/// For piecewise-linear functions such as a bilinear lookup, `h` must be
/// small enough that `x ± h` stays within one grid cell, otherwise the
/// result averages the slopes of neighbouring cells.
#[inline]
pub fn derivative_with_step<F>(f: F, x: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (f(x + h) - f(x - h)) / (2.0 * h)
}

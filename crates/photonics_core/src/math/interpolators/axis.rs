//! Sampled coordinate axis and the physical-to-index map.

use crate::types::{InterpolationError, Scalar};

/// Ordered samples of one grid axis, in physical units.
///
/// Derived scalars (`len`, `min`, `max`) are computed once on construction.
/// The fractional index is an affine rescaling, so the samples are expected
/// to be uniformly spaced; [`Axis::is_uniform`] reports whether they are.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    samples: Vec<f64>,
    min: f64,
    max: f64,
}

impl Axis {
    /// Build an axis from strictly increasing samples.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InsufficientData)` - No samples
    /// * `Err(InterpolationError::NonMonotonicAxis)` - Samples not strictly increasing
    ///
    /// A single-sample axis is accepted. Its span is zero, so every
    /// fractional index it produces is non-finite.
    pub fn new(samples: Vec<f64>) -> Result<Self, InterpolationError> {
        if samples.is_empty() {
            return Err(InterpolationError::InsufficientData { got: 0, need: 1 });
        }

        if let Some(index) = samples
            .windows(2)
            .position(|pair| !(pair[1] > pair[0]))
            .map(|i| i + 1)
        {
            return Err(InterpolationError::NonMonotonicAxis { index });
        }

        let min = samples[0];
        let max = samples[samples.len() - 1];
        Ok(Self { samples, min, max })
    }

    /// Map a physical value onto the fractional index space `[0, len - 1]`.
    ///
    /// ```text
    /// index = (v - min) * ((len - 1) / (max - min))
    /// ```
    ///
    /// No bounds checking: values outside `[min, max]` map outside
    /// `[0, len - 1]` and are resolved by the grid's boundary mode.
    #[inline]
    pub fn fractional_index<T: Scalar>(&self, v: T) -> T {
        (v - self.min) * self.scale()
    }

    /// Index units per physical unit.
    #[inline]
    pub fn scale(&self) -> f64 {
        (self.len() - 1) as f64 / (self.max - self.min)
    }

    /// Whether consecutive spacings agree within `rel_tol` of the mean spacing.
    pub fn is_uniform(&self, rel_tol: f64) -> bool {
        if self.len() < 3 {
            return true;
        }
        let mean = (self.max - self.min) / (self.len() - 1) as f64;
        self.samples
            .windows(2)
            .all(|pair| ((pair[1] - pair[0]) - mean).abs() <= rel_tol * mean)
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; an axis holds at least one sample.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Smallest sample.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest sample.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns a reference to the samples.
    #[inline]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
}

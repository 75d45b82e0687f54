//! Order-1 (bilinear) interpolation on a regular 2D grid.

use crate::types::{InterpolationError, Scalar};

/// How corners that fall outside the grid are filled.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BoundaryMode {
    /// Clamp indices to the nearest edge sample (flat extrapolation).
    #[default]
    Clamp,
    /// Out-of-grid corners contribute a fixed value.
    Constant(f64),
}

/// Row-major 2D grid of `f64` samples.
///
/// Unlike a coordinate-based interpolator, the grid is addressed by
/// fractional indices: row `r` and column `c` in `[0, rows - 1]` and
/// `[0, cols - 1]`. Mapping physical coordinates onto those indices is the
/// job of [`Axis`](super::Axis).
///
/// # Grid Layout
///
/// `values[i * cols + j]` is the sample at row `i`, column `j`.
///
/// # Example
///
/// ```
/// use photonics_core::math::interpolators::{BilinearGrid, BoundaryMode};
///
/// let grid = BilinearGrid::new(2, 2, vec![0.0, 2.0, 2.0, 4.0]).unwrap();
/// let z = grid.map_coordinates(0.5_f64, 0.5_f64, BoundaryMode::Clamp);
/// assert!((z - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BilinearGrid {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl BilinearGrid {
    /// Construct a grid from row-major values.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InsufficientData)` - Zero rows or columns
    /// * `Err(InterpolationError::InvalidInput)` - `values.len() != rows * cols`
    pub fn new(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self, InterpolationError> {
        if rows == 0 || cols == 0 {
            return Err(InterpolationError::InsufficientData {
                got: rows.min(cols),
                need: 1,
            });
        }
        if values.len() != rows * cols {
            return Err(InterpolationError::InvalidInput(format!(
                "Grid of {} x {} needs {} values, got {}",
                rows,
                cols,
                rows * cols,
                values.len()
            )));
        }
        Ok(Self { rows, cols, values })
    }

    /// Construct a grid from a slice of equal-length rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, InterpolationError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(InterpolationError::InvalidInput(format!(
                    "Grid row {} length ({}) must match first row length ({})",
                    i,
                    row.len(),
                    cols
                )));
            }
            values.extend_from_slice(row);
        }
        Self::new(rows.len(), cols, values)
    }

    /// Evaluate the grid at fractional coordinates `(r, c)`.
    ///
    /// # Formula
    ///
    /// ```text
    /// i = floor(r), j = floor(c), u = r - i, v = c - j
    /// z = (1-u)(1-v)*z[i][j] + u*(1-v)*z[i+1][j] + (1-u)*v*z[i][j+1] + u*v*z[i+1][j+1]
    /// ```
    ///
    /// The cell is located from the real part of the coordinates, so for
    /// dual-number inputs the derivative is that of the bilinear formula on
    /// the selected cell. On an exact grid line the cell above is selected.
    /// Non-finite coordinates produce a non-finite result.
    pub fn map_coordinates<T: Scalar>(&self, r: T, c: T, boundary: BoundaryMode) -> T {
        let r0 = r.value().floor();
        let c0 = c.value().floor();
        let u = r - r0;
        let v = c - c0;

        // Saturating casts: NaN maps to 0 and infinities to the isize limits.
        let i = r0 as isize;
        let j = c0 as isize;

        let z00 = self.corner(i, j, boundary);
        let z10 = self.corner(i.saturating_add(1), j, boundary);
        let z01 = self.corner(i, j.saturating_add(1), boundary);
        let z11 = self.corner(i.saturating_add(1), j.saturating_add(1), boundary);

        let one = T::one();
        (one - u) * (one - v) * z00 + u * (one - v) * z10 + (one - u) * v * z01 + u * v * z11
    }

    /// Sample at row `i`, column `j`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            Some(self.values[i * self.cols + j])
        } else {
            None
        }
    }

    #[inline]
    fn corner(&self, i: isize, j: isize, boundary: BoundaryMode) -> f64 {
        match boundary {
            BoundaryMode::Clamp => {
                let i = i.clamp(0, self.rows as isize - 1) as usize;
                let j = j.clamp(0, self.cols as isize - 1) as usize;
                self.values[i * self.cols + j]
            }
            BoundaryMode::Constant(fill) => {
                if i < 0 || j < 0 {
                    return fill;
                }
                self.get(i as usize, j as usize).unwrap_or(fill)
            }
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns a reference to the row-major values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Smallest stored value.
    pub fn min_value(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest stored value.
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

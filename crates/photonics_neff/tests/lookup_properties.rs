//! Property tests for the packaged effective-index tables.
//!
//! Checks the interpolation contract against the real embedded data: exact
//! at grid nodes, bounded by the enclosing cell, batch equal to scalar, and
//! gradients consistent with finite differences.

use approx::assert_relative_eq;
use photonics_core::math::derivative_with_step;
use photonics_neff::{grad_neff, neff, neff_batch, NeffTables, TableId};
use proptest::prelude::*;

fn tables() -> &'static NeffTables {
    NeffTables::global().unwrap()
}

/// Corner values of the cell containing `(width, wavelength)`.
fn enclosing_corners(table: TableId, width: f64, wavelength: f64) -> [f64; 4] {
    let t = tables().table(table);
    let last_w = t.widths().len() - 1;
    let last_l = t.wavelengths().len() - 1;
    let iw = (t.widths().fractional_index(width).floor().max(0.0) as usize).min(last_w);
    let il = (t.wavelengths().fractional_index(wavelength).floor().max(0.0) as usize).min(last_l);
    let (iw1, il1) = ((iw + 1).min(last_w), (il + 1).min(last_l));
    [
        t.sample(iw, il).unwrap(),
        t.sample(iw1, il).unwrap(),
        t.sample(iw, il1).unwrap(),
        t.sample(iw1, il1).unwrap(),
    ]
}

// ========================================
// Node Exactness
// ========================================

#[test]
fn test_exact_at_nodes_all_tables() {
    for id in TableId::ALL {
        let table = tables().table(id);
        for (iw, &w) in table.widths().samples().iter().enumerate() {
            for (il, &l) in table.wavelengths().samples().iter().enumerate() {
                let expected = table.sample(iw, il).unwrap();
                let got = tables().lookup(id, w, l);
                assert!(
                    (got - expected).abs() < 1e-9,
                    "{} at ({}, {}): expected {}, got {}",
                    id,
                    w,
                    l,
                    expected,
                    got
                );
            }
        }
    }
}

#[test]
fn test_reference_point_within_grid_range() {
    let n = neff(0.5, 1.55).unwrap();
    let grid = tables().table(TableId::Combined).grid();
    assert!(n >= grid.min_value() && n <= grid.max_value());
    assert!(n > 2.3 && n < 2.6, "neff(0.5, 1.55) = {}", n);
}

// ========================================
// Batch Evaluation
// ========================================

#[test]
fn test_batch_equals_scalar_loop() {
    let widths: Vec<f64> = (0..40).map(|i| 0.2 + 0.0137 * i as f64).collect();
    let wavelengths: Vec<f64> = (0..40).map(|i| 1.15 + 0.0149 * i as f64).collect();
    for id in TableId::ALL {
        let batch = neff_batch(id, &widths, &wavelengths).unwrap();
        for ((&w, &l), &b) in widths.iter().zip(&wavelengths).zip(&batch) {
            assert_eq!(b, tables().lookup(id, w, l));
        }
    }
}

// ========================================
// Gradients
// ========================================

#[test]
fn test_grad_neff_matches_finite_difference() {
    // Interior of a cell, away from grid lines
    let (w, l) = (0.4312, 1.4125);
    let g = grad_neff(w, l, 1).unwrap();
    let fd_w = derivative_with_step(|x| neff(x, l).unwrap(), w, 1e-7);
    let fd_l = derivative_with_step(|x| neff(w, x).unwrap(), l, 1e-7);
    assert_relative_eq!(g.d_width, fd_w, max_relative = 1e-5);
    assert_relative_eq!(g.d_wavelength, fd_l, max_relative = 1e-5);
}

#[test]
fn test_grad_neff_mode_does_not_select_table() {
    assert_eq!(grad_neff(0.5, 1.55, 1).unwrap(), grad_neff(0.5, 1.55, 3).unwrap());
    let te1 = tables().gradient(TableId::Te1, 0.5, 1.55);
    assert_ne!(grad_neff(0.5, 1.55, 3).unwrap(), te1);
}

// ========================================
// Property-Based Tests
// ========================================

proptest! {
    #[test]
    fn prop_lookup_within_enclosing_corners(
        w in 0.24f64..0.7,
        l in 1.2f64..1.7,
        idx in 0usize..6,
    ) {
        let id = TableId::ALL[idx];
        let z = tables().lookup(id, w, l);
        let corners = enclosing_corners(id, w, l);
        let lo = corners.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = corners.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(z >= lo - 1e-12 && z <= hi + 1e-12, "{} not in [{}, {}]", z, lo, hi);
    }

    #[test]
    fn prop_out_of_range_is_finite(w in -1.0f64..2.0, l in 0.5f64..3.0) {
        prop_assert!(neff(w, l).unwrap().is_finite());
    }
}

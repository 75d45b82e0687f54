//! Gradient command implementation

use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};

use photonics_neff::TableId;

use super::load_tables;
use super::lookup::warn_outside_grid;
use crate::config::CliConfig;
use crate::output::{fixed, render, Record};
use crate::Result;

/// Partial derivatives at one point
#[derive(Debug, Serialize)]
pub struct GradientRecord {
    pub table: &'static str,
    pub width_um: f64,
    pub wavelength_um: f64,
    pub dneff_dwidth: f64,
    pub dneff_dwavelength: f64,
}

impl Record for GradientRecord {
    const HEADERS: &'static [&'static str] = &[
        "Table",
        "Width (µm)",
        "Wavelength (µm)",
        "∂neff/∂w (1/µm)",
        "∂neff/∂λ (1/µm)",
    ];

    fn cells(&self, precision: usize) -> Vec<String> {
        vec![
            self.table.to_string(),
            fixed(self.width_um, 3),
            fixed(self.wavelength_um, 3),
            fixed(self.dneff_dwidth, precision),
            fixed(self.dneff_dwavelength, precision),
        ]
    }
}

/// Run the gradient command
///
/// `mode` is accepted like the library's `grad_neff` and likewise does not
/// pick the table; `table` does.
pub fn run<W: Write>(
    table: TableId,
    width: f64,
    wavelength: f64,
    mode: Option<u8>,
    config: &CliConfig,
    out: &mut W,
) -> Result<()> {
    info!(table = %table, width, wavelength, "Starting gradient");
    if let Some(mode) = mode {
        debug!(mode, "Mode does not select a table; use --table");
    }

    let tables = load_tables(config)?;
    warn_outside_grid(tables.table(table), &[width], &[wavelength]);
    let gradient = tables.gradient(table, width, wavelength);

    let record = GradientRecord {
        table: table.name(),
        width_um: width,
        wavelength_um: wavelength,
        dneff_dwidth: gradient.d_width,
        dneff_dwavelength: gradient.d_wavelength,
    };
    render(&[record], config.format, config.precision, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::run_json;
    use approx::assert_relative_eq;

    #[test]
    fn test_gradient_matches_library() {
        let value = run_json(|config, out| {
            run(TableId::Combined, 0.5, 1.55, Some(3), config, out)
        });
        let expected = photonics_neff::grad_neff(0.5, 1.55, 3).unwrap();
        // JSON text round trip may move the last bit
        assert_relative_eq!(
            value[0]["dneff_dwidth"].as_f64().unwrap(),
            expected.d_width,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            value[0]["dneff_dwavelength"].as_f64().unwrap(),
            expected.d_wavelength,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_gradient_table_selects_table() {
        let combined = run_json(|config, out| run(TableId::Combined, 0.6, 1.31, None, config, out));
        let tm0 = run_json(|config, out| run(TableId::Tm0, 0.6, 1.31, None, config, out));
        assert_eq!(tm0[0]["table"], "tm0");
        assert_ne!(combined[0]["dneff_dwidth"], tm0[0]["dneff_dwidth"]);
    }
}

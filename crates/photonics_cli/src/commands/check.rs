//! Check command implementation
//!
//! Loads the configured tables and reports their axes and value ranges.

use serde::Serialize;
use std::io::Write;
use tracing::info;

use photonics_neff::TableId;

use super::load_tables;
use crate::config::CliConfig;
use crate::output::{fixed, render, Record};
use crate::Result;

/// Axis and value summary of one table
#[derive(Debug, Serialize)]
pub struct TableSummary {
    pub table: &'static str,
    pub layout: &'static str,
    pub widths: usize,
    pub width_min_um: f64,
    pub width_max_um: f64,
    pub wavelengths: usize,
    pub wavelength_min_um: f64,
    pub wavelength_max_um: f64,
    pub neff_min: f64,
    pub neff_max: f64,
}

impl Record for TableSummary {
    const HEADERS: &'static [&'static str] = &[
        "Table",
        "Layout",
        "Widths",
        "Width range (µm)",
        "Wavelengths",
        "Wavelength range (µm)",
        "neff range",
    ];

    fn cells(&self, precision: usize) -> Vec<String> {
        vec![
            self.table.to_string(),
            self.layout.to_string(),
            self.widths.to_string(),
            format!("{} - {}", fixed(self.width_min_um, 3), fixed(self.width_max_um, 3)),
            self.wavelengths.to_string(),
            format!(
                "{} - {}",
                fixed(self.wavelength_min_um, 3),
                fixed(self.wavelength_max_um, 3)
            ),
            format!("{} - {}", fixed(self.neff_min, precision), fixed(self.neff_max, precision)),
        ]
    }
}

/// Run the check command
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    info!("Checking effective-index tables...");
    match &config.data_dir {
        Some(dir) => info!("  Source: {}", dir.display()),
        None => info!("  Source: embedded"),
    }
    info!("  Boundary: {}", config.boundary);

    let tables = load_tables(config)?;
    let summaries: Vec<TableSummary> = TableId::ALL
        .iter()
        .map(|&id| {
            let table = tables.table(id);
            TableSummary {
                table: id.name(),
                layout: table.id().layout().corner_label(),
                widths: table.widths().len(),
                width_min_um: table.widths().min(),
                width_max_um: table.widths().max(),
                wavelengths: table.wavelengths().len(),
                wavelength_min_um: table.wavelengths().min(),
                wavelength_max_um: table.wavelengths().max(),
                neff_min: table.grid().min_value(),
                neff_max: table.grid().max_value(),
            }
        })
        .collect();

    render(&summaries, config.format, config.precision, out)?;
    info!("All tables loaded");
    Ok(())
}

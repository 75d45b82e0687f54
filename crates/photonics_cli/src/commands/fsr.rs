//! Ring free spectral range command implementation

use serde::Serialize;
use std::io::Write;
use tracing::info;

use photonics_neff::TableId;

use super::load_tables;
use super::lookup::warn_outside_grid;
use crate::config::CliConfig;
use crate::output::{fixed, render, Record};
use crate::Result;

/// Free spectral range of one ring
#[derive(Debug, Serialize)]
pub struct FsrRecord {
    pub table: &'static str,
    pub width_um: f64,
    pub wavelength_um: f64,
    pub radius_um: f64,
    pub group_index: f64,
    pub fsr_nm: f64,
}

impl Record for FsrRecord {
    const HEADERS: &'static [&'static str] = &[
        "Table",
        "Width (µm)",
        "Wavelength (µm)",
        "Radius (µm)",
        "ng",
        "FSR (nm)",
    ];

    fn cells(&self, precision: usize) -> Vec<String> {
        vec![
            self.table.to_string(),
            fixed(self.width_um, 3),
            fixed(self.wavelength_um, 3),
            fixed(self.radius_um, 3),
            fixed(self.group_index, precision),
            fixed(self.fsr_nm, precision),
        ]
    }
}

/// Run the fsr command
pub fn run<W: Write>(
    table: TableId,
    width: f64,
    wavelength: f64,
    radius: f64,
    config: &CliConfig,
    out: &mut W,
) -> Result<()> {
    info!(table = %table, width, wavelength, radius, "Starting ring FSR");

    let tables = load_tables(config)?;
    warn_outside_grid(tables.table(table), &[width], &[wavelength]);
    let fsr_um = tables.ring_fsr(table, width, wavelength, radius)?;

    let record = FsrRecord {
        table: table.name(),
        width_um: width,
        wavelength_um: wavelength,
        radius_um: radius,
        group_index: tables.group_index(table, width, wavelength),
        fsr_nm: fsr_um * 1e3,
    };
    render(&[record], config.format, config.precision, out)
}

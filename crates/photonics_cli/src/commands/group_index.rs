//! Group index command implementation

use serde::Serialize;
use std::io::Write;
use tracing::info;

use photonics_neff::TableId;

use super::lookup::warn_outside_grid;
use super::{broadcast, load_tables};
use crate::config::CliConfig;
use crate::output::{fixed, render, Record};
use crate::Result;

/// Effective and group index at one point
#[derive(Debug, Serialize)]
pub struct GroupIndexRecord {
    pub table: &'static str,
    pub width_um: f64,
    pub wavelength_um: f64,
    pub neff: f64,
    pub group_index: f64,
}

impl Record for GroupIndexRecord {
    const HEADERS: &'static [&'static str] =
        &["Table", "Width (µm)", "Wavelength (µm)", "neff", "ng"];

    fn cells(&self, precision: usize) -> Vec<String> {
        vec![
            self.table.to_string(),
            fixed(self.width_um, 3),
            fixed(self.wavelength_um, 3),
            fixed(self.neff, precision),
            fixed(self.group_index, precision),
        ]
    }
}

/// Run the group-index command
pub fn run<W: Write>(
    table: TableId,
    widths: &[f64],
    wavelengths: &[f64],
    config: &CliConfig,
    out: &mut W,
) -> Result<()> {
    let (widths, wavelengths) = broadcast(widths, wavelengths)?;
    info!(table = %table, points = widths.len(), "Starting group index");

    let tables = load_tables(config)?;
    warn_outside_grid(tables.table(table), &widths, &wavelengths);

    let records: Vec<GroupIndexRecord> = widths
        .iter()
        .zip(&wavelengths)
        .map(|(&width_um, &wavelength_um)| GroupIndexRecord {
            table: table.name(),
            width_um,
            wavelength_um,
            neff: tables.lookup(table, width_um, wavelength_um),
            group_index: tables.group_index(table, width_um, wavelength_um),
        })
        .collect();

    render(&records, config.format, config.precision, out)
}

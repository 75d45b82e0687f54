//! Lookup command implementation
//!
//! Evaluates one table at every (width, wavelength) pair.

use serde::Serialize;
use std::io::Write;
use tracing::{info, warn};

use photonics_neff::{EffectiveIndexTable, TableId};

use super::{broadcast, load_tables};
use crate::config::CliConfig;
use crate::output::{fixed, render, Record};
use crate::Result;

/// One lookup result
#[derive(Debug, Serialize)]
pub struct LookupRecord {
    pub table: &'static str,
    pub width_um: f64,
    pub wavelength_um: f64,
    pub neff: f64,
}

impl Record for LookupRecord {
    const HEADERS: &'static [&'static str] = &["Table", "Width (µm)", "Wavelength (µm)", "neff"];

    fn cells(&self, precision: usize) -> Vec<String> {
        vec![
            self.table.to_string(),
            fixed(self.width_um, 3),
            fixed(self.wavelength_um, 3),
            fixed(self.neff, precision),
        ]
    }
}

/// Run the lookup command
pub fn run<W: Write>(
    table: TableId,
    widths: &[f64],
    wavelengths: &[f64],
    config: &CliConfig,
    out: &mut W,
) -> Result<()> {
    let (widths, wavelengths) = broadcast(widths, wavelengths)?;
    info!(table = %table, points = widths.len(), "Starting lookup");

    let tables = load_tables(config)?;
    warn_outside_grid(tables.table(table), &widths, &wavelengths);
    let values = tables.lookup_batch(table, &widths, &wavelengths)?;

    let records: Vec<LookupRecord> = widths
        .iter()
        .zip(&wavelengths)
        .zip(values)
        .map(|((&width_um, &wavelength_um), neff)| LookupRecord {
            table: table.name(),
            width_um,
            wavelength_um,
            neff,
        })
        .collect();

    render(&records, config.format, config.precision, out)?;
    info!("Lookup complete");
    Ok(())
}

/// Log queries that fall outside the table's axes.
pub(crate) fn warn_outside_grid(table: &EffectiveIndexTable, widths: &[f64], wavelengths: &[f64]) {
    let (w, l) = (table.widths(), table.wavelengths());
    for (&width, &wavelength) in widths.iter().zip(wavelengths) {
        if !(w.min()..=w.max()).contains(&width) || !(l.min()..=l.max()).contains(&wavelength) {
            warn!(
                table = %table.id(),
                width,
                wavelength,
                "Query outside table grid; value follows the boundary mode"
            );
        }
    }
}

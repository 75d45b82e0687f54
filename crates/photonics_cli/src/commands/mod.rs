//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! results to the writer they are given and log to stderr.

pub mod check;
pub mod fsr;
pub mod gradient;
pub mod group_index;
pub mod lookup;
pub mod permittivity;

use photonics_neff::NeffTables;
use tracing::debug;

use crate::config::CliConfig;
use crate::Result;

/// Table store for `config`: the embedded tables, or the six files in
/// `data_dir`, with the configured boundary mode.
pub fn load_tables(config: &CliConfig) -> Result<NeffTables> {
    let tables = match &config.data_dir {
        Some(dir) => NeffTables::load_from_dir(dir)?,
        None => NeffTables::global()?.clone(),
    };
    debug!(boundary = ?config.boundary_mode(), "Table store ready");
    Ok(tables.with_boundary(config.boundary_mode()))
}

/// Pair up two argument lists, repeating a single-element list to the
/// length of the other.
pub fn broadcast(widths: &[f64], wavelengths: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
    match (widths.len(), wavelengths.len()) {
        (0, _) | (_, 0) => Err(crate::CliError::InvalidArgument(
            "at least one width and one wavelength are required".to_string(),
        )),
        (a, b) if a == b => Ok((widths.to_vec(), wavelengths.to_vec())),
        (1, b) => Ok((vec![widths[0]; b], wavelengths.to_vec())),
        (a, 1) => Ok((widths.to_vec(), vec![wavelengths[0]; a])),
        (a, b) => Err(crate::CliError::InvalidArgument(format!(
            "{} widths and {} wavelengths cannot be paired",
            a, b
        ))),
    }
}

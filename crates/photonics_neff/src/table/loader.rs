//! CSV table loader.
//!
//! File format:
//!
//! ```text
//! width_um\wavelength_um,1.200,1.210,...     <- corner label, column-axis samples
//! 0.240,2.2516,2.2338,...                    <- row-axis sample, one value per column
//! 0.245,...
//! ```
//!
//! The corner label is `wavelength_um\width_um` for wavelength-major files
//! and `width_um\wavelength_um` for width-major files. It must match the
//! table's fixed [`GridLayout`].

use super::{EffectiveIndexTable, GridLayout, TableId};
use crate::NeffError;
use photonics_core::math::interpolators::{Axis, BilinearGrid};
use std::io::Read;
use tracing::debug;

/// Parse one table from CSV text.
///
/// `source` names the file in error messages.
///
/// # Returns
///
/// * `Err(NeffError::FileFormat)` - Unknown corner label, layout mismatch,
///   non-numeric field, ragged row, no data rows, or non-increasing axis
pub fn parse_table<R: Read>(
    id: TableId,
    source: &str,
    reader: R,
) -> Result<EffectiveIndexTable, NeffError> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut records = csv.records();

    let header = match records.next() {
        Some(record) => record.map_err(|e| NeffError::file_format(source, e.to_string()))?,
        None => return Err(NeffError::file_format(source, "file is empty")),
    };

    let label = header.get(0).unwrap_or_default();
    let layout = GridLayout::from_corner_label(label).ok_or_else(|| {
        NeffError::file_format(source, format!("unrecognised corner label '{}'", label))
    })?;
    if layout != id.layout() {
        return Err(NeffError::file_format(
            source,
            format!(
                "table {} must be {:?}, file is {:?}",
                id,
                id.layout(),
                layout
            ),
        ));
    }

    let column_samples = header
        .iter()
        .skip(1)
        .map(|field| parse_field(source, 1, field))
        .collect::<Result<Vec<f64>, NeffError>>()?;

    let mut row_samples = Vec::new();
    let mut values = Vec::new();

    for record in records {
        let record = record.map_err(|e| NeffError::file_format(source, e.to_string()))?;
        let line = record.position().map_or(0, |p| p.line());

        if record.iter().all(str::is_empty) {
            continue;
        }
        if record.len() != column_samples.len() + 1 {
            return Err(NeffError::file_format(
                source,
                format!(
                    "line {} has {} fields, expected {}",
                    line,
                    record.len(),
                    column_samples.len() + 1
                ),
            ));
        }

        let mut fields = record.iter();
        if let Some(first) = fields.next() {
            row_samples.push(parse_field(source, line, first)?);
        }
        for field in fields {
            values.push(parse_field(source, line, field)?);
        }
    }

    if row_samples.is_empty() {
        return Err(NeffError::file_format(source, "no data rows"));
    }

    let rows = row_samples.len();
    let cols = column_samples.len();
    let row_axis = axis(source, "row", row_samples)?;
    let col_axis = axis(source, "column", column_samples)?;
    let grid = BilinearGrid::new(rows, cols, values)
        .map_err(|e| NeffError::file_format(source, e.to_string()))?;

    let (widths, wavelengths) = match layout {
        GridLayout::WavelengthMajor => (col_axis, row_axis),
        GridLayout::WidthMajor => (row_axis, col_axis),
    };

    debug!(
        table = %id,
        source,
        widths = widths.len(),
        wavelengths = wavelengths.len(),
        "parsed effective-index table"
    );

    EffectiveIndexTable::new(id, grid, widths, wavelengths)
}

fn parse_field(source: &str, line: u64, field: &str) -> Result<f64, NeffError> {
    field.parse::<f64>().map_err(|_| {
        NeffError::file_format(source, format!("line {}: '{}' is not a number", line, field))
    })
}

fn axis(source: &str, which: &str, samples: Vec<f64>) -> Result<Axis, NeffError> {
    Axis::new(samples)
        .map_err(|e| NeffError::file_format(source, format!("{} axis: {}", which, e)))
}

//! Process-wide table store.
//!
//! The six packaged tables are embedded at compile time and parsed on first
//! use behind a [`OnceLock`]. After that every lookup reads immutable data
//! without locking. A load failure is cached as well, so a broken table
//! fails every lookup with the same error instead of retrying.

use super::{parse_table, EffectiveIndexTable, TableId};
use crate::NeffError;
use photonics_core::math::interpolators::BoundaryMode;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{info, warn};

static GLOBAL: OnceLock<Result<NeffTables, NeffError>> = OnceLock::new();

/// Relative tolerance used to flag non-uniform axes and mismatched mode axes.
const AXIS_TOLERANCE: f64 = 1e-9;

fn embedded_source(id: TableId) -> &'static str {
    match id {
        TableId::Combined => include_str!("../../data/neff_si_sio2_width_240_5_700_wav_1200_10_1700.csv"),
        TableId::Te0 => include_str!("../../data/neff_te0_si_sio2_width_240_5_700_wav_1200_10_1700.csv"),
        TableId::Tm0 => include_str!("../../data/neff_tm0_si_sio2_width_240_5_700_wav_1200_10_1700.csv"),
        TableId::Te1 => include_str!("../../data/neff_te1_si_sio2_width_240_5_700_wav_1200_10_1700.csv"),
        TableId::Tm1 => include_str!("../../data/neff_tm1_si_sio2_width_240_5_700_wav_1200_10_1700.csv"),
        TableId::Te2 => include_str!("../../data/neff_te2_si_sio2_width_240_5_700_wav_1200_10_1700.csv"),
    }
}

/// The six effective-index tables.
///
/// The combined and TE0 tables keep the axes read from their own files.
/// TM0, TE1, TM1 and TE2 are evaluated on TE0's axes: their own axes are
/// read, compared against TE0's, and discarded.
///
/// # Example
///
/// ```
/// use photonics_neff::{NeffTables, TableId};
///
/// let tables = NeffTables::global().unwrap();
/// let n = tables.lookup(TableId::Te0, 0.5, 1.55);
/// assert!(n > 2.0 && n < 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct NeffTables {
    tables: Vec<EffectiveIndexTable>,
    boundary: BoundaryMode,
}

impl NeffTables {
    /// Shared store built from the embedded tables on first call.
    pub fn global() -> Result<&'static NeffTables, NeffError> {
        GLOBAL
            .get_or_init(|| {
                let loaded = Self::load_embedded();
                match &loaded {
                    Ok(_) => info!(tables = TableId::ALL.len(), "Loaded embedded effective-index tables"),
                    Err(e) => warn!(error = %e, "Failed to load embedded effective-index tables"),
                }
                loaded
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Parse the tables embedded in the library.
    pub fn load_embedded() -> Result<Self, NeffError> {
        let tables = TableId::ALL
            .iter()
            .map(|&id| parse_table(id, id.file_name(), embedded_source(id).as_bytes()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::assemble(tables)
    }

    /// Load the six tables from `dir`, using the packaged file names.
    ///
    /// # Returns
    ///
    /// * `Err(NeffError::FileFormat)` - A file is missing or malformed
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, NeffError> {
        let dir = dir.as_ref();
        let tables = TableId::ALL
            .iter()
            .map(|&id| {
                let path = dir.join(id.file_name());
                let display = path.display().to_string();
                let file = File::open(&path)
                    .map_err(|e| NeffError::file_format(display.as_str(), e.to_string()))?;
                parse_table(id, &display, BufReader::new(file))
            })
            .collect::<Result<Vec<_>, _>>()?;
        info!(dir = %dir.display(), "Loaded effective-index tables from directory");
        Self::assemble(tables)
    }

    /// Build the store from one parsed table per [`TableId`], in `TableId::ALL` order.
    ///
    /// Applies TE0's axes to the higher-order mode tables.
    pub fn assemble(tables: Vec<EffectiveIndexTable>) -> Result<Self, NeffError> {
        if tables.len() != TableId::ALL.len()
            || tables.iter().zip(TableId::ALL).any(|(t, id)| t.id() != id)
        {
            return Err(NeffError::file_format(
                "<tables>",
                "expected one table per id in storage order",
            ));
        }

        let te0_widths = tables[TableId::Te0.index()].widths().clone();
        let te0_wavelengths = tables[TableId::Te0.index()].wavelengths().clone();

        let mut assembled = Vec::with_capacity(tables.len());
        for table in tables {
            let id = table.id();
            for (name, axis) in [("width", table.widths()), ("wavelength", table.wavelengths())] {
                if !axis.is_uniform(AXIS_TOLERANCE.sqrt()) {
                    warn!(table = %id, axis = name, "axis is not uniformly spaced; affine index map is approximate");
                }
            }

            if TableId::HIGHER_MODES.contains(&id) {
                if !same_axis(table.widths().samples(), te0_widths.samples())
                    || !same_axis(table.wavelengths().samples(), te0_wavelengths.samples())
                {
                    warn!(table = %id, "axes differ from TE0; evaluating on TE0 axes");
                }
                assembled.push(table.with_axes(te0_widths.clone(), te0_wavelengths.clone())?);
            } else {
                assembled.push(table);
            }
        }

        Ok(Self {
            tables: assembled,
            boundary: BoundaryMode::Clamp,
        })
    }

    /// Use `boundary` for out-of-grid queries instead of edge clamping.
    ///
    /// `BoundaryMode::Constant(0.0)` gives the zero fill of
    /// `ndimage.map_coordinates`' default mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use photonics_core::math::interpolators::BoundaryMode;
    /// use photonics_neff::{NeffTables, TableId};
    ///
    /// let tables = NeffTables::load_embedded()
    ///     .unwrap()
    ///     .with_boundary(BoundaryMode::Constant(0.0));
    /// assert_eq!(tables.lookup(TableId::Combined, 0.1, 1.55), 0.0);
    /// ```
    pub fn with_boundary(mut self, boundary: BoundaryMode) -> Self {
        self.boundary = boundary;
        self
    }

    /// Boundary mode applied to every lookup.
    pub fn boundary(&self) -> BoundaryMode {
        self.boundary
    }

    /// Table by id.
    pub fn table(&self, id: TableId) -> &EffectiveIndexTable {
        &self.tables[id.index()]
    }
}

fn same_axis(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(x, y)| (x - y).abs() <= AXIS_TOLERANCE * y.abs().max(1.0))
}

//! Effective-index tables: identifiers, layout, and per-table evaluation.
//!
//! ## Tables
//!
//! | Id | File layout | Rows | Columns |
//! |---|---|---|---|
//! | `Combined` | wavelength-major | wavelength | width |
//! | `Te0`, `Tm0`, `Te1`, `Tm1`, `Te2` | width-major | width | wavelength |
//!
//! The layouts are fixed by how the simulation tables were exported. Every
//! lookup takes `(width, wavelength)`; the table decides which one maps onto
//! rows.

mod loader;
mod store;

pub use loader::parse_table;
pub use store::NeffTables;

use crate::NeffError;
use photonics_core::math::interpolators::{Axis, BilinearGrid, BoundaryMode};
use photonics_core::types::Scalar;
use std::fmt;
use std::str::FromStr;

/// One of the six packaged tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    /// Fundamental-mode table used by `neff` and `grad_neff`.
    Combined = 0,
    /// First transverse-electric mode.
    Te0 = 1,
    /// First transverse-magnetic mode.
    Tm0 = 2,
    /// Second transverse-electric mode.
    Te1 = 3,
    /// Second transverse-magnetic mode.
    Tm1 = 4,
    /// Third transverse-electric mode.
    Te2 = 5,
}

impl TableId {
    /// All tables in storage order.
    pub const ALL: [TableId; 6] = [
        TableId::Combined,
        TableId::Te0,
        TableId::Tm0,
        TableId::Te1,
        TableId::Tm1,
        TableId::Te2,
    ];

    /// Mode-resolved tables that share TE0's axes.
    pub const HIGHER_MODES: [TableId; 4] = [TableId::Tm0, TableId::Te1, TableId::Tm1, TableId::Te2];

    /// Short name used on the command line and in logs.
    pub fn name(&self) -> &'static str {
        match self {
            TableId::Combined => "combined",
            TableId::Te0 => "te0",
            TableId::Tm0 => "tm0",
            TableId::Te1 => "te1",
            TableId::Tm1 => "tm1",
            TableId::Te2 => "te2",
        }
    }

    /// Packaged CSV file name.
    pub fn file_name(&self) -> &'static str {
        match self {
            TableId::Combined => "neff_si_sio2_width_240_5_700_wav_1200_10_1700.csv",
            TableId::Te0 => "neff_te0_si_sio2_width_240_5_700_wav_1200_10_1700.csv",
            TableId::Tm0 => "neff_tm0_si_sio2_width_240_5_700_wav_1200_10_1700.csv",
            TableId::Te1 => "neff_te1_si_sio2_width_240_5_700_wav_1200_10_1700.csv",
            TableId::Tm1 => "neff_tm1_si_sio2_width_240_5_700_wav_1200_10_1700.csv",
            TableId::Te2 => "neff_te2_si_sio2_width_240_5_700_wav_1200_10_1700.csv",
        }
    }

    /// Fixed grid layout of the table's file.
    pub fn layout(&self) -> GridLayout {
        match self {
            TableId::Combined => GridLayout::WavelengthMajor,
            _ => GridLayout::WidthMajor,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableId {
    type Err = NeffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "combined" | "neff" => Ok(TableId::Combined),
            "te0" => Ok(TableId::Te0),
            "tm0" => Ok(TableId::Tm0),
            "te1" => Ok(TableId::Te1),
            "tm1" => Ok(TableId::Tm1),
            "te2" => Ok(TableId::Te2),
            _ => Err(NeffError::UnknownTable(s.to_string())),
        }
    }
}

/// Which physical axis runs along the grid rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLayout {
    /// Rows are wavelength samples, columns are width samples.
    WavelengthMajor,
    /// Rows are width samples, columns are wavelength samples.
    WidthMajor,
}

impl GridLayout {
    /// Corner label of the header row in the CSV file.
    pub fn corner_label(&self) -> &'static str {
        match self {
            GridLayout::WavelengthMajor => "wavelength_um\\width_um",
            GridLayout::WidthMajor => "width_um\\wavelength_um",
        }
    }

    /// Parse a header corner label.
    pub fn from_corner_label(label: &str) -> Option<Self> {
        match label.trim() {
            "wavelength_um\\width_um" => Some(GridLayout::WavelengthMajor),
            "width_um\\wavelength_um" => Some(GridLayout::WidthMajor),
            _ => None,
        }
    }
}

/// A simulation grid with its width and wavelength axes.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveIndexTable {
    id: TableId,
    grid: BilinearGrid,
    widths: Axis,
    wavelengths: Axis,
}

impl EffectiveIndexTable {
    /// Bundle a grid with its axes, checking the grid shape against the layout.
    pub fn new(
        id: TableId,
        grid: BilinearGrid,
        widths: Axis,
        wavelengths: Axis,
    ) -> Result<Self, NeffError> {
        let (rows, cols) = match id.layout() {
            GridLayout::WavelengthMajor => (wavelengths.len(), widths.len()),
            GridLayout::WidthMajor => (widths.len(), wavelengths.len()),
        };
        if grid.rows() != rows || grid.cols() != cols {
            return Err(NeffError::file_format(
                id.file_name(),
                format!(
                    "grid is {} x {} but axes require {} x {}",
                    grid.rows(),
                    grid.cols(),
                    rows,
                    cols
                ),
            ));
        }
        Ok(Self {
            id,
            grid,
            widths,
            wavelengths,
        })
    }

    /// Evaluate at a physical `(width, wavelength)` in microns.
    ///
    /// Both coordinates go through their axis's affine map; the layout
    /// decides which fractional index addresses the rows.
    #[inline]
    pub fn evaluate<T: Scalar>(&self, width: T, wavelength: T, boundary: BoundaryMode) -> T {
        let w = self.widths.fractional_index(width);
        let l = self.wavelengths.fractional_index(wavelength);
        match self.id.layout() {
            GridLayout::WavelengthMajor => self.grid.map_coordinates(l, w, boundary),
            GridLayout::WidthMajor => self.grid.map_coordinates(w, l, boundary),
        }
    }

    /// Stored value at width sample `iw` and wavelength sample `il`.
    pub fn sample(&self, iw: usize, il: usize) -> Option<f64> {
        match self.id.layout() {
            GridLayout::WavelengthMajor => self.grid.get(il, iw),
            GridLayout::WidthMajor => self.grid.get(iw, il),
        }
    }

    /// Replace the axes, keeping the grid. Used to apply TE0's axes to the
    /// higher-order mode tables.
    pub(crate) fn with_axes(self, widths: Axis, wavelengths: Axis) -> Result<Self, NeffError> {
        Self::new(self.id, self.grid, widths, wavelengths)
    }

    /// Table identifier.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Underlying grid.
    pub fn grid(&self) -> &BilinearGrid {
        &self.grid
    }

    /// Width axis in microns.
    pub fn widths(&self) -> &Axis {
        &self.widths
    }

    /// Wavelength axis in microns.
    pub fn wavelengths(&self) -> &Axis {
        &self.wavelengths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table(id: TableId) -> EffectiveIndexTable {
        let widths = Axis::new(vec![0.3, 0.4, 0.5]).unwrap();
        let wavelengths = Axis::new(vec![1.5, 1.6]).unwrap();
        // n = 2 + w - 0.5 (λ - 1.5), laid out per the table's layout.
        let n = |w: f64, l: f64| 2.0 + w - 0.5 * (l - 1.5);
        let rows: Vec<Vec<f64>> = match id.layout() {
            GridLayout::WavelengthMajor => wavelengths
                .samples()
                .iter()
                .map(|&l| widths.samples().iter().map(|&w| n(w, l)).collect())
                .collect(),
            GridLayout::WidthMajor => widths
                .samples()
                .iter()
                .map(|&w| wavelengths.samples().iter().map(|&l| n(w, l)).collect())
                .collect(),
        };
        let grid = BilinearGrid::from_rows(&rows).unwrap();
        EffectiveIndexTable::new(id, grid, widths, wavelengths).unwrap()
    }

    #[test]
    fn test_table_id_round_trip_names() {
        for id in TableId::ALL {
            assert_eq!(id.name().parse::<TableId>().unwrap(), id);
            assert_eq!(id.to_string(), id.name());
        }
        assert_eq!("NEFF".parse::<TableId>().unwrap(), TableId::Combined);
        assert!("te3".parse::<TableId>().is_err());
    }

    #[test]
    fn test_table_id_index_matches_all_order() {
        for (i, id) in TableId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_layouts_are_fixed() {
        assert_eq!(TableId::Combined.layout(), GridLayout::WavelengthMajor);
        for id in [TableId::Te0, TableId::Tm0, TableId::Te1, TableId::Tm1, TableId::Te2] {
            assert_eq!(id.layout(), GridLayout::WidthMajor);
        }
    }

    #[test]
    fn test_corner_label_round_trip() {
        for layout in [GridLayout::WavelengthMajor, GridLayout::WidthMajor] {
            assert_eq!(GridLayout::from_corner_label(layout.corner_label()), Some(layout));
        }
        assert_eq!(GridLayout::from_corner_label("width,wavelength"), None);
    }

    #[test]
    fn test_both_layouts_agree() {
        let combined = small_table(TableId::Combined);
        let te0 = small_table(TableId::Te0);
        for (w, l) in [(0.35, 1.52), (0.3, 1.5), (0.5, 1.6), (0.44, 1.57)] {
            let a = combined.evaluate(w, l, BoundaryMode::Clamp);
            let b = te0.evaluate(w, l, BoundaryMode::Clamp);
            assert!((a - b).abs() < 1e-12);
            assert!((a - (2.0 + w - 0.5 * (l - 1.5))).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sample_indexing_follows_layout() {
        let combined = small_table(TableId::Combined);
        let te0 = small_table(TableId::Te0);
        assert_eq!(combined.sample(2, 1), te0.sample(2, 1));
        assert_eq!(combined.sample(3, 0), None);
    }

    #[test]
    fn test_new_rejects_shape_mismatch() {
        let grid = BilinearGrid::new(2, 2, vec![1.0; 4]).unwrap();
        let widths = Axis::new(vec![0.3, 0.4, 0.5]).unwrap();
        let wavelengths = Axis::new(vec![1.5, 1.6]).unwrap();
        let err = EffectiveIndexTable::new(TableId::Te0, grid, widths, wavelengths).unwrap_err();
        assert!(matches!(err, NeffError::FileFormat { .. }));
    }
}

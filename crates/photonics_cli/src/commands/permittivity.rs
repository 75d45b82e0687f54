//! Material permittivity command implementation

use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;
use tracing::info;

use photonics_core::physics::{perm_oxide, perm_si};

use crate::config::CliConfig;
use crate::output::{fixed, render, Record};
use crate::{CliError, Result};

/// Waveguide materials with a Sellmeier model
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    /// Crystalline silicon core
    #[value(alias = "silicon")]
    Si,
    /// Silicon dioxide cladding
    #[value(alias = "sio2")]
    Oxide,
}

impl Material {
    fn permittivity(self, wavelength: f64) -> f64 {
        match self {
            Material::Si => perm_si(wavelength),
            Material::Oxide => perm_oxide(wavelength),
        }
    }
}

/// Permittivity and index at one wavelength
#[derive(Debug, Serialize)]
pub struct PermittivityRecord {
    pub material: Material,
    pub wavelength_um: f64,
    pub permittivity: f64,
    pub index: f64,
}

impl Record for PermittivityRecord {
    const HEADERS: &'static [&'static str] = &["Material", "Wavelength (µm)", "ε", "n"];

    fn cells(&self, precision: usize) -> Vec<String> {
        let material = match self.material {
            Material::Si => "si",
            Material::Oxide => "oxide",
        };
        vec![
            material.to_string(),
            fixed(self.wavelength_um, 3),
            fixed(self.permittivity, precision),
            fixed(self.index, precision),
        ]
    }
}

/// Run the permittivity command
pub fn run<W: Write>(
    material: Material,
    wavelengths: &[f64],
    config: &CliConfig,
    out: &mut W,
) -> Result<()> {
    info!(?material, points = wavelengths.len(), "Starting permittivity");

    if let Some(&bad) = wavelengths.iter().find(|&&l| !(l > 0.0)) {
        return Err(CliError::InvalidArgument(format!(
            "wavelength must be positive, got {}",
            bad
        )));
    }

    let records: Vec<PermittivityRecord> = wavelengths
        .iter()
        .map(|&wavelength_um| {
            let permittivity = material.permittivity(wavelength_um);
            PermittivityRecord {
                material,
                wavelength_um,
                permittivity,
                index: permittivity.sqrt(),
            }
        })
        .collect();

    render(&records, config.format, config.precision, out)
}

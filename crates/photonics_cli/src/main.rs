//! siphotonics CLI - Effective-Index Lookups for SOI Strip Waveguides
//!
//! This is the operational entry point for the siphotonics table library.
//!
//! # Commands
//!
//! - `siphotonics lookup --width 0.5 --wavelength 1.5,1.55` - Effective index
//! - `siphotonics gradient --width 0.5 --wavelength 1.55` - ∂neff/∂w and ∂neff/∂λ
//! - `siphotonics group-index --width 0.5 --wavelength 1.55` - Group index
//! - `siphotonics fsr --width 0.5 --wavelength 1.55 --radius 10` - Ring FSR
//! - `siphotonics permittivity --material si --wavelength 1.55` - Sellmeier permittivity
//! - `siphotonics check` - Load the tables and summarise them
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires configuration and
//! logging around the photonics_neff and photonics_core libraries.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use photonics_neff::TableId;

mod commands;
mod config;
mod error;
mod output;

use commands::permittivity::Material;
use config::{build_config, CliArgs as ConfigCliArgs, CliConfig, OutputFormat};
pub use error::{CliError, Result};

/// Effective-index lookups for silicon-on-insulator strip waveguides
#[derive(Parser)]
#[command(name = "siphotonics")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the six table CSV files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format (table, json, csv)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Decimals in table output
    #[arg(long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Effective index at each (width, wavelength) pair
    Lookup {
        /// Waveguide widths in µm (comma-separated)
        #[arg(short, long, value_delimiter = ',', required = true)]
        width: Vec<f64>,

        /// Wavelengths in µm (comma-separated)
        #[arg(short = 'l', long, value_delimiter = ',', required = true)]
        wavelength: Vec<f64>,

        /// Table (combined, te0, tm0, te1, tm1, te2)
        #[arg(short, long, default_value = "combined")]
        table: TableId,
    },

    /// Derivatives of the effective index
    Gradient {
        /// Waveguide width in µm
        #[arg(short, long)]
        width: f64,

        /// Wavelength in µm
        #[arg(short = 'l', long)]
        wavelength: f64,

        /// Table (combined, te0, tm0, te1, tm1, te2)
        #[arg(short, long, default_value = "combined")]
        table: TableId,

        /// Mode number (1-5); accepted but does not select the table
        #[arg(short, long)]
        mode: Option<u8>,
    },

    /// Group index from the wavelength slope of a table
    GroupIndex {
        /// Waveguide widths in µm (comma-separated)
        #[arg(short, long, value_delimiter = ',', required = true)]
        width: Vec<f64>,

        /// Wavelengths in µm (comma-separated)
        #[arg(short = 'l', long, value_delimiter = ',', required = true)]
        wavelength: Vec<f64>,

        /// Table (combined, te0, tm0, te1, tm1, te2)
        #[arg(short, long, default_value = "combined")]
        table: TableId,
    },

    /// Free spectral range of a ring resonator
    Fsr {
        /// Waveguide width in µm
        #[arg(short, long)]
        width: f64,

        /// Wavelength in µm
        #[arg(short = 'l', long)]
        wavelength: f64,

        /// Ring radius in µm
        #[arg(short, long)]
        radius: f64,

        /// Table (combined, te0, tm0, te1, tm1, te2)
        #[arg(short, long, default_value = "combined")]
        table: TableId,
    },

    /// Sellmeier permittivity of the waveguide materials
    Permittivity {
        /// Material
        #[arg(short, long, value_enum)]
        material: Material,

        /// Wavelengths in µm (comma-separated)
        #[arg(short = 'l', long, value_delimiter = ',', required = true)]
        wavelength: Vec<f64>,
    },

    /// Load the tables and print their axes and value ranges
    Check,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn dispatch<W: Write>(command: Commands, config: &CliConfig, out: &mut W) -> Result<()> {
    match command {
        Commands::Lookup {
            width,
            wavelength,
            table,
        } => commands::lookup::run(table, &width, &wavelength, config, out),
        Commands::Gradient {
            width,
            wavelength,
            table,
            mode,
        } => commands::gradient::run(table, width, wavelength, mode, config, out),
        Commands::GroupIndex {
            width,
            wavelength,
            table,
        } => commands::group_index::run(table, &width, &wavelength, config, out),
        Commands::Fsr {
            width,
            wavelength,
            radius,
            table,
        } => commands::fsr::run(table, width, wavelength, radius, config, out),
        Commands::Permittivity {
            material,
            wavelength,
        } => commands::permittivity::run(material, &wavelength, config, out),
        Commands::Check => commands::check::run(config, out),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_args = ConfigCliArgs {
        config_file: cli.config.clone(),
        data_dir: cli.data_dir.clone(),
        format: cli.format,
        precision: cli.precision,
        verbose: cli.verbose,
    };
    let config = build_config(&cli_args).context("Failed to build configuration")?;

    // Initialise tracing
    init_tracing(config.log_level.as_filter_str());

    info!("siphotonics v{}", env!("CARGO_PKG_VERSION"));
    info!(
        format = %config.format,
        boundary = %config.boundary,
        precision = config.precision,
        data_dir = ?config.data_dir,
        "Configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dispatch(cli.command, &config, &mut out)?;
    out.flush()?;
    Ok(())
}

//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables, and CLI arguments.

use photonics_core::math::interpolators::BoundaryMode;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Largest number of decimals printed in table output.
pub const MAX_PRECISION: usize = 16;

const ENV_LOG_LEVEL: &str = "SIPHOTONICS_LOG_LEVEL";
const ENV_FORMAT: &str = "SIPHOTONICS_FORMAT";
const ENV_DATA_DIR: &str = "SIPHOTONICS_DATA_DIR";
const ENV_BOUNDARY: &str = "SIPHOTONICS_BOUNDARY";
const ENV_FILL_VALUE: &str = "SIPHOTONICS_FILL_VALUE";
const ENV_PRECISION: &str = "SIPHOTONICS_PRECISION";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json, csv")]
    InvalidFormat(String),

    #[error("Invalid boundary mode: {0}. Must be one of: clamp, constant")]
    InvalidBoundary(String),

    #[error("Invalid precision: {0}. Must be at most 16")]
    InvalidPrecision(usize),

    #[error("Data directory not found: {}", .0.display())]
    DataDirNotFound(PathBuf),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Out-of-grid behaviour of the lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    /// Nearest edge value
    #[default]
    Clamp,
    /// `fill_value` for corners outside the grid
    Constant,
}

impl FromStr for Boundary {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clamp" | "nearest" => Ok(Boundary::Clamp),
            "constant" => Ok(Boundary::Constant),
            _ => Err(ConfigError::InvalidBoundary(s.to_string())),
        }
    }
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Boundary::Clamp => write!(f, "clamp"),
            Boundary::Constant => write!(f, "constant"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_from_str")]
    pub format: OutputFormat,
    /// Directory holding the six table files; embedded tables when unset
    pub data_dir: Option<PathBuf>,
    /// Out-of-grid behaviour
    #[serde(deserialize_with = "deserialize_from_str")]
    pub boundary: Boundary,
    /// Value used by the constant boundary mode
    pub fill_value: f64,
    /// Decimals printed in table output
    pub precision: usize,
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr<Err = ConfigError>,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            format: OutputFormat::Table,
            data_dir: None,
            boundary: Boundary::Clamp,
            fill_value: 0.0,
            precision: 6,
        }
    }
}

impl CliConfig {
    /// Override fields for which `lookup` returns a value.
    ///
    /// `lookup` maps an environment variable name to its value.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = OutputFormat::from_str(&format)?;
        }
        if let Some(dir) = lookup(ENV_DATA_DIR) {
            self.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(boundary) = lookup(ENV_BOUNDARY) {
            self.boundary = Boundary::from_str(&boundary)?;
        }
        if let Some(fill) = lookup(ENV_FILL_VALUE) {
            self.fill_value = fill
                .trim()
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("{}={}", ENV_FILL_VALUE, fill)))?;
        }
        if let Some(precision) = lookup(ENV_PRECISION) {
            self.precision = precision
                .trim()
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("{}={}", ENV_PRECISION, precision)))?;
        }
        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision(self.precision));
        }
        if let Some(dir) = &self.data_dir {
            if !dir.is_dir() {
                return Err(ConfigError::DataDirNotFound(dir.clone()));
            }
        }
        Ok(())
    }

    /// Boundary mode handed to the table store
    pub fn boundary_mode(&self) -> BoundaryMode {
        match self.boundary {
            Boundary::Clamp => BoundaryMode::Clamp,
            Boundary::Constant => BoundaryMode::Constant(self.fill_value),
        }
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(dir) = &cli.data_dir {
            self.data_dir = Some(dir.clone());
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(precision) = cli.precision {
            self.precision = precision;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Table directory override
    pub data_dir: Option<PathBuf>,
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Precision override
    pub precision: Option<usize>,
    /// Raise the log level to debug
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with_env<F>(cli: &CliArgs, env: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // Start with defaults or file config
    let mut config = if let Some(config_path) = &cli.config_file {
        CliConfig::from_file(config_path)?
    } else {
        CliConfig::default()
    };

    // Override with environment variables
    config.apply_env(env)?;

    // Override with CLI arguments
    config.merge_with_cli(cli);

    // Final validation
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.data_dir, None);
        assert_eq!(config.boundary, Boundary::Clamp);
        assert_eq!(config.fill_value, 0.0);
        assert_eq!(config.precision, 6);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert!(OutputFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_boundary_parsing() {
        assert_eq!(Boundary::from_str("clamp").unwrap(), Boundary::Clamp);
        assert_eq!(Boundary::from_str("nearest").unwrap(), Boundary::Clamp);
        assert_eq!(Boundary::from_str("Constant").unwrap(), Boundary::Constant);
        assert!(Boundary::from_str("wrap").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for level in [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ] {
            assert_eq!(LogLevel::from_str(&level.to_string()).unwrap(), level);
        }
        for format in [OutputFormat::Table, OutputFormat::Json, OutputFormat::Csv] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
        for boundary in [Boundary::Clamp, Boundary::Constant] {
            assert_eq!(Boundary::from_str(&boundary.to_string()).unwrap(), boundary);
        }
    }

    #[test]
    fn test_boundary_mode() {
        let mut config = CliConfig::default();
        assert_eq!(config.boundary_mode(), BoundaryMode::Clamp);
        config.boundary = Boundary::Constant;
        config.fill_value = 1.444;
        assert_eq!(config.boundary_mode(), BoundaryMode::Constant(1.444));
    }

    #[test]
    fn test_validate_precision() {
        let mut config = CliConfig::default();
        config.precision = MAX_PRECISION + 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPrecision(_))
        ));
        config.precision = MAX_PRECISION;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_data_dir() {
        let mut config = CliConfig::default();
        config.data_dir = Some(PathBuf::from("/definitely/not/here"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DataDirNotFound(_))
        ));

        let dir = tempfile::tempdir().unwrap();
        config.data_dir = Some(dir.path().to_path_buf());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"
            format = "json"
            boundary = "constant"
            fill_value = 1.444
            precision = 4
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.boundary, Boundary::Constant);
        assert_eq!(config.fill_value, 1.444);
        assert_eq!(config.precision, 4);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: CliConfig = toml::from_str("format = \"csv\"").unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.precision, 6);
    }

    #[test]
    fn test_toml_rejects_bad_enum() {
        assert!(toml::from_str::<CliConfig>("format = \"xml\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("siphotonics.toml");
        std::fs::write(&path, "precision = 3\n").unwrap();
        assert_eq!(CliConfig::from_file(&path).unwrap().precision, 3);

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            CliConfig::from_file(&missing),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_apply_env() {
        let mut config = CliConfig::default();
        config
            .apply_env(env_of(&[
                ("SIPHOTONICS_LOG_LEVEL", "info"),
                ("SIPHOTONICS_FORMAT", "csv"),
                ("SIPHOTONICS_BOUNDARY", "constant"),
                ("SIPHOTONICS_FILL_VALUE", " 1.5 "),
                ("SIPHOTONICS_PRECISION", "9"),
            ]))
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.boundary_mode(), BoundaryMode::Constant(1.5));
        assert_eq!(config.precision, 9);
    }

    #[test]
    fn test_apply_env_rejects_bad_number() {
        let mut config = CliConfig::default();
        let err = config
            .apply_env(env_of(&[("SIPHOTONICS_PRECISION", "many")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EnvError(_)));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            format: Some(OutputFormat::Json),
            precision: Some(2),
            verbose: true,
            ..Default::default()
        };

        config.merge_with_cli(&cli);

        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.precision, 2);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_build_config_with_defaults() {
        let config = build_config_with_env(&CliArgs::default(), no_env).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_build_config_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("siphotonics.toml");
        std::fs::write(&path, "format = \"csv\"\nprecision = 3\nlog_level = \"error\"\n").unwrap();

        let cli = CliArgs {
            config_file: Some(path),
            precision: Some(8),
            ..Default::default()
        };
        let env = env_of(&[("SIPHOTONICS_FORMAT", "json"), ("SIPHOTONICS_PRECISION", "5")]);
        let config = build_config_with_env(&cli, env).unwrap();

        // file < env < CLI
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.precision, 8);
    }

    #[test]
    fn test_build_config_validates_after_merge() {
        let cli = CliArgs {
            precision: Some(40),
            ..Default::default()
        };
        assert!(build_config_with_env(&cli, no_env).is_err());
    }
}

//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! command-line flags.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Configuration file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "bsm.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidOutputFormat(String),

    #[error("Invalid ladder steps: {0}. Must be at least 1")]
    InvalidLadderSteps(usize),

    #[error("Invalid ladder width: {0}. Must be in [0, 1)")]
    InvalidLadderWidth(f64),

    #[error("Configuration file error: {0}")]
    FileError(String),
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

/// Rendering of command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_output_format")]
    pub output_format: OutputFormat,
    /// Number of spots in a ladder profile
    pub ladder_steps: usize,
    /// Ladder half width as a fraction of the centre spot
    pub ladder_width: f64,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_output_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            output_format: OutputFormat::Table,
            ladder_steps: 11,
            ladder_width: 0.25,
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Override fields from environment variables
    ///
    /// `lookup` returns the value of a variable, if set.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup("BSM_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&log_level)?;
        }

        if let Some(format) = lookup("BSM_OUTPUT_FORMAT") {
            self.output_format = OutputFormat::from_str(&format)?;
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ladder_steps == 0 {
            return Err(ConfigError::InvalidLadderSteps(self.ladder_steps));
        }

        // Every ladder spot must stay strictly positive
        if !(self.ladder_width >= 0.0 && self.ladder_width < 1.0) {
            return Err(ConfigError::InvalidLadderWidth(self.ladder_width));
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(format) = &cli.output_format {
            self.output_format = OutputFormat::from_str(format)?;
        }
        if let Some(steps) = cli.ladder_steps {
            self.ladder_steps = steps;
        }
        if let Some(width) = cli.ladder_width {
            self.ladder_width = width;
        }
        Ok(())
    }
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub output_format: Option<String>,
    /// Ladder steps override
    pub ladder_steps: Option<usize>,
    /// Ladder width override
    pub ladder_width: Option<f64>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (`--config`, else `bsm.toml` if present)
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                CliConfig::from_file(default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.apply_env(|key| std::env::var(key).ok())?;
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.ladder_steps, 11);
        assert_eq!(config.ladder_width, 0.25);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert!(matches!(
            OutputFormat::from_str("csv"),
            Err(ConfigError::InvalidOutputFormat(_))
        ));
    }

    #[test]
    fn test_from_toml_partial() {
        let config = CliConfig::from_toml("output_format = \"json\"\nladder_steps = 21\n").unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.ladder_steps, 21);
        // Unspecified fields keep their defaults
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.ladder_width, 0.25);
    }

    #[test]
    fn test_from_toml_invalid_values() {
        assert!(matches!(
            CliConfig::from_toml("log_level = \"loud\""),
            Err(ConfigError::FileError(_))
        ));
        assert!(matches!(
            CliConfig::from_toml("ladder_steps = 0"),
            Err(ConfigError::InvalidLadderSteps(0))
        ));
        assert!(matches!(
            CliConfig::from_toml("ladder_width = -0.1"),
            Err(ConfigError::InvalidLadderWidth(_))
        ));
    }

    #[test]
    fn test_from_missing_file() {
        let result = CliConfig::from_file(Path::new("/nonexistent/bsm.toml"));
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_apply_env() {
        let mut config = CliConfig::default();
        config
            .apply_env(|key| match key {
                "BSM_LOG_LEVEL" => Some("debug".to_string()),
                "BSM_OUTPUT_FORMAT" => Some("json".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_apply_env_invalid() {
        let mut config = CliConfig::default();
        let result = config.apply_env(|key| (key == "BSM_OUTPUT_FORMAT").then(|| "xml".to_string()));
        assert!(matches!(result, Err(ConfigError::InvalidOutputFormat(_))));
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config = CliConfig::from_toml("log_level = \"error\"\nladder_width = 0.5").unwrap();
        let cli = CliArgs {
            log_level: Some("info".to_string()),
            ladder_steps: Some(5),
            ..Default::default()
        };
        config.merge_with_cli(&cli).unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.ladder_steps, 5);
        assert_eq!(config.ladder_width, 0.5);
    }

    #[test]
    fn test_validate_ladder_width() {
        for width in [1.0, 1.5, f64::NAN] {
            let config = CliConfig {
                ladder_width: width,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "width {} should be rejected", width);
        }
    }
}

//! Configuration for the journal report runner.
//!
//! Configuration is read from YAML with environment variable interpolation,
//! then validated before use.
//!
//! # Usage
//!
//! ```rust,ignore
//! use journal_analytics::config::load_config;
//!
//! // Load from default path (journal-analytics.yaml)
//! let config = load_config(None)?;
//!
//! // Access configuration values
//! println!("trades: {}", config.journal.trades_path);
//! ```

mod journal;
mod observability;
mod report;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use journal::JournalConfig;
pub use observability::{LogFormat, LoggingConfig, ObservabilityConfig};
pub use report::{ReportConfig, ReportFormat};

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "journal-analytics.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Trade snapshot selection.
    pub journal: JournalConfig,
    /// Report output options.
    #[serde(default)]
    pub report: ReportConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to [`DEFAULT_CONFIG_PATH`].
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string.
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // constant pattern
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |caps: &regex::Captures<'_>| {
        let default_value = caps.get(2).map_or("", |m| m.as_str());
        match caps.get(1).map(|m| std::env::var(m.as_str())) {
            Some(Ok(v)) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.journal.trades_path.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "journal.trades_path must not be empty".to_string(),
        ));
    }

    if let (Some(start), Some(end)) = (config.journal.start_date, config.journal.end_date) {
        if start > end {
            return Err(ConfigError::ValidationError(format!(
                "journal.start_date ({start}) must not be after journal.end_date ({end})"
            )));
        }
    }

    if config.journal.user_id.is_some() && config.report.per_user {
        return Err(ConfigError::ValidationError(
            "report.per_user cannot be combined with journal.user_id".to_string(),
        ));
    }

    if tracing_subscriber::EnvFilter::try_new(&config.observability.logging.level).is_err() {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.level '{}' is not a valid filter",
            config.observability.logging.level
        )));
    }

    Ok(())
}

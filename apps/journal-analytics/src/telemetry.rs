//! Tracing setup.
//!
//! Logs go to stderr so stdout carries only the report.
//!
//! # Configuration
//!
//! - `RUST_LOG`: overrides `observability.logging.level` when set
//!
//! # Usage
//!
//! ```rust,ignore
//! use journal_analytics::config::LoggingConfig;
//! use journal_analytics::telemetry::init_tracing;
//!
//! init_tracing(&LoggingConfig::default())?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Error type for tracing setup.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log filter '{directive}': {message}")]
    InvalidFilter {
        /// Offending directive.
        directive: String,
        /// Parser message.
        message: String,
    },
    /// Failed to install the global subscriber.
    #[error("failed to initialize tracing subscriber: {0}")]
    SubscriberError(String),
}

/// Build the level filter, preferring `RUST_LOG` over the configured level.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|e| TelemetryError::InvalidFilter {
        directive: config.level.clone(),
        message: e.to_string(),
    })
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Fails if the filter is invalid or a global subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Json => builder
            .json()
            .with_current_span(config.include_spans)
            .with_span_list(config.include_spans)
            .try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    installed.map_err(|e| TelemetryError::SubscriberError(e.to_string()))
}

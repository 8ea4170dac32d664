//! Journal Report Binary
//!
//! Loads a trade snapshot and prints its performance report.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin journal-report
//! ```
//!
//! # Environment Variables
//!
//! - `JOURNAL_CONFIG`: Path to the YAML config (default: journal-analytics.yaml)
//! - `RUST_LOG`: Log filter (default: from config, `info`)
//!
//! Variables referenced as `${VAR}` inside the config file are also read,
//! after loading `.env` from the working directory or any ancestor.

use anyhow::Context;
use journal_analytics::config::{Config, DEFAULT_CONFIG_PATH, ReportFormat, load_config};
use journal_analytics::journal::{JsonFileTradeSource, TradeSource};
use journal_analytics::report::{PerformanceReport, build_user_reports};
use journal_analytics::telemetry::init_tracing;

fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config_path =
        std::env::var("JOURNAL_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = load_config(Some(&config_path))
        .with_context(|| format!("loading configuration from {config_path}"))?;

    init_tracing(&config.observability.logging)?;
    log_config(&config);

    let source = JsonFileTradeSource::new(&config.journal.trades_path);
    let trades = source
        .fetch(&config.journal.query())
        .with_context(|| format!("loading trade snapshot from {}", source.path().display()))?;

    let output = if config.report.per_user {
        render_user_reports(&config, &trades)?
    } else {
        render_report(&config, PerformanceReport::build(&trades))?
    };

    println!("{output}");
    tracing::info!("Report complete");
    Ok(())
}

fn log_config(config: &Config) {
    tracing::info!(
        trades_path = %config.journal.trades_path,
        user_id = config.journal.user_id.as_deref().unwrap_or("*"),
        start_date = ?config.journal.start_date,
        end_date = ?config.journal.end_date,
        format = ?config.report.format,
        per_user = config.report.per_user,
        "Starting journal report"
    );
}

fn trim(config: &Config, report: PerformanceReport) -> PerformanceReport {
    if config.report.include_history {
        report
    } else {
        report.without_history()
    }
}

fn render_report(config: &Config, report: PerformanceReport) -> anyhow::Result<String> {
    let report = trim(config, report);
    match config.report.format {
        ReportFormat::Json => {
            serde_json::to_string_pretty(&report).context("serializing report")
        }
        ReportFormat::Text => Ok(report.render_text()),
    }
}

fn render_user_reports(
    config: &Config,
    trades: &[journal_analytics::Trade],
) -> anyhow::Result<String> {
    let reports: std::collections::BTreeMap<_, _> = build_user_reports(trades)
        .into_iter()
        .map(|(user, report)| (user, trim(config, report)))
        .collect();

    match config.report.format {
        ReportFormat::Json => {
            serde_json::to_string_pretty(&reports).context("serializing reports")
        }
        ReportFormat::Text => Ok(reports
            .iter()
            .map(|(user, report)| format!("== {user} ==\n{}", report.render_text()))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Load `.env` from the working directory or the nearest ancestor that has one.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Journal Analytics - Rust Core Library
//!
//! Performance analytics for the VeroTrade trading journal.
//!
//! # Architecture
//!
//! - **journal**: Trade model, emotion tag normalization, snapshot
//!   selection and the [`journal::TradeSource`] port
//! - **analytics**: Pure calculators over a date-ordered snapshot
//!   - `compute_drawdown`: running peak, max/current drawdown, recovery
//!   - `compute_streaks`: win/loss run segmentation and current run
//!   - `score_emotional_discipline`: tag percentages and banded score
//!   - `summarize`: win rate, profit factor, averages
//! - **report**: One value bundling every calculator's output, built per
//!   snapshot or per user in parallel
//! - **config** / **telemetry**: YAML configuration and tracing setup for
//!   the `journal-report` binary
//!
//! # Concurrency
//!
//! Calculators are synchronous and share no state. Independent snapshots
//! can be analyzed concurrently without locking.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Pure trading performance calculators.
pub mod analytics;

/// Report runner configuration.
pub mod config;

/// Snapshot loading errors.
pub mod error;

/// Trade data model and sources.
pub mod journal;

/// Report aggregation.
pub mod report;

/// Tracing setup.
pub mod telemetry;

pub use analytics::{
    DisciplineReport, DrawdownResult, EmotionMetrics, ScoreBand, StreakResult, TradeSummary,
    compute_drawdown, compute_streaks, score_emotional_discipline, summarize,
};
pub use error::AnalyticsError;
pub use journal::{EmotionTags, Trade, TradeQuery, TradeSource};
pub use report::{PerformanceReport, build_user_reports};

//! Trading performance analytics.
//!
//! Pure, single-pass calculators over a date-ordered trade snapshot:
//! - Drawdown (running peak, maximum and current drawdown, recovery)
//! - Win/loss streaks (segmented history and the current run)
//! - Emotional discipline (tag-derived percentages and a banded 0-10 score)
//! - Summary statistics (win rate, profit factor, averages)
//!
//! Every calculator skips open trades, trusts the caller's date ordering and
//! returns a zeroed result for empty input.

mod constants;
mod discipline;
mod drawdown;
mod format;
mod math;
mod streaks;
mod summary;

pub use discipline::{
    DisciplineReport, EmotionMetrics, ScoreBand, band_score, emotion_metrics,
    score_emotional_discipline, score_metrics,
};
pub use drawdown::{DrawdownPoint, DrawdownResult, compute_drawdown};
pub use format::{format_decimal, format_pct, format_ratio};
pub use streaks::{StreakKind, StreakResult, StreakSegment, compute_streaks};
pub use summary::{TradeSummary, summarize};

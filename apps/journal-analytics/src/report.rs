//! Performance report aggregation.
//!
//! A [`PerformanceReport`] bundles every calculator's output for one trade
//! snapshot. Reports are plain values built per call; nothing accumulates
//! across calls.

use std::collections::BTreeMap;
use std::fmt::Write;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analytics::{
    DisciplineReport, DrawdownResult, StreakResult, TradeSummary, compute_drawdown,
    compute_streaks, format_decimal, format_pct, format_ratio, score_emotional_discipline,
    summarize,
};
use crate::journal::Trade;

/// User key for trades without an owner.
pub const ANONYMOUS_USER: &str = "anonymous";

/// All analytics for one trade snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceReport {
    /// Headline statistics.
    pub summary: TradeSummary,
    /// Drawdown metrics.
    pub drawdown: DrawdownResult,
    /// Streak metrics.
    pub streaks: StreakResult,
    /// Emotional discipline metrics and score.
    pub discipline: DisciplineReport,
}

impl PerformanceReport {
    /// Build a report from a date-ordered snapshot.
    #[must_use]
    pub fn build(trades: &[Trade]) -> Self {
        let report = Self {
            summary: summarize(trades),
            drawdown: compute_drawdown(trades),
            streaks: compute_streaks(trades),
            discipline: score_emotional_discipline(trades),
        };

        tracing::debug!(
            trades = report.summary.total_trades,
            closed = report.summary.closed_trades,
            max_drawdown = %report.drawdown.max_drawdown,
            discipline_score = %report.discipline.score,
            "Built performance report"
        );

        report
    }

    /// Drop the per-trade drawdown curve and streak segments.
    #[must_use]
    pub fn without_history(mut self) -> Self {
        self.drawdown.history.clear();
        self.streaks.streak_history.clear();
        self.streaks.neutral_trade_ids.clear();
        self
    }

    /// Render a plain-text console report.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let summary = &self.summary;
        let drawdown = &self.drawdown;
        let streaks = &self.streaks;
        let discipline = &self.discipline;
        let metrics = &discipline.metrics;

        let _ = writeln!(out, "Performance Summary");
        let _ = writeln!(
            out,
            "  Trades:            {} ({} closed)",
            summary.total_trades, summary.closed_trades
        );
        let _ = writeln!(
            out,
            "  Wins/Losses/Flat:  {}/{}/{}",
            summary.winning_trades, summary.losing_trades, summary.breakeven_trades
        );
        let _ = writeln!(out, "  Win rate:          {}", format_pct(summary.win_rate));
        let _ = writeln!(out, "  Total P&L:         {}", format_decimal(summary.total_pnl));
        let _ = writeln!(out, "  Profit factor:     {}", format_ratio(summary.profit_factor));

        let _ = writeln!(out, "Drawdown");
        let _ = writeln!(out, "  Max drawdown:      {}", format_decimal(drawdown.max_drawdown));
        let _ = writeln!(
            out,
            "  Current drawdown:  {}",
            format_decimal(drawdown.current_drawdown)
        );
        let _ = writeln!(out, "  Peak:              {}", format_decimal(drawdown.peak));
        if let Some(date) = drawdown.trough_date {
            let _ = writeln!(out, "  Trough date:       {date}");
        }
        if let Some(date) = drawdown.recovery_date {
            let _ = writeln!(out, "  Recovered on:      {date}");
        }

        let _ = writeln!(out, "Streaks");
        let _ = writeln!(
            out,
            "  Current:           {} wins / {} losses",
            streaks.current_win_streak, streaks.current_loss_streak
        );
        let _ = writeln!(
            out,
            "  Longest:           {} wins / {} losses",
            streaks.max_win_streak, streaks.max_loss_streak
        );

        let _ = writeln!(out, "Emotional Discipline");
        let _ = writeln!(
            out,
            "  Score:             {} ({:?})",
            format_decimal(discipline.score),
            discipline.band
        );
        let _ = writeln!(
            out,
            "  Positive emotions: {}",
            format_pct(metrics.positive_emotion_percentage)
        );
        let _ = writeln!(
            out,
            "  Negative impact:   {}",
            format_pct(metrics.negative_impact_percentage)
        );
        let _ = writeln!(
            out,
            "  Win correlation:   {}",
            format_pct(metrics.positive_emotion_win_correlation)
        );
        let _ = writeln!(
            out,
            "  Logging coverage:  {}",
            format_pct(metrics.emotion_logging_completeness)
        );

        out
    }
}

/// Build one report per user, in parallel.
///
/// Trades are grouped by `user_id` (missing owners fall under
/// [`ANONYMOUS_USER`]); each group keeps its input order, so a date-ordered
/// snapshot yields date-ordered groups.
#[must_use]
pub fn build_user_reports(trades: &[Trade]) -> BTreeMap<String, PerformanceReport> {
    let mut groups: BTreeMap<String, Vec<Trade>> = BTreeMap::new();
    for trade in trades {
        let user = trade.user_id.as_deref().unwrap_or(ANONYMOUS_USER);
        groups.entry(user.to_string()).or_default().push(trade.clone());
    }

    tracing::info!(users = groups.len(), "Building per-user reports");

    groups
        .into_par_iter()
        .map(|(user, trades)| {
            let report = PerformanceReport::build(&trades);
            (user, report)
        })
        .collect()
}

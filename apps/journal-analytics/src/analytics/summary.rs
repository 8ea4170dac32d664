//! Aggregate trade statistics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::journal::{Outcome, Trade, eligible};

use super::math::{average, percentage};

/// Headline statistics for a trade snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeSummary {
    /// All trades in the snapshot, open or closed.
    pub total_trades: u64,
    /// Trades with a realized P&L.
    pub closed_trades: u64,
    /// Closed trades with positive P&L.
    pub winning_trades: u64,
    /// Closed trades with negative P&L.
    pub losing_trades: u64,
    /// Closed trades with zero P&L.
    pub breakeven_trades: u64,
    /// Winning / closed trades (percent).
    pub win_rate: Decimal,
    /// Sum of realized P&L.
    pub total_pnl: Decimal,
    /// Sum of winning P&L.
    pub gross_profit: Decimal,
    /// Sum of losing P&L (positive value).
    pub gross_loss: Decimal,
    /// Gross profit / gross loss; None when there were no losses or the
    /// ratio is out of range.
    pub profit_factor: Option<Decimal>,
    /// Average winning trade.
    pub avg_win: Decimal,
    /// Average losing trade (positive value).
    pub avg_loss: Decimal,
    /// Best single trade.
    pub largest_win: Decimal,
    /// Worst single trade (positive value).
    pub largest_loss: Decimal,
}

/// Summarize a trade snapshot.
#[must_use]
pub fn summarize(trades: &[Trade]) -> TradeSummary {
    let mut summary = TradeSummary {
        total_trades: trades.len() as u64,
        ..TradeSummary::default()
    };

    for (_, pnl) in eligible(trades) {
        summary.closed_trades += 1;
        summary.total_pnl = summary.total_pnl.saturating_add(pnl);

        match Outcome::from_pnl(pnl) {
            Outcome::Win => {
                summary.winning_trades += 1;
                summary.gross_profit = summary.gross_profit.saturating_add(pnl);
                summary.largest_win = summary.largest_win.max(pnl);
            }
            Outcome::Loss => {
                summary.losing_trades += 1;
                summary.gross_loss = summary.gross_loss.saturating_add(pnl.abs());
                summary.largest_loss = summary.largest_loss.max(pnl.abs());
            }
            Outcome::Neutral => summary.breakeven_trades += 1,
        }
    }

    summary.win_rate = percentage(summary.winning_trades, summary.closed_trades);
    summary.avg_win = average(summary.gross_profit, summary.winning_trades);
    summary.avg_loss = average(summary.gross_loss, summary.losing_trades);
    // None when there were no losses or the ratio exceeds the Decimal range
    summary.profit_factor = (summary.gross_loss > Decimal::ZERO)
        .then(|| summary.gross_profit.checked_div(summary.gross_loss))
        .flatten();

    summary
}

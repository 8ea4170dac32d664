//! Drawdown of cumulative P&L from its running peak.
//!
//! The curve starts at zero before the first trade, so a journal that opens
//! with a loss is in drawdown from the start.
//!
//! Sums saturate at the `Decimal` range instead of overflowing, and a
//! percentage that cannot be represented is reported as `None`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::journal::{Trade, eligible};

use super::constants::HUNDRED;

/// Cumulative P&L state after one trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawdownPoint {
    /// Trade that produced this point.
    pub trade_id: String,
    /// Trade date.
    pub date: NaiveDate,
    /// Running sum of P&L.
    pub cumulative: Decimal,
    /// Distance below the running peak.
    pub drawdown: Decimal,
    /// Running peak (never below zero).
    pub peak: Decimal,
    /// Cumulative P&L is at the running peak.
    pub is_peak: bool,
    /// Drawdown equals the maximum drawdown seen so far.
    pub is_trough: bool,
}

/// Drawdown metrics over a date-ordered trade sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawdownResult {
    /// Largest peak-to-current decline observed.
    pub max_drawdown: Decimal,
    /// Maximum drawdown as a percentage of the peak it fell from.
    ///
    /// None when there was no drawdown or that peak was not positive.
    pub max_drawdown_pct: Option<Decimal>,
    /// Final peak minus final cumulative P&L.
    ///
    /// This is the distance of the last value from the running peak, not the
    /// depth of the most recent local peak-to-trough move.
    pub current_drawdown: Decimal,
    /// Highest cumulative P&L (zero if it never rose above zero).
    pub peak: Decimal,
    /// Lowest cumulative P&L observed.
    pub trough: Decimal,
    /// Cumulative P&L after the last trade.
    pub final_cumulative: Decimal,
    /// Date the running peak was last raised.
    pub peak_date: Option<NaiveDate>,
    /// Date the maximum drawdown was reached.
    pub trough_date: Option<NaiveDate>,
    /// First date after the trough at which the prior peak was regained.
    pub recovery_date: Option<NaiveDate>,
    /// Per-trade curve.
    pub history: Vec<DrawdownPoint>,
}

/// Compute drawdown metrics.
///
/// Trades must already be sorted ascending by date; open trades are skipped.
#[must_use]
pub fn compute_drawdown(trades: &[Trade]) -> DrawdownResult {
    let mut cumulative = Decimal::ZERO;
    let mut peak = Decimal::ZERO;
    let mut trough: Option<Decimal> = None;
    let mut max_drawdown = Decimal::ZERO;
    let mut peak_date = None;
    let mut trough_date = None;
    let mut trough_index = None;
    let mut peak_at_trough = Decimal::ZERO;
    let mut history = Vec::with_capacity(trades.len());

    for (trade, pnl) in eligible(trades) {
        cumulative = cumulative.saturating_add(pnl);

        if cumulative > peak {
            peak = cumulative;
            peak_date = Some(trade.trade_date);
        }
        trough = Some(trough.map_or(cumulative, |low| low.min(cumulative)));

        let drawdown = peak.saturating_sub(cumulative);
        if drawdown > max_drawdown {
            max_drawdown = drawdown;
            trough_date = Some(trade.trade_date);
            trough_index = Some(history.len());
            peak_at_trough = peak;
        }

        history.push(DrawdownPoint {
            trade_id: trade.id.clone(),
            date: trade.trade_date,
            cumulative,
            drawdown,
            peak,
            is_peak: cumulative == peak,
            is_trough: drawdown == max_drawdown,
        });
    }

    let recovery_date = trough_index.and_then(|index| {
        history
            .iter()
            .skip(index + 1)
            .find(|point| point.cumulative >= peak_at_trough)
            .map(|point| point.date)
    });

    let max_drawdown_pct = (max_drawdown > Decimal::ZERO && peak_at_trough > Decimal::ZERO)
        .then(|| max_drawdown.checked_div(peak_at_trough)?.checked_mul(HUNDRED))
        .flatten();

    DrawdownResult {
        max_drawdown,
        max_drawdown_pct,
        current_drawdown: peak.saturating_sub(cumulative),
        peak,
        trough: trough.unwrap_or(Decimal::ZERO),
        final_cumulative: cumulative,
        peak_date,
        trough_date,
        recovery_date,
        history,
    }
}

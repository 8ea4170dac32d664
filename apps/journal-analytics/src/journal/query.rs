//! Snapshot selection and ordering.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::trade::Trade;

/// Selection applied to a trade snapshot before analysis.
///
/// Date bounds are inclusive; unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeQuery {
    /// Restrict to one user.
    pub user_id: Option<String>,
    /// Earliest trade date to include.
    pub start_date: Option<NaiveDate>,
    /// Latest trade date to include.
    pub end_date: Option<NaiveDate>,
}

impl TradeQuery {
    /// Query matching every trade.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to one user.
    #[must_use]
    pub fn for_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Restrict to an inclusive date window.
    #[must_use]
    pub fn between(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Check whether a trade falls inside this query.
    #[must_use]
    pub fn matches(&self, trade: &Trade) -> bool {
        if let Some(user) = &self.user_id {
            if trade.user_id.as_deref() != Some(user.as_str()) {
                return false;
            }
        }
        if self.start_date.is_some_and(|start| trade.trade_date < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| trade.trade_date > end) {
            return false;
        }
        true
    }
}

/// Filter a snapshot by query and sort it ascending by trade date.
///
/// The sort is stable, so trades sharing a date keep their store order.
#[must_use]
pub fn prepare_trades(trades: Vec<Trade>, query: &TradeQuery) -> Vec<Trade> {
    let mut selected: Vec<Trade> = trades.into_iter().filter(|t| query.matches(t)).collect();
    selected.sort_by_key(|t| t.trade_date);
    selected
}

/// Closed trades paired with their P&L, in input order.
///
/// Open trades (no P&L) are not eligible for any calculator.
pub fn eligible(trades: &[Trade]) -> impl DoubleEndedIterator<Item = (&Trade, Decimal)> {
    trades.iter().filter_map(|t| t.pnl.map(|pnl| (t, pnl)))
}

//! Win/loss streak detection.
//!
//! Two passes over the same date-ordered sequence: a forward pass segments
//! the full history into maximal runs, and a reverse pass measures the run
//! ending at the most recent trade. A zero-P&L trade ends any open run
//! without starting one.
//!
//! The maximum and current streaks are independent measurements. The
//! current run is always one of the segments, so in practice
//! `max_win_streak >= current_win_streak`, but callers should treat the two
//! as separate figures rather than rely on an ordering between them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::journal::{Outcome, Trade, eligible};

/// Kind of streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakKind {
    /// Consecutive winning trades.
    Win,
    /// Consecutive losing trades.
    Loss,
}

impl StreakKind {
    /// Streak kind for a P&L value; None for a neutral trade.
    #[must_use]
    pub fn from_pnl(pnl: Decimal) -> Option<Self> {
        match Outcome::from_pnl(pnl) {
            Outcome::Win => Some(Self::Win),
            Outcome::Loss => Some(Self::Loss),
            Outcome::Neutral => None,
        }
    }
}

/// One maximal run of same-outcome trades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSegment {
    /// Win or loss run.
    pub kind: StreakKind,
    /// Number of trades in the run.
    pub length: u64,
    /// Date of the first trade.
    pub start_date: NaiveDate,
    /// Date of the last trade.
    pub end_date: NaiveDate,
    /// Trade ids in order.
    pub trade_ids: Vec<String>,
}

impl StreakSegment {
    fn start(kind: StreakKind, trade: &Trade) -> Self {
        Self {
            kind,
            length: 1,
            start_date: trade.trade_date,
            end_date: trade.trade_date,
            trade_ids: vec![trade.id.clone()],
        }
    }

    fn extend(&mut self, trade: &Trade) {
        self.length += 1;
        self.end_date = trade.trade_date;
        self.trade_ids.push(trade.id.clone());
    }
}

/// Streak metrics over a date-ordered trade sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakResult {
    /// Trailing consecutive wins ending at the latest trade.
    pub current_win_streak: u64,
    /// Trailing consecutive losses ending at the latest trade.
    pub current_loss_streak: u64,
    /// Longest win run in the history.
    pub max_win_streak: u64,
    /// Longest loss run in the history.
    pub max_loss_streak: u64,
    /// All runs in chronological order.
    pub streak_history: Vec<StreakSegment>,
    /// Zero-P&L trades, which belong to no run.
    pub neutral_trade_ids: Vec<String>,
}

impl StreakResult {
    fn close(&mut self, segment: StreakSegment) {
        match segment.kind {
            StreakKind::Win => self.max_win_streak = self.max_win_streak.max(segment.length),
            StreakKind::Loss => self.max_loss_streak = self.max_loss_streak.max(segment.length),
        }
        self.streak_history.push(segment);
    }
}

/// Compute streak metrics.
///
/// Trades must already be sorted ascending by date; open trades are skipped.
#[must_use]
pub fn compute_streaks(trades: &[Trade]) -> StreakResult {
    let mut result = StreakResult::default();
    let mut open: Option<StreakSegment> = None;

    for (trade, pnl) in eligible(trades) {
        let kind = StreakKind::from_pnl(pnl);

        let continues = matches!((&open, kind), (Some(segment), Some(k)) if segment.kind == k);
        if continues {
            if let Some(segment) = open.as_mut() {
                segment.extend(trade);
            }
            continue;
        }

        if let Some(segment) = open.take() {
            result.close(segment);
        }
        match kind {
            Some(kind) => open = Some(StreakSegment::start(kind, trade)),
            None => result.neutral_trade_ids.push(trade.id.clone()),
        }
    }

    if let Some(segment) = open {
        result.close(segment);
    }

    let (wins, losses) = current_streak(trades);
    result.current_win_streak = wins;
    result.current_loss_streak = losses;
    result
}

/// Length of the run ending at the most recent trade, as (wins, losses).
fn current_streak(trades: &[Trade]) -> (u64, u64) {
    let mut recent = eligible(trades).rev().map(|(_, pnl)| StreakKind::from_pnl(pnl));

    let Some(Some(kind)) = recent.next() else {
        return (0, 0);
    };
    let run = 1 + recent.take_while(|k| *k == Some(kind)).count() as u64;

    match kind {
        StreakKind::Win => (run, 0),
        StreakKind::Loss => (0, run),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn trades(pnls: &[Decimal]) -> Vec<Trade> {
        pnls.iter()
            .enumerate()
            .map(|(i, pnl)| {
                let date = NaiveDate::from_ymd_opt(2024, 3, i as u32 + 1).expect("valid date");
                Trade::new(format!("t{}", i + 1), "MSFT", date).with_pnl(*pnl)
            })
            .collect()
    }

    #[test]
    fn test_reference_sequence() {
        let result = compute_streaks(&trades(&[
            dec!(10),
            dec!(20),
            dec!(-5),
            dec!(-5),
            dec!(-5),
            dec!(30),
        ]));

        let shape: Vec<(StreakKind, u64)> =
            result.streak_history.iter().map(|s| (s.kind, s.length)).collect();
        assert_eq!(
            shape,
            vec![(StreakKind::Win, 2), (StreakKind::Loss, 3), (StreakKind::Win, 1)]
        );
        assert_eq!(result.max_win_streak, 2);
        assert_eq!(result.max_loss_streak, 3);
        assert_eq!(result.current_win_streak, 1);
        assert_eq!(result.current_loss_streak, 0);
    }

    #[test]
    fn test_segment_dates_and_ids() {
        let result = compute_streaks(&trades(&[dec!(-1), dec!(-2), dec!(3)]));
        let first = &result.streak_history[0];
        assert_eq!(first.kind, StreakKind::Loss);
        assert_eq!(first.start_date, NaiveDate::from_ymd_opt(2024, 3, 1).expect("date"));
        assert_eq!(first.end_date, NaiveDate::from_ymd_opt(2024, 3, 2).expect("date"));
        assert_eq!(first.trade_ids, vec!["t1", "t2"]);
    }

    #[test]
    fn test_neutral_breaks_streak() {
        // W W 0 W L 0
        let result = compute_streaks(&trades(&[
            dec!(5),
            dec!(5),
            dec!(0),
            dec!(5),
            dec!(-5),
            dec!(0),
        ]));

        let shape: Vec<(StreakKind, u64)> =
            result.streak_history.iter().map(|s| (s.kind, s.length)).collect();
        assert_eq!(
            shape,
            vec![(StreakKind::Win, 2), (StreakKind::Win, 1), (StreakKind::Loss, 1)]
        );
        assert_eq!(result.neutral_trade_ids, vec!["t3", "t6"]);
        // Most recent trade is neutral
        assert_eq!(result.current_win_streak, 0);
        assert_eq!(result.current_loss_streak, 0);
    }

    #[test]
    fn test_trailing_losses() {
        let result = compute_streaks(&trades(&[dec!(1), dec!(-1), dec!(-2)]));
        assert_eq!(result.current_win_streak, 0);
        assert_eq!(result.current_loss_streak, 2);
    }

    #[test]
    fn test_open_trades_do_not_break_streak() {
        let mut input = trades(&[dec!(1), dec!(2)]);
        let open = Trade::new("open", "MSFT", NaiveDate::from_ymd_opt(2024, 3, 3).expect("date"));
        input.insert(1, open);

        let result = compute_streaks(&input);
        assert_eq!(result.max_win_streak, 2);
        assert_eq!(result.current_win_streak, 2);
    }

    #[test]
    fn test_empty_input() {
        let result = compute_streaks(&[]);
        assert_eq!(result, StreakResult::default());
    }
}

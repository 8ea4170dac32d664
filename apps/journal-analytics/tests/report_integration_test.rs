//! Integration tests for loading a journal snapshot and building reports.
//!
//! These tests write a JSON snapshot to disk, read it back through the file
//! source and check the assembled report against hand-computed figures.

use std::io::Write;

use chrono::NaiveDate;
use journal_analytics::AnalyticsError;
use journal_analytics::analytics::ScoreBand;
use journal_analytics::journal::{
    JsonFileTradeSource, TradeQuery, TradeSource, parse_trades_json,
};
use journal_analytics::report::{ANONYMOUS_USER, PerformanceReport, build_user_reports};
use rust_decimal_macros::dec;
use tempfile::NamedTempFile;

const SNAPSHOT: &str = r#"[
  {
    "id": "t4", "userId": "alice", "symbol": "QQQ", "market": "stock", "side": "SELL",
    "quantity": 5, "pnl": -300, "tradeDate": "2024-03-04",
    "emotionalState": "[\"FOMO\", \"revenge\"]"
  },
  {
    "id": "t1", "user_id": "alice", "symbol": "SPY", "market": "STOCK", "side": "BUY",
    "quantity": 10, "pnl": 100, "trade_date": "2024-03-01",
    "emotional_state": ["CONFIDENT", "discipline"]
  },
  {
    "id": "t2", "user_id": "alice", "symbol": "AAPL", "market": "STOCK", "side": "BUY",
    "quantity": 3, "pnl": -50, "trade_date": "2024-03-02",
    "emotional_state": {"primary_emotion": "anxious", "secondary_emotion": "calm"}
  },
  {
    "id": "t3", "user_id": "alice", "symbol": "ES", "market": "FUTURES", "side": "SELL",
    "quantity": 1, "pnl": 200, "trade_date": "2024-03-03",
    "emotional_state": "PATIENCE"
  },
  {
    "id": "t5", "user_id": "alice", "symbol": "EURUSD", "market": "FOREX", "side": "BUY",
    "quantity": 1000, "pnl": 50, "trade_date": "2024-03-05"
  },
  {
    "id": "t6", "user_id": "alice", "symbol": "TSLA", "market": "STOCK", "side": "BUY",
    "quantity": 2, "trade_date": "2024-03-06"
  },
  {
    "id": "b1", "user_id": "bob", "symbol": "BTC", "market": "CRYPTO", "side": "BUY",
    "quantity": 1, "pnl": -20, "trade_date": "2024-03-02", "emotional_state": null
  },
  {
    "id": "n1", "symbol": "SPY", "market": "STOCK", "side": "BUY",
    "quantity": 1, "pnl": 0, "trade_date": "2024-03-01"
  }
]"#;

fn write_snapshot(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

#[test]
fn test_user_snapshot_report() {
    let file = write_snapshot(SNAPSHOT);
    let source = JsonFileTradeSource::new(file.path());

    let trades = source.fetch(&TradeQuery::all().for_user("alice")).unwrap();
    let ids: Vec<&str> = trades.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["t1", "t2", "t3", "t4", "t5", "t6"]);

    let report = PerformanceReport::build(&trades);

    assert_eq!(report.summary.total_trades, 6);
    assert_eq!(report.summary.closed_trades, 5);
    assert_eq!(report.summary.total_pnl, dec!(0));

    // Cumulative: 100, 50, 250, -50, 0
    assert_eq!(report.drawdown.max_drawdown, dec!(300));
    assert_eq!(report.drawdown.current_drawdown, dec!(250));
    assert_eq!(report.drawdown.peak, dec!(250));
    assert_eq!(report.drawdown.trough, dec!(-50));
    assert_eq!(report.drawdown.max_drawdown_pct, Some(dec!(120)));
    assert_eq!(report.drawdown.trough_date, Some(date(4)));
    assert_eq!(report.drawdown.recovery_date, None);
    assert_eq!(report.drawdown.history.len(), 5);

    assert_eq!(report.streaks.current_win_streak, 1);
    assert_eq!(report.streaks.current_loss_streak, 0);
    assert_eq!(report.streaks.max_win_streak, 1);
    assert_eq!(report.streaks.max_loss_streak, 1);
    assert_eq!(report.streaks.streak_history.len(), 5);

    // Tagged: t1 (+), t2 (+/-), t3 (+), t4 (-); t5 untagged
    let metrics = &report.discipline.metrics;
    assert_eq!(metrics.total_trades, 5);
    assert_eq!(metrics.trades_with_emotions, 4);
    assert_eq!(metrics.positive_trades, 3);
    assert_eq!(metrics.negative_trades, 2);
    assert_eq!(metrics.positive_emotion_percentage, dec!(75));
    assert_eq!(metrics.negative_impact_percentage, dec!(100));
    assert_eq!(metrics.emotion_logging_completeness, dec!(80));
    assert_eq!(metrics.emotion_frequency.get("FOMO"), Some(&1));
    assert_eq!(metrics.emotion_frequency.get("CALM"), Some(&1));
    assert_eq!(report.discipline.band, ScoreBand::NeedsWork);
}

#[test]
fn test_date_range_selection() {
    let file = write_snapshot(SNAPSHOT);
    let source = JsonFileTradeSource::new(file.path());

    let query = TradeQuery::all().between(Some(date(2)), Some(date(3)));
    let trades = source.fetch(&query).unwrap();
    let ids: Vec<&str> = trades.iter().map(|t| t.id.as_str()).collect();

    assert_eq!(ids, ["t2", "b1", "t3"]);
}

#[test]
fn test_per_user_reports() {
    let file = write_snapshot(SNAPSHOT);
    let trades = JsonFileTradeSource::new(file.path())
        .fetch(&TradeQuery::all())
        .unwrap();

    let reports = build_user_reports(&trades);
    let users: Vec<&str> = reports.keys().map(String::as_str).collect();
    assert_eq!(users, ["alice", ANONYMOUS_USER, "bob"]);

    let Some(bob) = reports.get("bob") else {
        panic!("expected a report for bob");
    };
    assert_eq!(bob.drawdown.max_drawdown, dec!(20));
    assert_eq!(bob.streaks.current_loss_streak, 1);
    assert_eq!(bob.discipline.score, dec!(2));

    let Some(anonymous) = reports.get(ANONYMOUS_USER) else {
        panic!("expected a report for unowned trades");
    };
    assert_eq!(anonymous.streaks.neutral_trade_ids, ["n1"]);
    assert_eq!(anonymous.streaks.max_win_streak, 0);
    assert_eq!(anonymous.drawdown.max_drawdown, dec!(0));
}

#[test]
fn test_extreme_pnl_report_degrades() {
    let trades = parse_trades_json(
        r#"[
          {"id": "a", "symbol": "SPY", "market": "STOCK", "side": "BUY", "quantity": 1,
           "pnl": "50000000000000000000000000000", "trade_date": "2024-03-01"},
          {"id": "b", "symbol": "SPY", "market": "STOCK", "side": "BUY", "quantity": 1,
           "pnl": "50000000000000000000000000000", "trade_date": "2024-03-02"},
          {"id": "c", "symbol": "SPY", "market": "STOCK", "side": "SELL", "quantity": 1,
           "pnl": "-0.0000000001", "trade_date": "2024-03-03"}
        ]"#,
    )
    .unwrap();

    let report = PerformanceReport::build(&trades);

    assert_eq!(report.summary.closed_trades, 3);
    assert_eq!(report.summary.profit_factor, None);
    assert_eq!(report.streaks.max_win_streak, 2);
    assert_eq!(report.streaks.current_loss_streak, 1);
    assert_eq!(report.drawdown.history.len(), 3);
    assert!(report.render_text().contains("Profit factor:     N/A"));
}

#[test]
fn test_empty_snapshot_report() {
    let file = write_snapshot("[]");
    let trades = JsonFileTradeSource::new(file.path())
        .fetch(&TradeQuery::all())
        .unwrap();

    let report = PerformanceReport::build(&trades);

    assert_eq!(report.drawdown.max_drawdown, dec!(0));
    assert_eq!(report.drawdown.current_drawdown, dec!(0));
    assert!(report.drawdown.history.is_empty());
    assert_eq!(report.streaks.current_win_streak, 0);
    assert_eq!(report.streaks.max_loss_streak, 0);
    assert!(report.streaks.streak_history.is_empty());
    assert_eq!(report.discipline.score, dec!(2));
    assert_eq!(report.discipline.metrics.positive_emotion_percentage, dec!(0));
}

#[test]
fn test_report_round_trips_through_json() {
    let file = write_snapshot(SNAPSHOT);
    let trades = JsonFileTradeSource::new(file.path())
        .fetch(&TradeQuery::all().for_user("alice"))
        .unwrap();
    let report = PerformanceReport::build(&trades).without_history();

    let json = serde_json::to_string(&report).unwrap();
    let decoded: PerformanceReport = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, report);
    assert!(decoded.drawdown.history.is_empty());
    assert_eq!(decoded.streaks.max_win_streak, 1);
}

#[test]
fn test_text_report_mentions_sections() {
    let file = write_snapshot(SNAPSHOT);
    let trades = JsonFileTradeSource::new(file.path())
        .fetch(&TradeQuery::all().for_user("alice"))
        .unwrap();

    let text = PerformanceReport::build(&trades).render_text();

    assert!(text.contains("Max drawdown:      300.00"));
    assert!(text.contains("Current drawdown:  250.00"));
    assert!(text.contains("Trough date:       2024-03-04"));
    assert!(text.contains("Emotional Discipline"));
}

#[test]
fn test_malformed_record_is_reported_by_index() {
    let file = write_snapshot(r#"[{"id": "x", "symbol": "SPY"}]"#);
    let result = JsonFileTradeSource::new(file.path()).fetch(&TradeQuery::all());

    assert!(matches!(
        result,
        Err(AnalyticsError::InvalidRecord { index: 0, .. })
    ));
}

#[test]
fn test_missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = JsonFileTradeSource::new(dir.path().join("missing.json"));

    assert!(matches!(
        source.fetch(&TradeQuery::all()),
        Err(AnalyticsError::Read { .. })
    ));
}

//! Trade record sources.
//!
//! The journal store owns trade records; analytics only ever reads a fully
//! materialized snapshot. A [`TradeSource`] returns that snapshot already
//! filtered by the query and sorted ascending by trade date.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::AnalyticsError;

use super::query::{TradeQuery, prepare_trades};
use super::trade::Trade;

/// Port for fetching a trade snapshot.
pub trait TradeSource {
    /// Fetch the trades matching `query`, sorted ascending by date.
    fn fetch(&self, query: &TradeQuery) -> Result<Vec<Trade>, AnalyticsError>;
}

/// In-memory trade source.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTradeSource {
    trades: Vec<Trade>,
}

impl InMemoryTradeSource {
    /// Create a source over the given trades.
    #[must_use]
    pub const fn new(trades: Vec<Trade>) -> Self {
        Self { trades }
    }
}

impl TradeSource for InMemoryTradeSource {
    fn fetch(&self, query: &TradeQuery) -> Result<Vec<Trade>, AnalyticsError> {
        Ok(prepare_trades(self.trades.clone(), query))
    }
}

/// Trade source backed by a JSON export of the journal table.
#[derive(Debug, Clone)]
pub struct JsonFileTradeSource {
    path: PathBuf,
}

impl JsonFileTradeSource {
    /// Create a source reading from `path`.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TradeSource for JsonFileTradeSource {
    fn fetch(&self, query: &TradeQuery) -> Result<Vec<Trade>, AnalyticsError> {
        let contents =
            std::fs::read_to_string(&self.path).map_err(|source| AnalyticsError::Read {
                path: self.path.display().to_string(),
                source,
            })?;

        let trades = parse_trades_json(&contents)?;
        let loaded = trades.len();
        let selected = prepare_trades(trades, query);

        tracing::info!(
            path = %self.path.display(),
            loaded,
            selected = selected.len(),
            "Loaded trade snapshot"
        );

        Ok(selected)
    }
}

/// Decode a JSON array of trade records.
///
/// A top level that is not an array fails fast. Each record is decoded
/// independently so a failure names the offending index.
pub fn parse_trades_json(json: &str) -> Result<Vec<Trade>, AnalyticsError> {
    let document: Value = serde_json::from_str(json)?;

    let records = match document {
        Value::Array(records) => records,
        other => {
            return Err(AnalyticsError::NotAnArray {
                found: json_kind(&other),
            });
        }
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record)
                .map_err(|source| AnalyticsError::InvalidRecord { index, source })
        })
        .collect()
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;

    const SNAPSHOT: &str = r#"[
        {"id": "3", "symbol": "AAPL", "market": "STOCK", "side": "BUY", "quantity": 10,
         "pnl": -40, "trade_date": "2024-01-03", "emotional_state": "fomo"},
        {"id": "1", "symbol": "AAPL", "market": "STOCK", "side": "BUY", "quantity": 10,
         "pnl": 100, "trade_date": "2024-01-01", "emotional_state": ["calm"]},
        {"id": "2", "symbol": "ETH", "market": "CRYPTO", "side": "SELL", "quantity": 2,
         "trade_date": "2024-01-02"}
    ]"#;

    #[test]
    fn test_parse_array() {
        let trades = parse_trades_json(SNAPSHOT).expect("valid snapshot");
        assert_eq!(trades.len(), 3);
        assert_eq!(trades[0].pnl, Some(dec!(-40)));
        assert_eq!(trades[2].pnl, None);
    }

    #[test]
    fn test_non_array_fails_fast() {
        let err = parse_trades_json(r#"{"id": "1"}"#).expect_err("object must be rejected");
        assert!(matches!(err, AnalyticsError::NotAnArray { found: "object" }));
    }

    #[test]
    fn test_malformed_record_reports_index() {
        let json = r#"[
            {"id": "1", "symbol": "X", "market": "STOCK", "side": "BUY", "quantity": 1, "trade_date": "2024-01-01"},
            {"id": "2", "symbol": "X", "market": "STOCK", "side": "BUY", "quantity": 1}
        ]"#;
        let err = parse_trades_json(json).expect_err("missing date must be rejected");
        let AnalyticsError::InvalidRecord { index, .. } = &err else {
            panic!("expected InvalidRecord, got {err}");
        };
        assert_eq!(*index, 1);
    }

    #[test]
    fn test_file_source_sorts_and_filters() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(SNAPSHOT.as_bytes()).expect("write snapshot");

        let source = JsonFileTradeSource::new(file.path());
        assert_eq!(source.path(), file.path());
        let query = TradeQuery::all().between(
            NaiveDate::from_ymd_opt(2024, 1, 1),
            NaiveDate::from_ymd_opt(2024, 1, 2),
        );
        let trades = source.fetch(&query).expect("fetch");
        let ids: Vec<&str> = trades.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let source = JsonFileTradeSource::new("/nonexistent/trades.json");
        let err = source.fetch(&TradeQuery::all()).expect_err("missing file");
        assert!(matches!(err, AnalyticsError::Read { .. }));
    }

    #[test]
    fn test_in_memory_source_sorts() {
        let d = |day| NaiveDate::from_ymd_opt(2024, 2, day).expect("date");
        let source = InMemoryTradeSource::new(vec![
            Trade::new("b", "X", d(2)),
            Trade::new("a", "X", d(1)),
        ]);
        let trades = source.fetch(&TradeQuery::all()).expect("fetch");
        assert_eq!(trades[0].id, "a");
    }
}

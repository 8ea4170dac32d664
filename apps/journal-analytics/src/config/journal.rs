//! Trade snapshot selection configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::journal::TradeQuery;

/// Where to read trades from and which of them to analyze.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Path to a JSON export of the trades table.
    pub trades_path: String,
    /// Restrict analysis to one user.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Earliest trade date to include.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Latest trade date to include.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl JournalConfig {
    /// Build the trade query described by this configuration.
    #[must_use]
    pub fn query(&self) -> TradeQuery {
        TradeQuery {
            user_id: self.user_id.clone().filter(|u| !u.is_empty()),
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

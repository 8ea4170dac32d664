//! Report output configuration.

use serde::{Deserialize, Serialize};

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// Plain-text console report.
    Text,
}

/// Report output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format.
    #[serde(default)]
    pub format: ReportFormat,
    /// Include the drawdown curve and streak segments.
    #[serde(default = "default_true")]
    pub include_history: bool,
    /// Build one report per user instead of one for the whole snapshot.
    #[serde(default)]
    pub per_user: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            include_history: true,
            per_user: false,
        }
    }
}

pub(super) const fn default_true() -> bool {
    true
}

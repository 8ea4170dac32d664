//! Formatting utilities for analytics display.

use rust_decimal::Decimal;

/// Format a 0-100 percentage with 2 decimal places.
#[must_use]
pub fn format_pct(value: Decimal) -> String {
    format!("{:.2}%", value.round_dp(2))
}

/// Format a decimal with 2 decimal places.
#[must_use]
pub fn format_decimal(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

/// Format an optional decimal ratio.
#[must_use]
pub fn format_ratio(value: Option<Decimal>) -> String {
    value.map_or_else(|| "N/A".to_string(), format_decimal)
}

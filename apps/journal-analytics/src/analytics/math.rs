//! Ratio helpers shared by the calculators.

use rust_decimal::Decimal;

use super::constants::HUNDRED;

/// `part / whole * 100`, or zero when `whole` is zero.
pub fn percentage(part: u64, whole: u64) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(part) * HUNDRED / Decimal::from(whole)
}

/// Decimal average, or zero for an empty count.
pub fn average(total: Decimal, count: u64) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    total / Decimal::from(count)
}

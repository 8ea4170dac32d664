//! Decimal constants for analytics calculations.

use rust_decimal::Decimal;

pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;
pub const TEN: Decimal = Decimal::TEN;

// Emotional discipline band thresholds (percent)
pub const THIRTY: Decimal = Decimal::from_parts(30, 0, 0, false, 0);
pub const FIFTY: Decimal = Decimal::from_parts(50, 0, 0, false, 0);
pub const SEVENTY: Decimal = Decimal::from_parts(70, 0, 0, false, 0);
pub const NINETY: Decimal = Decimal::from_parts(90, 0, 0, false, 0);
pub const TWENTY: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Width of each graded band on the positive-percentage axis.
pub const BAND_WIDTH: Decimal = TWENTY;
/// Score range covered inside one graded band.
pub const BAND_SPAN: Decimal = Decimal::from_parts(19, 0, 0, false, 1); // 1.9
/// Correlation above which the win-correlation bonus applies.
pub const BONUS_THRESHOLD: Decimal = SEVENTY;

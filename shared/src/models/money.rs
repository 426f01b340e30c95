//! Money bounds
//!
//! Every stored amount (stock price and total, report amount) is a
//! `NUMERIC(14, 2)` column.

use rust_decimal::Decimal;

/// Digits kept after the decimal point
pub const DECIMAL_PLACES: u32 = 2;

/// 999999999999.99, the largest value a `NUMERIC(14, 2)` column holds
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(276_447_231, 23_283, 0, false, DECIMAL_PLACES);

/// True when `value` is stored exactly, without rounding or overflow
pub fn is_storable(value: Decimal) -> bool {
    value.normalize().scale() <= DECIMAL_PLACES && value.abs() <= MAX_AMOUNT
}

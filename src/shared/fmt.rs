//! Display formatting for prices and PnL.
//!
//! Table cells show two decimal places; aggregation arithmetic keeps full
//! `Decimal` precision and only the display layer rounds.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a `Decimal` with exactly two decimal places (`100` → `"100.00"`).
///
/// Rounds midpoints away from zero, matching the rounding the original
/// display layer used.
pub fn two_dp(value: &Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

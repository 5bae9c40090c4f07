//! Position domain — open holdings as reported by the backend.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::{Symbol, Underlying};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An open holding in a symbol.
///
/// Read-only from the SDK's perspective: the backend owns position
/// lifecycle, and the full list is replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: i64,
    pub symbol: Symbol,
    pub quantity: i64,
    pub average_price: Decimal,
}

impl Position {
    /// Profit and loss against a reference price.
    ///
    /// `(quote − average_price) × quantity`. While the quote is unresolved
    /// the position's own average price is substituted, yielding zero.
    pub fn pnl(&self, quote: Option<Decimal>) -> Decimal {
        let ltp = quote.unwrap_or(self.average_price);
        (ltp - self.average_price) * Decimal::from(self.quantity)
    }

    /// The grouping key for this position.
    pub fn underlying(&self) -> Underlying {
        self.symbol.underlying()
    }
}

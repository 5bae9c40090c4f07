//! Trade domain — trade submission and created-trade records.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::error::SdkError;
use crate::shared::{Side, Symbol};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A trade to submit.
///
/// Immutable once sent; there is no idempotency key, so re-submitting after
/// a failure is a brand-new creation attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTrade {
    pub symbol: Symbol,
    pub quantity: i64,
    pub price: Decimal,
    pub side: Side,
}

impl NewTrade {
    /// Build a trade submission. Validation is presence-only: a blank
    /// symbol is rejected, everything else is the backend's problem.
    pub fn new(
        symbol: impl Into<Symbol>,
        quantity: i64,
        price: Decimal,
        side: Side,
    ) -> Result<Self, SdkError> {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return Err(SdkError::Validation("symbol is required".to_string()));
        }
        Ok(Self {
            symbol,
            quantity,
            price,
            side,
        })
    }
}

/// A created trade as echoed by the backend, with the server-assigned id
/// and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: i64,
    pub symbol: Symbol,
    pub quantity: i64,
    pub price: Decimal,
    pub side: Side,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_trade_accepts_populated_fields() {
        let trade = NewTrade::new("RELIANCE", 10, dec!(2950.5), Side::Buy).unwrap();
        assert_eq!(trade.symbol.as_str(), "RELIANCE");
        assert_eq!(trade.quantity, 10);
        assert_eq!(trade.side, Side::Buy);
    }

    #[test]
    fn test_new_trade_rejects_blank_symbol() {
        let err = NewTrade::new("", 10, dec!(100), Side::Buy).unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));

        let err = NewTrade::new("   ", 10, dec!(100), Side::Sell).unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }
}

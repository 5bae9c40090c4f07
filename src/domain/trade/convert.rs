//! Conversions between domain and wire types for trades.

use super::wire::{CreateTradeRequest, TradeResponse};
use super::{NewTrade, Trade};
use crate::shared::Symbol;

impl From<&NewTrade> for CreateTradeRequest {
    fn from(t: &NewTrade) -> Self {
        Self {
            symbol: t.symbol.to_string(),
            quantity: t.quantity,
            price: t.price,
            trade_type: t.side,
        }
    }
}

impl From<TradeResponse> for Trade {
    fn from(t: TradeResponse) -> Self {
        Self {
            id: t.id,
            symbol: Symbol::from(t.symbol),
            quantity: t.quantity,
            price: t.price,
            side: t.trade_type,
            timestamp: t.timestamp,
        }
    }
}

//! Conversions from wire types to domain types for positions.

use super::wire::PositionResponse;
use super::Position;
use crate::shared::Symbol;

impl From<PositionResponse> for Position {
    fn from(p: PositionResponse) -> Self {
        Self {
            id: p.id,
            symbol: Symbol::from(p.symbol),
            quantity: p.quantity,
            average_price: p.average_price,
        }
    }
}

//! Wire types for position responses (REST).
//!
//! `GET /positions/` returns a bare JSON array of these rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single position row from the REST API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PositionResponse {
    pub id: i64,
    pub symbol: String,
    pub quantity: i64,
    pub average_price: Decimal,
}

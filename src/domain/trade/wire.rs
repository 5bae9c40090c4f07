//! Wire types for trade requests and responses (REST).

use crate::shared::Side;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// REST request body for `POST /trades/`.
///
/// The backend calls the side field `trade_type` with values
/// `"buy"` / `"sell"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTradeRequest {
    pub symbol: String,
    pub quantity: i64,
    pub price: Decimal,
    pub trade_type: Side,
}

/// REST response for a created trade.
///
/// The timestamp may arrive naive (SQLite-backed deployments) or with an
/// offset (Postgres); both parse, naive being read as UTC.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeResponse {
    pub id: i64,
    pub symbol: String,
    pub quantity: i64,
    pub price: Decimal,
    pub trade_type: Side,
    #[serde(deserialize_with = "crate::shared::serde_util::timestamp_utc_or_naive::deserialize")]
    pub timestamp: DateTime<Utc>,
}

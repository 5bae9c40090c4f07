//! # Algotrade SDK
//!
//! A typed Rust client for the algo-trade paper-trading API: trade
//! submission, position queries, and portfolio PnL aggregation.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, aggregation logic (no I/O)
//! 2. **Quote** — `PriceSource` capability trait + mock implementation
//! 3. **HTTP API** — `ApiHttp` with per-endpoint retry policies
//! 4. **High-Level Client** — `TradingClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use algotrade_sdk::prelude::*;
//!
//! let client = TradingClient::builder()
//!     .base_url("http://127.0.0.1:8000")
//!     .build()?;
//!
//! let mut state = PortfolioState::new();
//! client.portfolio().refresh(&mut state).await?;
//! let view = state.view();
//! println!("total PnL: {}", two_dp(&view.total_pnl));
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Quote ───────────────────────────────────────────────────────────

/// Price sources: the `PriceSource` capability trait and the mock resolver.
pub mod quote;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `TradingClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::fmt::two_dp;
    pub use crate::shared::{Side, Symbol, Underlying};

    // Domain types — position
    pub use crate::domain::position::Position;

    // Domain types — trade
    pub use crate::domain::trade::{NewTrade, Trade};

    // Domain types — portfolio
    pub use crate::domain::portfolio::{
        PortfolioState, PortfolioView, PositionRow, UnderlyingGroup,
    };

    // Quote layer
    pub use crate::quote::{MockPriceSource, PriceSource};

    // Errors
    pub use crate::error::{HttpError, QuoteError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        PortfolioClient, PositionsClient, TradesClient, TradingClient, TradingClientBuilder,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}

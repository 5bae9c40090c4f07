//! High-level client — `TradingClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the injected price source, and the
//! accessor methods.

use crate::domain::portfolio::client::Portfolio;
use crate::domain::position::client::Positions;
use crate::domain::trade::client::Trades;
use crate::error::SdkError;
use crate::http::ApiHttp;
use crate::quote::{MockPriceSource, PriceSource};

use std::sync::Arc;

// Re-export sub-client types for convenience.
pub use crate::domain::portfolio::client::Portfolio as PortfolioClient;
pub use crate::domain::position::client::Positions as PositionsClient;
pub use crate::domain::trade::client::Trades as TradesClient;

/// The primary entry point for the Algotrade SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.positions()`, `client.trades()`, `client.portfolio()`.
pub struct TradingClient {
    pub(crate) http: ApiHttp,
    /// Injected quote capability; defaults to the mock resolver.
    pub(crate) price_source: Arc<dyn PriceSource>,
}

impl TradingClient {
    pub fn builder() -> TradingClientBuilder {
        TradingClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn positions(&self) -> Positions<'_> {
        Positions { client: self }
    }

    pub fn trades(&self) -> Trades<'_> {
        Trades { client: self }
    }

    pub fn portfolio(&self) -> Portfolio<'_> {
        Portfolio { client: self }
    }
}

impl Clone for TradingClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            price_source: self.price_source.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct TradingClientBuilder {
    base_url: String,
    price_source: Option<Arc<dyn PriceSource>>,
}

impl Default for TradingClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            price_source: None,
        }
    }
}

impl TradingClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Inject a price source (a real market-data client). When omitted,
    /// [`MockPriceSource`] stands in.
    pub fn price_source(mut self, source: Arc<dyn PriceSource>) -> Self {
        self.price_source = Some(source);
        self
    }

    pub fn build(self) -> Result<TradingClient, SdkError> {
        Ok(TradingClient {
            http: ApiHttp::new(&self.base_url)?,
            price_source: self
                .price_source
                .unwrap_or_else(|| Arc::new(MockPriceSource::default())),
        })
    }
}

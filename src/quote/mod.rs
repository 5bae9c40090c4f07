//! Price sources — the capability the portfolio layer uses to resolve a
//! reference price (LTP) per symbol.
//!
//! The aggregation core never talks to a price source directly; resolution
//! happens in the portfolio sub-client and resolved quotes are merged into
//! [`PortfolioState`](crate::domain::portfolio::PortfolioState). This keeps
//! the PnL arithmetic testable without network or randomness.

pub mod mock;

pub use mock::MockPriceSource;

use crate::error::QuoteError;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// A source of current reference prices, injected into the client.
///
/// The only contract: given a symbol, asynchronously yield a current
/// numeric price or fail. A real implementation would wrap a market-data
/// API; [`MockPriceSource`] stands in until one exists.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn quote(&self, symbol: &str) -> Result<Decimal, QuoteError>;
}

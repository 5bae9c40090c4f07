//! Mock price source — uniform random prices with artificial latency.

use crate::error::QuoteError;
use crate::quote::PriceSource;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::time::Duration;

/// Stand-in price source returning a uniform random price in `[50, 150)`
/// after an artificial delay.
///
/// Matches the placeholder LTP resolver in the original front-end: a real
/// deployment swaps this for a market-data client implementing
/// [`PriceSource`].
#[derive(Debug, Clone)]
pub struct MockPriceSource {
    latency: Duration,
}

impl MockPriceSource {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Zero-latency variant for tests.
    pub fn instant() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }
}

impl Default for MockPriceSource {
    fn default() -> Self {
        // 200ms, the delay the original stub simulated.
        Self::new(Duration::from_millis(200))
    }
}

#[async_trait]
impl PriceSource for MockPriceSource {
    async fn quote(&self, symbol: &str) -> Result<Decimal, QuoteError> {
        tracing::debug!(symbol, "resolving mock LTP");
        if !self.latency.is_zero() {
            futures_timer::Delay::new(self.latency).await;
        }

        let price = rand::random::<f64>() * 100.0 + 50.0;
        Decimal::from_f64_retain(price)
            .ok_or_else(|| QuoteError::Source(format!("unrepresentable price {}", price)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_mock_quote_in_range() {
        let source = MockPriceSource::instant();
        for _ in 0..100 {
            let price = source.quote("NIFTY").await.unwrap();
            assert!(price >= dec!(50), "price below range: {}", price);
            assert!(price < dec!(150), "price above range: {}", price);
        }
    }

    #[tokio::test]
    async fn test_mock_respects_latency() {
        let source = MockPriceSource::new(Duration::from_millis(20));
        let start = std::time::Instant::now();
        source.quote("TCS").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}

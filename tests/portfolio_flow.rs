//! Integration tests for the portfolio flow: quote resolution, grouping,
//! and PnL aggregation through the high-level client.
//!
//! Quote resolution runs against scripted price sources, so these tests
//! need no network. The tests that exercise the REST endpoints are
//! `#[ignore]` because they require a running paper-trading backend.
//!
//! Run the live tests with:
//! ```bash
//! cargo test --test portfolio_flow -- --ignored
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use algotrade_sdk::prelude::*;

/// Price source answering from a fixed table, counting lookups.
struct ScriptedPriceSource {
    prices: HashMap<String, Decimal>,
    calls: AtomicUsize,
}

impl ScriptedPriceSource {
    fn new(prices: &[(&str, Decimal)]) -> Self {
        Self {
            prices: prices
                .iter()
                .map(|(s, p)| (s.to_string(), *p))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceSource for ScriptedPriceSource {
    async fn quote(&self, symbol: &str) -> Result<Decimal, QuoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prices
            .get(symbol)
            .copied()
            .ok_or_else(|| QuoteError::Unavailable(symbol.to_string()))
    }
}

fn position(id: i64, symbol: &str, quantity: i64, average_price: Decimal) -> Position {
    Position {
        id,
        symbol: Symbol::from(symbol),
        quantity,
        average_price,
    }
}

fn client_with(source: Arc<dyn PriceSource>) -> TradingClient {
    TradingClient::builder()
        .price_source(source)
        .build()
        .expect("client should build")
}

#[tokio::test]
async fn resolve_quotes_merges_scripted_prices_and_aggregates() {
    let source = Arc::new(ScriptedPriceSource::new(&[
        ("NIFTY 25JUL24 23500 CE", dec!(130)),
        ("NIFTY 25JUL24 23000 PE", dec!(70)),
        ("RELIANCE", dec!(2950)),
    ]));
    let client = client_with(source.clone());

    let mut state = PortfolioState::new();
    state.replace_positions(vec![
        position(1, "NIFTY 25JUL24 23500 CE", 50, dec!(120)),
        position(2, "RELIANCE", 10, dec!(2900)),
        position(3, "NIFTY 25JUL24 23000 PE", 25, dec!(80)),
    ]);

    client.portfolio().resolve_quotes(&mut state).await;
    let view = state.view();

    assert_eq!(view.groups.len(), 2);
    let nifty = &view.groups[0];
    assert_eq!(nifty.underlying.as_str(), "NIFTY");
    // (130-120)*50 + (70-80)*25
    assert_eq!(nifty.pnl, dec!(250));
    assert_eq!(view.groups[1].pnl, dec!(500));
    assert_eq!(view.total_pnl, dec!(750));
    assert_eq!(view.total_pnl_display(), "750.00");
    assert_eq!(source.calls(), 3);
}

#[tokio::test]
async fn failed_quote_leaves_row_pending_and_others_resolved() {
    let source = Arc::new(ScriptedPriceSource::new(&[("TCS", dec!(3600))]));
    let client = client_with(source);

    let mut state = PortfolioState::new();
    state.replace_positions(vec![
        position(1, "TCS", 10, dec!(3500)),
        position(2, "UNKNOWN", 5, dec!(100)),
    ]);

    client.portfolio().resolve_quotes(&mut state).await;
    let view = state.view();

    let tcs = &view.groups[0].rows[0];
    assert_eq!(tcs.pnl, dec!(1000));
    assert_eq!(tcs.pnl_display(), "1000.00");

    let unknown = &view.groups[1].rows[0];
    assert_eq!(unknown.quote, None);
    assert_eq!(unknown.ltp_display(), "Fetching...");
    assert_eq!(unknown.pnl_display(), "Calculating...");
    assert_eq!(unknown.pnl, dec!(0));

    // The failed symbol stays unresolved for the next pass.
    assert_eq!(state.unresolved_symbols().len(), 1);
}

#[tokio::test]
async fn cached_quote_is_reused_across_refetches() {
    let source = Arc::new(ScriptedPriceSource::new(&[("TCS", dec!(3600))]));
    let client = client_with(source.clone());

    let mut state = PortfolioState::new();
    state.replace_positions(vec![position(1, "TCS", 10, dec!(3500))]);
    client.portfolio().resolve_quotes(&mut state).await;
    assert_eq!(source.calls(), 1);

    // A re-fetch reintroducing the same symbol issues no new resolution.
    state.replace_positions(vec![position(1, "TCS", 10, dec!(3500))]);
    client.portfolio().resolve_quotes(&mut state).await;
    assert_eq!(source.calls(), 1);

    // Until the app explicitly invalidates.
    state.clear_quotes();
    client.portfolio().resolve_quotes(&mut state).await;
    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn mock_source_resolves_every_symbol_in_range() {
    let client = client_with(Arc::new(MockPriceSource::instant()));

    let mut state = PortfolioState::new();
    state.replace_positions(vec![
        position(1, "NIFTY 25JUL24 23500 CE", 50, dec!(120)),
        position(2, "RELIANCE", 10, dec!(2900)),
    ]);
    client.portfolio().resolve_quotes(&mut state).await;

    for group in &state.view().groups {
        for row in &group.rows {
            let quote = row.quote.expect("mock should resolve every symbol");
            assert!(quote >= dec!(50) && quote < dec!(150));
        }
    }
}

#[tokio::test]
async fn failed_refresh_leaves_state_untouched() {
    // Nothing listens on the discard port; the fetch fails after the
    // transport retries are exhausted.
    let client = TradingClient::builder()
        .base_url("http://127.0.0.1:9")
        .price_source(Arc::new(MockPriceSource::instant()))
        .build()
        .unwrap();

    let mut state = PortfolioState::new();
    state.replace_positions(vec![position(1, "TCS", 10, dec!(3500))]);

    let err = client.portfolio().refresh(&mut state).await.unwrap_err();
    assert!(matches!(err, SdkError::Http(_)));

    // The stale list stays displayed.
    assert_eq!(state.positions().len(), 1);
    assert_eq!(state.positions()[0].symbol.as_str(), "TCS");
}

// ── Live backend tests ───────────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn live_refresh_replaces_positions_wholesale() {
    let client = TradingClient::builder()
        .base_url(DEFAULT_API_URL)
        .build()
        .unwrap();

    let mut state = PortfolioState::new();
    client
        .portfolio()
        .refresh(&mut state)
        .await
        .expect("refresh should succeed against a running backend");

    let view = state.view();
    let row_count: usize = view.groups.iter().map(|g| g.rows.len()).sum();
    assert_eq!(row_count, state.positions().len());
}

#[tokio::test]
#[ignore]
async fn live_submit_creates_trade_and_refreshes() {
    let client = TradingClient::builder()
        .base_url(DEFAULT_API_URL)
        .build()
        .unwrap();

    let mut state = PortfolioState::new();
    let trade = NewTrade::new("SDKTEST", 1, dec!(100), Side::Buy).unwrap();
    let created = client
        .portfolio()
        .submit(&trade, &mut state)
        .await
        .expect("submit should succeed against a running backend");

    assert_eq!(created.symbol.as_str(), "SDKTEST");
    assert!(state
        .positions()
        .iter()
        .any(|p| p.symbol.as_str() == "SDKTEST"));
}

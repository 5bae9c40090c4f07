//! Portfolio sub-client — the fetch → resolve → aggregate control flow.

use crate::client::TradingClient;
use crate::domain::portfolio::PortfolioState;
use crate::domain::trade::{NewTrade, Trade};
use crate::error::SdkError;

pub struct Portfolio<'a> {
    pub(crate) client: &'a TradingClient,
}

impl<'a> Portfolio<'a> {
    /// Fetch the position list, replace the state wholesale, then resolve
    /// quotes for any symbols the cache doesn't cover.
    ///
    /// On fetch failure the state is left untouched — a previously
    /// displayed list stays up, stale — and the error propagates for the
    /// app to surface.
    pub async fn refresh(&self, state: &mut PortfolioState) -> Result<(), SdkError> {
        let positions = self.client.positions().list(None, None).await?;
        tracing::debug!(count = positions.len(), "replacing position list");
        state.replace_positions(positions);
        self.resolve_quotes(state).await;
        Ok(())
    }

    /// Resolve quotes for every unresolved symbol in the current list,
    /// one at a time, merging each into the cache as it arrives.
    ///
    /// A failed resolution is logged and skipped: the row keeps its
    /// average-price fallback and shows as pending until a later pass
    /// succeeds.
    pub async fn resolve_quotes(&self, state: &mut PortfolioState) {
        for symbol in state.unresolved_symbols() {
            match self.client.price_source.quote(symbol.as_str()).await {
                Ok(price) => state.merge_quote(symbol, price),
                Err(e) => {
                    tracing::warn!(symbol = %symbol, error = %e, "quote resolution failed");
                }
            }
        }
    }

    /// Submit a trade, then refresh the portfolio — the form's submit path.
    ///
    /// Exactly one refresh per successful submission. On submission failure
    /// the state is untouched and no refresh happens, so the caller can
    /// surface the error and retry with the same inputs.
    pub async fn submit(
        &self,
        trade: &NewTrade,
        state: &mut PortfolioState,
    ) -> Result<Trade, SdkError> {
        let created = self.client.trades().create(trade).await?;
        tracing::debug!(id = created.id, symbol = %created.symbol, "trade created");
        self.refresh(state).await?;
        Ok(created)
    }
}

//! Trades sub-client — trade creation.

use crate::client::TradingClient;
use crate::domain::trade::wire::{CreateTradeRequest, TradeResponse};
use crate::domain::trade::{NewTrade, Trade};
use crate::error::SdkError;
use crate::http::RetryPolicy;

pub struct Trades<'a> {
    pub(crate) client: &'a TradingClient,
}

impl<'a> Trades<'a> {
    /// Submit a trade to the backend.
    ///
    /// Never retried: a resubmission after failure is a new, independent
    /// trade. Backend rejections (e.g. selling more than the open quantity)
    /// come back as `HttpError::BadRequest`.
    pub async fn create(&self, trade: &NewTrade) -> Result<Trade, SdkError> {
        let url = format!("{}/trades/", self.client.http.base_url());
        let request = CreateTradeRequest::from(trade);

        let resp: TradeResponse = self
            .client
            .http
            .post(&url, &request, RetryPolicy::None)
            .await?;

        Ok(resp.into())
    }
}

//! Positions sub-client — open position queries.

use crate::client::TradingClient;
use crate::domain::position::wire::PositionResponse;
use crate::domain::position::Position;
use crate::error::SdkError;
use crate::http::RetryPolicy;

pub struct Positions<'a> {
    pub(crate) client: &'a TradingClient,
}

impl<'a> Positions<'a> {
    /// Get the full open position list.
    ///
    /// `skip`/`limit` map to the backend's offset pagination; pass `None`
    /// for both to use the backend defaults (all rows up to 100).
    pub async fn list(
        &self,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Vec<Position>, SdkError> {
        let mut url = format!("{}/positions/", self.client.http.base_url());
        let mut params = Vec::new();
        if let Some(s) = skip {
            params.push(format!("skip={}", s));
        }
        if let Some(l) = limit {
            params.push(format!("limit={}", l));
        }
        if !params.is_empty() {
            url = format!("{}?{}", url, params.join("&"));
        }

        let rows: Vec<PositionResponse> = self
            .client
            .http
            .get(&url, RetryPolicy::Idempotent)
            .await?;

        Ok(rows.into_iter().map(Position::from).collect())
    }
}

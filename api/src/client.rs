//! HTTP client for the wallet history backend.

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::form::HistoryRequest;
use crate::history::HistoryItem;

/// Path of the history endpoint, relative to the backend base URL.
pub const WALLET_HISTORY_PATH: &str = "/wallet-history/";

/// Issues `POST /wallet-history/` requests.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct HistoryClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HistoryClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint(WALLET_HISTORY_PATH),
        }
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches the transaction history described by `request`.
    ///
    /// Non-2xx responses become [`ApiError::Server`] carrying whatever message
    /// the backend put in the body.
    pub async fn wallet_history(
        &self,
        request: &HistoryRequest,
    ) -> Result<Vec<HistoryItem>, ApiError> {
        dioxus_logger::tracing::debug!(
            "POST {} limit={} network={}",
            self.endpoint,
            request.limit,
            request.network
        );

        let response = self.http.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

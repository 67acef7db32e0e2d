use crate::Result;

/// The external quote feed the relay forwards to.
pub const QUOTES_URL: &str = "https://ron-swanson-quotes.herokuapp.com/v2/quotes";

/// Thin HTTP client for the quote feed. The response body is relayed verbatim.
#[derive(Clone)]
pub struct QuoteClient {
    client: reqwest::Client,
    base_url: String,
}

impl QuoteClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: QUOTES_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint. Used by tests.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Fetch the raw text body from the quote feed.
    ///
    /// Non-success statuses are errors; no retry or timeout policy beyond
    /// reqwest defaults.
    pub async fn fetch(&self) -> Result<String> {
        tracing::debug!("Fetching quotes from {}", self.base_url);

        let body = self
            .client
            .get(&self.base_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(body)
    }
}

impl Default for QuoteClient {
    fn default() -> Self {
        Self::new()
    }
}

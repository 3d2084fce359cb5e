//! Async HTTP fetcher wrapping reqwest.
//!
//! One attempt per call; fallback decisions belong to callers. The client
//! sends a realistic browser user-agent because the scraped sites serve
//! different markup (or nothing at all) to obviously automated clients.

use crate::model::LookupError;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// HTTP client shared by all source adapters.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a new client with a standard Chrome user-agent.
    pub fn new(timeout_ms: u64) -> Self {
        let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                  AppleWebKit/537.36 (KHTML, like Gecko) \
                  Chrome/131.0.0.0 Safari/537.36";

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(ua)
            .build()
            .unwrap_or_default();

        Self { client }
    }

    /// GET a URL and return the response body as text.
    ///
    /// Non-2xx statuses are errors carrying the URL and status code.
    pub async fn get_text(&self, url: &Url) -> Result<String, LookupError> {
        let resp = self.send(url).await?;
        resp.text().await.map_err(|source| LookupError::Transport {
            url: url.to_string(),
            source,
        })
    }

    /// GET a URL and decode the response body as JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, LookupError> {
        let resp = self.send(url).await?;
        resp.json().await.map_err(|e| LookupError::Parse {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    async fn send(&self, url: &Url) -> Result<reqwest::Response, LookupError> {
        let resp = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|source| LookupError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT_MS)
    }
}

//! HTTP client for fetching store pages.

use std::time::Duration;

use crate::{user_agent::get_user_agent, Error};

/// Fetches listing and detail pages from the store host. Cheap to clone;
/// clones share the underlying connection pool, which is what lets one
/// client serve every concurrent detail fetch.
#[derive(Clone)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client pointing at the production Play Store host.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url("https://play.google.com")
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches a page and returns its body as text.
    pub async fn fetch_html(&self, url: &str) -> Result<String, Error> {
        let resp = self
            .http
            .get(url)
            .header("accept", "text/html,application/xhtml+xml")
            .header("accept-language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("failed to fetch {}: {}", url, e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::error!("request to {} failed with status {}", url, status);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }

        resp.text().await.map_err(|e| {
            tracing::error!("failed to read body of {}: {}", url, e);
            Error::RequestFailed
        })
    }
}

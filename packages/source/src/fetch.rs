//! Document fetch capability.
//!
//! Strategies consume fetching through the [`Fetch`] trait so tests can
//! substitute canned pages for live HTTP. The real implementation,
//! [`HttpFetcher`], wraps a [`reqwest::Client`] configured with the shared
//! user-agent and request timeout.

use std::time::Duration;

use async_trait::async_trait;

use crate::SourceError;
use crate::settings::ScrapeSettings;

/// Fetches a document body by absolute URL.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetches the page at `url` and returns its body.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the request fails or the server answers
    /// with a non-success status.
    async fn get(&self, url: &str) -> Result<String, SourceError>;
}

/// [`Fetch`] implementation backed by a real HTTP client.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Builds a fetcher with the configured user-agent and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the client cannot be constructed.
    pub fn new(settings: &ScrapeSettings) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn get(&self, url: &str) -> Result<String, SourceError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_owned(),
                status,
            });
        }
        Ok(response.text().await?)
    }
}

// src/fetch/http.rs

//! HTTP implementation of the page fetcher.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::error::Result;
use crate::fetch::PageFetcher;
use crate::models::HttpConfig;

/// Fetcher backed by a configured reqwest client.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with user agent and timeout from config.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &Url) -> Result<String> {
        let response = self.client.get(url.clone()).send().await?;
        let text = response.error_for_status()?.text().await?;
        Ok(text)
    }
}

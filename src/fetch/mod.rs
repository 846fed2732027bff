// src/fetch/mod.rs

//! Page fetching abstraction.
//!
//! Both sources (the song catalog and the video search results) are
//! fetched through the narrow [`PageFetcher`] trait, so the pipeline can
//! run against fixture documents in tests.

pub mod http;

use async_trait::async_trait;
use url::Url;

use crate::error::Result;

// Re-export for convenience
pub use http::HttpFetcher;

/// Trait for fetching a document body from a URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the body of `url` as text.
    ///
    /// A network failure or a non-success status is an error; no retry
    /// is attempted.
    async fn fetch_text(&self, url: &Url) -> Result<String>;
}

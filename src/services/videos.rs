// src/services/videos.rs

//! Video search service.
//!
//! Queries the results page of the video site for a song title and
//! extracts candidate video identifiers from the raw response body.

use regex::Regex;
use url::Url;

use crate::error::{AppError, Result};
use crate::fetch::PageFetcher;
use crate::models::SearchConfig;

/// Service for finding video identifiers matching a song title.
pub struct VideoSearch {
    base_url: String,
    query_param: String,
    query_prefix: String,
    id_pattern: Regex,
    watch_url_template: String,
}

impl VideoSearch {
    /// Create a new video search service from configuration.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let id_pattern =
            Regex::new(&config.id_pattern).map_err(|e| AppError::pattern(&config.id_pattern, e))?;
        Ok(Self {
            base_url: config.base_url.clone(),
            query_param: config.query_param.clone(),
            query_prefix: config.query_prefix.clone(),
            id_pattern,
            watch_url_template: config.watch_url_template.clone(),
        })
    }

    /// Build the results-page URL for a song title.
    ///
    /// The query is the configured prefix plus the title; form encoding
    /// turns whitespace into `+`.
    pub fn search_url(&self, title: &str) -> Result<Url> {
        let query = if self.query_prefix.is_empty() {
            title.to_string()
        } else {
            format!("{} {}", self.query_prefix, title)
        };
        let url = Url::parse_with_params(
            &self.base_url,
            &[(self.query_param.as_str(), query.as_str())],
        )?;
        Ok(url)
    }

    /// Fetch the results page for a title and extract all video ids.
    ///
    /// Zero matches is an error.
    pub async fn find_videos(&self, fetcher: &dyn PageFetcher, title: &str) -> Result<Vec<String>> {
        let url = self.search_url(title)?;
        let body = fetcher.fetch_text(&url).await?;

        let ids = self.extract_ids(&body);
        if ids.is_empty() {
            return Err(AppError::empty_result(format!(
                "video search for '{title}'"
            )));
        }
        Ok(ids)
    }

    /// Extract every identifier matching the configured pattern.
    ///
    /// The body is scanned as raw text, not parsed as a DOM. Matches come
    /// back in document order, duplicates preserved.
    pub fn extract_ids(&self, body: &str) -> Vec<String> {
        self.id_pattern
            .captures_iter(body)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }

    /// Build the watch URL for a video identifier.
    pub fn watch_url(&self, id: &str) -> String {
        self.watch_url_template.replace("{id}", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search() -> VideoSearch {
        VideoSearch::new(&SearchConfig::default()).unwrap()
    }

    #[test]
    fn test_search_url_encodes_query() {
        let url = search().search_url("Forty Six & 2").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.youtube.com/results?search_query=TOOL+Forty+Six+%26+2"
        );
    }

    #[test]
    fn test_search_url_without_prefix() {
        let service = VideoSearch::new(&SearchConfig {
            query_prefix: String::new(),
            ..SearchConfig::default()
        })
        .unwrap();
        let url = service.search_url("Schism").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.youtube.com/results?search_query=Schism"
        );
    }

    #[test]
    fn test_extract_ids_in_document_order() {
        let body = r#"
            <a href="/watch?v=abc12345678">first</a>
            var x = {"url":"/watch?v=xyz98765432"};
            <a href="/watch?v=abc12345678">again</a>
        "#;
        let ids = search().extract_ids(body);
        assert_eq!(ids, vec!["abc12345678", "xyz98765432", "abc12345678"]);
        assert!(ids.iter().all(|id| id.len() == 11));
    }

    #[test]
    fn test_extract_ids_ignores_short_matches() {
        // Ten characters after the marker never match
        let body = "watch?v=abc1234567 watch?v=abcdefghijk";
        let ids = search().extract_ids(body);
        assert_eq!(ids, vec!["abcdefghijk"]);
    }

    #[test]
    fn test_extract_ids_empty_body() {
        assert!(search().extract_ids("no markers here").is_empty());
    }

    #[test]
    fn test_watch_url_template() {
        assert_eq!(
            search().watch_url("xyz98765432"),
            "https://www.youtube.com/watch?v=xyz98765432"
        );
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let result = VideoSearch::new(&SearchConfig {
            id_pattern: "watch(".to_string(),
            ..SearchConfig::default()
        });
        assert!(matches!(result, Err(AppError::Pattern { .. })));
    }
}

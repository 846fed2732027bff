// src/services/songs.rs

//! Song catalog scraping service.
//!
//! Extracts song titles from the catalog page using a configured CSS
//! selector.

use scraper::{Html, Selector};
use unicode_segmentation::UnicodeSegmentation;
use url::Url;

use crate::error::{AppError, Result};
use crate::fetch::PageFetcher;
use crate::models::CatalogConfig;

/// Service for extracting song titles from the catalog page.
pub struct SongCatalog {
    url: Url,
    title_selector: Selector,
    trim_edge_chars: usize,
}

impl SongCatalog {
    /// Create a new catalog scraper from configuration.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let url = Url::parse(&config.url)?;
        let title_selector = parse_selector(&config.title_selector)?;
        Ok(Self {
            url,
            title_selector,
            trim_edge_chars: config.trim_edge_chars,
        })
    }

    /// Fetch the catalog page and extract all song titles.
    pub async fn fetch_titles(&self, fetcher: &dyn PageFetcher) -> Result<Vec<String>> {
        let html = fetcher.fetch_text(&self.url).await?;
        self.extract_titles(&html)
    }

    /// Extract song titles from a catalog document.
    ///
    /// Returns one title per element matched by the configured selector,
    /// in document order, duplicates preserved. Zero matches is an error.
    pub fn extract_titles(&self, html: &str) -> Result<Vec<String>> {
        let document = Html::parse_document(html);
        let titles: Vec<String> = document
            .select(&self.title_selector)
            .map(|element| {
                let raw: String = element.text().collect();
                self.strip_edges(raw.trim())
            })
            .collect();

        if titles.is_empty() {
            return Err(AppError::empty_result("song catalog"));
        }
        Ok(titles)
    }

    /// Strip the configured number of characters from each end.
    ///
    /// Operates on grapheme clusters: the wrapping marks on the catalog
    /// page are typographic quotes, which span multiple bytes.
    fn strip_edges(&self, text: &str) -> String {
        let n = self.trim_edge_chars;
        if n == 0 {
            return text.to_string();
        }

        let graphemes: Vec<&str> = text.graphemes(true).collect();
        if graphemes.len() <= n * 2 {
            return String::new();
        }
        graphemes[n..graphemes.len() - n].concat()
    }
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Song catalog scraping settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Video search settings
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Build configuration from defaults plus environment overrides.
    ///
    /// Used in the Lambda environment, where no config file ships with
    /// the binary.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("CATALOG_URL") {
            config.catalog.url = url;
        }
        if let Ok(selector) = std::env::var("TITLE_SELECTOR") {
            config.catalog.title_selector = selector;
        }
        if let Ok(chars) = std::env::var("TRIM_EDGE_CHARS") {
            if let Ok(n) = chars.parse() {
                config.catalog.trim_edge_chars = n;
            }
        }
        if let Ok(url) = std::env::var("SEARCH_BASE_URL") {
            config.search.base_url = url;
        }
        if let Ok(prefix) = std::env::var("QUERY_PREFIX") {
            config.search.query_prefix = prefix;
        }
        if let Ok(timeout) = std::env::var("HTTP_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                config.http.timeout_secs = secs;
            }
        }

        config
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.catalog.url.trim().is_empty() {
            return Err(AppError::validation("catalog.url is empty"));
        }
        if self.catalog.title_selector.trim().is_empty() {
            return Err(AppError::validation("catalog.title_selector is empty"));
        }
        if self.search.base_url.trim().is_empty() {
            return Err(AppError::validation("search.base_url is empty"));
        }
        if self.search.query_param.trim().is_empty() {
            return Err(AppError::validation("search.query_param is empty"));
        }
        if self.search.id_pattern.trim().is_empty() {
            return Err(AppError::validation("search.id_pattern is empty"));
        }
        if !self.search.watch_url_template.contains("{id}") {
            return Err(AppError::validation(
                "search.watch_url_template must contain an {id} placeholder",
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            catalog: CatalogConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Song catalog scraping settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// URL of the page listing the songs
    #[serde(default = "defaults::catalog_url")]
    pub url: String,

    /// CSS selector matching one element per song title
    #[serde(default = "defaults::title_selector")]
    pub title_selector: String,

    /// Characters stripped from each end of an extracted title.
    ///
    /// The catalog page wraps every title in quotation marks; one
    /// character per side removes them.
    #[serde(default = "defaults::trim_edge_chars")]
    pub trim_edge_chars: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: defaults::catalog_url(),
            title_selector: defaults::title_selector(),
            trim_edge_chars: defaults::trim_edge_chars(),
        }
    }
}

/// Video search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Base URL of the search results page
    #[serde(default = "defaults::search_base_url")]
    pub base_url: String,

    /// Name of the query-string parameter carrying the search terms
    #[serde(default = "defaults::query_param")]
    pub query_param: String,

    /// Text prepended to every search query (empty to disable)
    #[serde(default = "defaults::query_prefix")]
    pub query_prefix: String,

    /// Regex with one capture group matching a video identifier
    #[serde(default = "defaults::id_pattern")]
    pub id_pattern: String,

    /// Watch URL template; `{id}` is replaced with the identifier
    #[serde(default = "defaults::watch_url_template")]
    pub watch_url_template: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::search_base_url(),
            query_param: defaults::query_param(),
            query_prefix: defaults::query_prefix(),
            id_pattern: defaults::id_pattern(),
            watch_url_template: defaults::watch_url_template(),
        }
    }
}

mod defaults {
    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; jukebox/1.0)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Catalog defaults
    pub fn catalog_url() -> String {
        "https://en.wikipedia.org/wiki/List_of_songs_recorded_by_Tool".into()
    }
    pub fn title_selector() -> String {
        // Song rows are the only header cells without class or style
        r#"th[scope="row"]:not([class]):not([style])"#.into()
    }
    pub fn trim_edge_chars() -> usize {
        1
    }

    // Search defaults
    pub fn search_base_url() -> String {
        "https://www.youtube.com/results".into()
    }
    pub fn query_param() -> String {
        "search_query".into()
    }
    pub fn query_prefix() -> String {
        "TOOL".into()
    }
    pub fn id_pattern() -> String {
        r"watch\?v=(\S{11})".into()
    }
    pub fn watch_url_template() -> String {
        "https://www.youtube.com/watch?v={id}".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.http.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.http.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_template_without_placeholder() {
        let mut config = Config::default();
        config.search.watch_url_template = "https://example.com/watch".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [http]
            timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.http.user_agent, defaults::user_agent());
        assert_eq!(config.catalog.trim_edge_chars, 1);
        assert_eq!(config.search.query_prefix, "TOOL");
    }

    #[test]
    fn load_reads_toml_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [catalog]
            url = "https://example.com/songs"
            trim_edge_chars = 0

            [search]
            query_prefix = ""
            "#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.catalog.url, "https://example.com/songs");
        assert_eq!(config.catalog.trim_edge_chars, 0);
        assert_eq!(config.search.query_prefix, "");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let config = Config::load_or_default("/nonexistent/jukebox.toml");
        assert_eq!(config.catalog.trim_edge_chars, 1);
    }
}

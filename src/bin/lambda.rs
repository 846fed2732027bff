//! AWS Lambda entry point for the jukebox resolver.
//!
//! Deploy with `cargo lambda build --release --features lambda`.
//!
//! ## Environment Variables
//!
//! - `CATALOG_URL`: Song catalog page to scrape
//! - `TITLE_SELECTOR`: CSS selector matching one element per song title
//! - `TRIM_EDGE_CHARS`: Characters stripped from each end of a title
//! - `SEARCH_BASE_URL`: Video search results page
//! - `QUERY_PREFIX`: Text prepended to every search query
//! - `HTTP_TIMEOUT_SECS`: HTTP request timeout
//! - `RUST_LOG`: Log level (e.g., `info`, `debug`)

use lambda_runtime::service_fn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    // Initialize tracing for Lambda
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    tracing::info!("Jukebox Lambda resolver starting...");

    // Run Lambda handler
    lambda_runtime::run(service_fn(jukebox::lambda::handler)).await
}

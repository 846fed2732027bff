//! Pipeline entry points for resolver operations.
//!
//! - `run_resolver`: scrape, select, search, select; one pick per call

pub mod resolve;

pub use resolve::run_resolver;

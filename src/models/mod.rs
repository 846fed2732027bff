// src/models/mod.rs

//! Domain models for the resolver application.

mod config;
mod pick;

// Re-export all public types
pub use config::{CatalogConfig, Config, HttpConfig, SearchConfig};
pub use pick::VideoPick;

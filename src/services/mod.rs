//! Service layer for the resolver application.
//!
//! This module contains the business logic for:
//! - Song catalog scraping (`SongCatalog`)
//! - Video search (`VideoSearch`)

mod songs;
mod videos;

pub use songs::SongCatalog;
pub use videos::VideoSearch;

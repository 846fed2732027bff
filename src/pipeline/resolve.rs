// src/pipeline/resolve.rs

//! Random video resolution pipeline.
//!
//! Scrape the song catalog, pick one title uniformly at random, search
//! the video site for it, pick one of the matching videos uniformly at
//! random. Two sequential fetches, no shared state between invocations.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{AppError, Result};
use crate::fetch::PageFetcher;
use crate::models::{Config, VideoPick};
use crate::services::{SongCatalog, VideoSearch};

/// Choose one element uniformly at random.
fn choose<'a, T>(rng: &mut impl Rng, items: &'a [T], context: &str) -> Result<&'a T> {
    items
        .choose(rng)
        .ok_or_else(|| AppError::empty_result(context))
}

/// Run the resolver pipeline once and return the pick.
pub async fn run_resolver(config: &Config, fetcher: &dyn PageFetcher) -> Result<VideoPick> {
    let catalog = SongCatalog::new(&config.catalog)?;
    let search = VideoSearch::new(&config.search)?;
    let mut rng = rand::thread_rng();

    let titles = catalog.fetch_titles(fetcher).await?;
    log::debug!("Extracted {} song titles", titles.len());

    let title = choose(&mut rng, &titles, "song catalog")?.clone();
    log::info!("Picked song: {title}");

    let ids = search.find_videos(fetcher, &title).await?;
    log::debug!("Found {} candidate videos", ids.len());

    let id = choose(&mut rng, &ids, "video search")?;
    let pick = VideoPick {
        video: search.watch_url(id),
        title,
    };
    log::info!("Picked video: {}", pick.video);

    Ok(pick)
}

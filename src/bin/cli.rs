//! Jukebox CLI
//!
//! Local execution entry point. For AWS Lambda, use `jukebox-lambda`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jukebox::{
    error::Result,
    fetch::HttpFetcher,
    models::Config,
    pipeline::run_resolver,
    services::{SongCatalog, VideoSearch},
};

/// jukebox - Random Music Video Picker
#[derive(Parser, Debug)]
#[command(
    name = "jukebox",
    version,
    about = "Picks a random music video from a scraped song catalog"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve one random music video and print it as JSON
    Resolve,

    /// List the song titles extracted from the catalog
    Songs,

    /// Search the video site for a title and list matching watch URLs
    Search {
        /// Song title to search for
        title: String,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Resolve => {
            let fetcher = HttpFetcher::new(&config.http)?;
            let pick = run_resolver(&config, &fetcher).await?;
            println!("{}", serde_json::to_string_pretty(&pick)?);
        }

        Command::Songs => {
            let fetcher = HttpFetcher::new(&config.http)?;
            let catalog = SongCatalog::new(&config.catalog)?;
            let titles = catalog.fetch_titles(&fetcher).await?;

            log::info!(
                "Extracted {} song titles from {}",
                titles.len(),
                config.catalog.url
            );
            for title in titles {
                println!("{title}");
            }
        }

        Command::Search { title } => {
            let fetcher = HttpFetcher::new(&config.http)?;
            let search = VideoSearch::new(&config.search)?;
            let ids = search.find_videos(&fetcher, &title).await?;

            log::info!("Found {} videos for '{}'", ids.len(), title);
            for id in &ids {
                println!("{}", search.watch_url(id));
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK (http, catalog, and search sections)");
        }
    }

    Ok(())
}

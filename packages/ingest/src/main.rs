#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the housing listings scraper.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, Subcommand};
use housing_map_ingest::{enabled_sources, run_all, write_listings};
use housing_map_source::fetch::{Fetch, HttpFetcher};
use housing_map_source::registry;
use housing_map_source::settings::ScrapeSettings;

#[derive(Parser)]
#[command(name = "housing_map_ingest", about = "Housing listings scraper")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape every configured source and write the listings file
    ScrapeAll {
        /// Output path for the listings JSON array
        #[arg(long, default_value = "data/scraped_listings.json")]
        output: PathBuf,
        /// Comma-separated list of source IDs to run (overrides the
        /// `HOUSING_MAP_SOURCES` env var)
        #[arg(long)]
        sources: Option<String>,
    },
    /// List all configured sources
    Sources,
}

// Sources run strictly one at a time with one request in flight, so a
// single-threaded runtime is all this needs.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let settings = ScrapeSettings::default();
    let fetcher: Arc<dyn Fetch> = Arc::new(HttpFetcher::new(&settings)?);

    match cli.command.unwrap_or(Commands::ScrapeAll {
        output: PathBuf::from("data/scraped_listings.json"),
        sources: None,
    }) {
        Commands::ScrapeAll { output, sources } => {
            let start = Instant::now();
            let enabled = enabled_sources(registry::all_sources(&fetcher, &settings), sources);

            let listings = run_all(&enabled).await;
            write_listings(&output, &listings)?;

            log::info!(
                "Scrape complete in {:.1}s",
                start.elapsed().as_secs_f64(),
            );
        }
        Commands::Sources => {
            for source in registry::all_sources(&fetcher, &settings) {
                println!("{:<22} {}", source.id(), source.name());
            }
        }
    }

    Ok(())
}

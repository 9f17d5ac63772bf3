#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Driver for the housing scrape: runs every configured source in order,
//! isolates per-source failures, and writes the aggregate listings file.
//!
//! The driver is deliberately thin — all extraction policy lives in
//! `housing_map_source`. A source that fails outright contributes zero
//! records and a log line; the run always completes and always produces an
//! output file.

use std::path::Path;

use housing_map_listing_models::Listing;
use housing_map_source::ListingSource;

/// Errors from aggregating or persisting the scraped listings.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// I/O error writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Filters sources by a comma-separated id list from the CLI flag or the
/// `HOUSING_MAP_SOURCES` environment variable. With neither set, all
/// sources are returned unchanged.
#[must_use]
pub fn enabled_sources(
    all: Vec<Box<dyn ListingSource>>,
    cli_filter: Option<String>,
) -> Vec<Box<dyn ListingSource>> {
    let filter = cli_filter.or_else(|| std::env::var("HOUSING_MAP_SOURCES").ok());

    let Some(filter_str) = filter else {
        return all;
    };

    let ids: Vec<&str> = filter_str.split(',').map(str::trim).collect();
    let available: Vec<String> = all.iter().map(|s| s.id().to_owned()).collect();

    let filtered: Vec<Box<dyn ListingSource>> = all
        .into_iter()
        .filter(|s| ids.contains(&s.id()))
        .collect();

    if filtered.is_empty() {
        log::warn!(
            "No matching sources found for filter {:?}. Available: {}",
            ids,
            available.join(", "),
        );
    }

    filtered
}

/// Runs every source sequentially and concatenates their records in source
/// order, preserving each source's emission order.
///
/// A source returning an error is logged and contributes zero records; the
/// remaining sources still run.
pub async fn run_all(sources: &[Box<dyn ListingSource>]) -> Vec<Listing> {
    let mut all_listings = Vec::new();

    for source in sources {
        log::info!("Running source: {} ({})", source.name(), source.id());
        match source.scrape().await {
            Ok(mut listings) => {
                log::info!("{}: {} listings", source.name(), listings.len());
                all_listings.append(&mut listings);
            }
            Err(e) => {
                log::error!("{}: failed, contributing 0 listings: {e}", source.name());
            }
        }
    }

    log::info!("Total listings scraped: {}", all_listings.len());
    all_listings
}

/// Writes the full ordered listing sequence as one pretty-printed JSON
/// array. Parent directories are created as needed.
///
/// # Errors
///
/// Returns [`IngestError`] if the file cannot be written or the records
/// cannot be serialized.
pub fn write_listings(path: &Path, listings: &[Listing]) -> Result<(), IngestError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, listings)?;

    log::info!("Wrote {} listings to {}", listings.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use housing_map_listing_models::{HeatingType, Neighborhood, TcatRoute};
    use housing_map_source::SourceError;

    use super::*;

    struct StaticSource {
        id: &'static str,
        titles: Vec<&'static str>,
    }

    #[async_trait]
    impl ListingSource for StaticSource {
        fn id(&self) -> &str {
            self.id
        }

        fn name(&self) -> &str {
            self.id
        }

        async fn scrape(&self) -> Result<Vec<Listing>, SourceError> {
            Ok(self.titles.iter().map(|t| listing(t)).collect())
        }
    }

    struct BrokenSource;

    #[async_trait]
    impl ListingSource for BrokenSource {
        fn id(&self) -> &str {
            "broken"
        }

        fn name(&self) -> &str {
            "Broken"
        }

        async fn scrape(&self) -> Result<Vec<Listing>, SourceError> {
            Err(SourceError::Parse {
                message: "boom".to_owned(),
            })
        }
    }

    fn listing(title: &str) -> Listing {
        Listing {
            title: title.to_owned(),
            address: "Ithaca, NY".to_owned(),
            latitude: 42.444,
            longitude: -76.501,
            rent: 0,
            bedrooms: 1,
            bathrooms: 1.0,
            neighborhood: Neighborhood::Downtown,
            lease_term: "12-month".to_owned(),
            heating_type: HeatingType::Unknown,
            nearest_tcat_route: TcatRoute::Unknown,
            elevation_warning: false,
            distance_from_campus_miles: None,
            is_official_listing: true,
            photos: vec![],
            description: String::new(),
            url: "https://example.test".to_owned(),
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn failing_source_does_not_abort_the_run() {
        let sources: Vec<Box<dyn ListingSource>> = vec![
            Box::new(StaticSource {
                id: "first",
                titles: vec!["a", "b"],
            }),
            Box::new(BrokenSource),
            Box::new(StaticSource {
                id: "last",
                titles: vec!["c"],
            }),
        ];

        let listings = run_all(&sources).await;
        let titles: Vec<&str> = listings.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn records_keep_source_order() {
        let sources: Vec<Box<dyn ListingSource>> = vec![
            Box::new(StaticSource {
                id: "second_registered",
                titles: vec!["z"],
            }),
            Box::new(StaticSource {
                id: "first_registered",
                titles: vec!["a"],
            }),
        ];

        let listings = run_all(&sources).await;
        let titles: Vec<&str> = listings.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["z", "a"]);
    }

    #[test]
    fn filters_sources_by_id() {
        let sources: Vec<Box<dyn ListingSource>> = vec![
            Box::new(StaticSource {
                id: "keep",
                titles: vec![],
            }),
            Box::new(StaticSource {
                id: "drop",
                titles: vec![],
            }),
        ];

        let filtered = enabled_sources(sources, Some("keep".to_owned()));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id(), "keep");
    }

    #[test]
    fn writes_one_json_array() {
        let dir = std::env::temp_dir().join("housing_map_ingest_test");
        let path = dir.join("listings.json");
        let listings = vec![listing("a"), listing("b")];

        write_listings(&path, &listings).unwrap();

        let body = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<Listing> = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].title, "a");

        std::fs::remove_dir_all(&dir).ok();
    }
}

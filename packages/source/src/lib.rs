#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Housing source trait, extraction strategies, and normalization logic.
//!
//! Each rental site implements the [`ListingSource`] trait to define how its
//! pages are fetched and turned into canonical
//! [`Listing`](housing_map_listing_models::Listing) records. Two strategy
//! engines cover every configured site:
//!
//! - [`single_building::SingleBuildingSource`] — marketing sites with no
//!   per-unit data; emits one static record per building.
//! - [`list_detail::ListDetailSource`] — sites with an index of units;
//!   discovers detail pages, optionally follows pagination, and probes each
//!   detail page for fields.
//!
//! The shared [`inference`] rules turn free-text addresses and descriptions
//! into the closed-set attributes, identically for every strategy.

pub mod fetch;
pub mod inference;
pub mod list_detail;
pub mod probe;
pub mod registry;
pub mod settings;
pub mod single_building;
pub mod sites;

use async_trait::async_trait;
use housing_map_listing_models::Listing;

/// Errors that can occur during source operations.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// URL of the failed request.
        url: String,
        /// The status code the server returned.
        status: reqwest::StatusCode,
    },

    /// Document parsing error.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what went wrong.
        message: String,
    },
}

/// Trait that all housing sources must implement.
///
/// Implementations are expected to catch and log failures of individual
/// pages internally so one bad URL never aborts the rest of the crawl; the
/// driver additionally treats a returned error as "zero records from this
/// source" and moves on.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Unique identifier for this source (e.g., `"ithaca_renting"`).
    fn id(&self) -> &str;

    /// Human-readable name of this source.
    fn name(&self) -> &str;

    /// Extracts all listings this source currently advertises.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] only for failures that prevent the source
    /// from producing anything at all.
    async fn scrape(&self) -> Result<Vec<Listing>, SourceError>;
}

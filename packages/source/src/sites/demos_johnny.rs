//! Demos & Johnny Collegetown Rentals.
//!
//! The site is a Wix build rendered entirely client-side; no listing index
//! is reachable without executing scripts, so this source emits the
//! building-level fallback record instead of per-unit detail.

use housing_map_listing_models::Neighborhood;

use crate::settings::ScrapeSettings;
use crate::single_building::{BuildingConfig, SingleBuildingSource};

/// Builds the Demos Johnny fallback source.
#[must_use]
pub fn source(settings: ScrapeSettings) -> SingleBuildingSource {
    SingleBuildingSource::new(
        BuildingConfig {
            id: "demos_johnny",
            name: "Demos Johnny",
            title: "Demos Johnny Collegetown Rentals",
            url: "https://www.demosjohnnycollegetownrentals.com",
            address: "Ithaca, NY",
            description: "Student housing for Cornell and Ithaca College.",
            photos: vec![],
            // The locality address alone would land Downtown; the portfolio
            // is entirely Collegetown.
            neighborhood_override: Some(Neighborhood::Collegetown),
        },
        settings,
    )
}

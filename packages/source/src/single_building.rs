//! Single-building fallback strategy.
//!
//! For marketing sites that expose no per-unit data (city-wide building
//! pages, Wix sites rendered client-side), the source is configured with a
//! fixed record and `scrape()` performs no network I/O at all. The shared
//! inference rules still run against the configured address/description so
//! the categorical attributes match what any other strategy would produce.

use async_trait::async_trait;
use chrono::Utc;
use housing_map_listing_models::{Listing, Neighborhood};

use crate::inference;
use crate::settings::ScrapeSettings;
use crate::{ListingSource, SourceError};

/// Static configuration for one building.
#[derive(Debug, Clone)]
pub struct BuildingConfig {
    /// Unique source identifier.
    pub id: &'static str,
    /// Human-readable source name.
    pub name: &'static str,
    /// Building name used as the listing title.
    pub title: &'static str,
    /// Marketing site URL, also the record's canonical URL.
    pub url: &'static str,
    /// Building address.
    pub address: &'static str,
    /// Short marketing blurb.
    pub description: &'static str,
    /// Known exterior/interior shots, if any.
    pub photos: Vec<String>,
    /// Pins the neighborhood when the address alone would misplace the
    /// building; wins over text inference.
    pub neighborhood_override: Option<Neighborhood>,
}

/// Strategy that emits exactly one record per configured building.
pub struct SingleBuildingSource {
    config: BuildingConfig,
    settings: ScrapeSettings,
}

impl SingleBuildingSource {
    /// Creates a source from a building configuration.
    #[must_use]
    pub const fn new(config: BuildingConfig, settings: ScrapeSettings) -> Self {
        Self { config, settings }
    }
}

#[async_trait]
impl ListingSource for SingleBuildingSource {
    fn id(&self) -> &str {
        self.config.id
    }

    fn name(&self) -> &str {
        self.config.name
    }

    async fn scrape(&self) -> Result<Vec<Listing>, SourceError> {
        let neighborhood = self
            .config
            .neighborhood_override
            .unwrap_or_else(|| inference::infer_neighborhood(self.config.address));

        Ok(vec![Listing {
            title: self.config.title.to_owned(),
            address: self.config.address.to_owned(),
            latitude: self.settings.fallback_latitude,
            longitude: self.settings.fallback_longitude,
            // Rent and unit mix vary by floor plan; the building record
            // carries the unknown/variable markers.
            rent: 0,
            bedrooms: 1,
            bathrooms: 1.0,
            neighborhood,
            lease_term: self.settings.lease_term.clone(),
            heating_type: inference::infer_heating(self.config.description),
            nearest_tcat_route: inference::infer_tcat_route(self.config.address),
            elevation_warning: neighborhood.elevation_warning(),
            distance_from_campus_miles: None,
            is_official_listing: true,
            photos: self.config.photos.clone(),
            description: self.config.description.to_owned(),
            url: self.config.url.to_owned(),
            created_at: Utc::now(),
        }])
    }
}

#[cfg(test)]
mod tests {
    use housing_map_listing_models::{HeatingType, TcatRoute};

    use super::*;

    fn config() -> BuildingConfig {
        BuildingConfig {
            id: "test_building",
            name: "Test Building",
            title: "The Test",
            url: "https://test.example/",
            address: "408 Stewart Ave, Ithaca, NY 14850",
            description: "Modern apartments close to everything.",
            photos: vec!["https://test.example/exterior.jpg".to_owned()],
            neighborhood_override: None,
        }
    }

    #[tokio::test]
    async fn emits_exactly_one_inferred_record() {
        let source = SingleBuildingSource::new(config(), ScrapeSettings::default());
        let listings = source.scrape().await.unwrap();
        assert_eq!(listings.len(), 1);

        let listing = &listings[0];
        assert_eq!(listing.title, "The Test");
        assert_eq!(listing.rent, 0);
        assert_eq!(listing.bedrooms, 1);
        assert_eq!(listing.neighborhood, Neighborhood::FallCreek);
        assert_eq!(listing.nearest_tcat_route, TcatRoute::Route30);
        assert!(listing.elevation_warning);
        assert_eq!(listing.heating_type, HeatingType::Unknown);
    }

    #[tokio::test]
    async fn repeated_scrapes_differ_only_in_timestamp() {
        let source = SingleBuildingSource::new(config(), ScrapeSettings::default());
        let mut first = source.scrape().await.unwrap().remove(0);
        let second = source.scrape().await.unwrap().remove(0);

        first.created_at = second.created_at;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn settings_overrides_flow_into_records() {
        let settings = ScrapeSettings::default().with_lease_term("10-month");
        let source = SingleBuildingSource::new(config(), settings);
        let listing = source.scrape().await.unwrap().remove(0);
        assert_eq!(listing.lease_term, "10-month");
    }

    #[tokio::test]
    async fn neighborhood_override_wins_and_drives_elevation() {
        let mut cfg = config();
        cfg.neighborhood_override = Some(Neighborhood::Collegetown);
        let source = SingleBuildingSource::new(cfg, ScrapeSettings::default());
        let listing = source.scrape().await.unwrap().remove(0);

        assert_eq!(listing.neighborhood, Neighborhood::Collegetown);
        assert!(!listing.elevation_warning);
    }
}

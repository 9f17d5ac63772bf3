#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! The canonical rental listing record and its closed-set attribute enums.
//!
//! Every housing source produces [`Listing`] records in this shape, whether
//! it extracts per-unit detail pages or emits a single synthetic record for
//! a whole building. Categorical attributes (neighborhood, heating, transit
//! route) are closed enums so downstream consumers never see free text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Ithaca neighborhood a listing falls in.
///
/// `Varna` is part of the closed set for manually curated records but no
/// inference rule currently produces it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Neighborhood {
    Collegetown,
    #[serde(rename = "Fall Creek")]
    #[strum(serialize = "Fall Creek")]
    FallCreek,
    Downtown,
    Lansing,
    Varna,
}

impl Neighborhood {
    /// Whether a listing in this neighborhood gets the steep-walk warning.
    ///
    /// Fall Creek sits below the hill, so the walk up to campus is the
    /// steepest in town. No other signal feeds this flag.
    #[must_use]
    pub const fn elevation_warning(self) -> bool {
        matches!(self, Self::FallCreek)
    }
}

/// How a unit is heated, as advertised in its description copy.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum HeatingType {
    #[serde(rename = "Electric Baseboard")]
    #[strum(serialize = "Electric Baseboard")]
    ElectricBaseboard,
    Gas,
    Steam,
    Unknown,
}

/// Nearest TCAT bus line, inferred from street-name keywords.
///
/// Not authoritative — a coarse hint for the map UI, not routing data.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum TcatRoute {
    #[serde(rename = "Route 30")]
    #[strum(serialize = "Route 30")]
    Route30,
    #[serde(rename = "Route 10")]
    #[strum(serialize = "Route 10")]
    Route10,
    #[serde(rename = "Route 81")]
    #[strum(serialize = "Route 81")]
    Route81,
    Unknown,
}

/// One rentable unit, or a whole building when a source exposes no per-unit
/// data.
///
/// Constructed entirely within one extraction call and never mutated after
/// emission. Field names are the stable wire format of the output JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Human-readable name. Required, non-empty.
    pub title: String,
    /// Street address where extractable, otherwise a locality string.
    pub address: String,
    /// WGS84 latitude. Falls back to the Ithaca Commons when unresolved —
    /// geocoding happens downstream.
    pub latitude: f64,
    /// WGS84 longitude. Same fallback policy as `latitude`.
    pub longitude: f64,
    /// Monthly rent in whole dollars. `0` means unknown/variable.
    pub rent: u32,
    /// Bedroom count. `0` denotes a studio.
    pub bedrooms: u32,
    /// Bathroom count. Supports half-baths (e.g. `1.5`).
    pub bathrooms: f64,
    pub neighborhood: Neighborhood,
    /// Lease term text (e.g. `"12-month"`).
    pub lease_term: String,
    pub heating_type: HeatingType,
    pub nearest_tcat_route: TcatRoute,
    /// True iff `neighborhood` is Fall Creek.
    pub elevation_warning: bool,
    /// Unset when not computed.
    pub distance_from_campus_miles: Option<f64>,
    /// True for management-company and building sources.
    pub is_official_listing: bool,
    /// Absolute image URLs, at most five, in document order.
    pub photos: Vec<String>,
    /// Free text, may be empty.
    pub description: String,
    /// Canonical source URL for this record.
    pub url: String,
    /// When the record was extracted.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighborhood_serializes_to_display_strings() {
        assert_eq!(
            serde_json::to_string(&Neighborhood::FallCreek).unwrap(),
            "\"Fall Creek\""
        );
        assert_eq!(
            serde_json::to_string(&Neighborhood::Collegetown).unwrap(),
            "\"Collegetown\""
        );
        assert_eq!(Neighborhood::FallCreek.to_string(), "Fall Creek");
    }

    #[test]
    fn heating_and_route_serialize_to_display_strings() {
        assert_eq!(
            serde_json::to_string(&HeatingType::ElectricBaseboard).unwrap(),
            "\"Electric Baseboard\""
        );
        assert_eq!(
            serde_json::to_string(&TcatRoute::Route30).unwrap(),
            "\"Route 30\""
        );
        assert_eq!(serde_json::to_string(&TcatRoute::Unknown).unwrap(), "\"Unknown\"");
    }

    #[test]
    fn elevation_warning_only_for_fall_creek() {
        assert!(Neighborhood::FallCreek.elevation_warning());
        assert!(!Neighborhood::Collegetown.elevation_warning());
        assert!(!Neighborhood::Downtown.elevation_warning());
        assert!(!Neighborhood::Lansing.elevation_warning());
        assert!(!Neighborhood::Varna.elevation_warning());
    }

    #[test]
    fn listing_wire_field_names_are_stable() {
        let listing = Listing {
            title: "Test".to_string(),
            address: "100 Main St".to_string(),
            latitude: 42.444,
            longitude: -76.501,
            rent: 1200,
            bedrooms: 2,
            bathrooms: 1.5,
            neighborhood: Neighborhood::Downtown,
            lease_term: "12-month".to_string(),
            heating_type: HeatingType::Gas,
            nearest_tcat_route: TcatRoute::Unknown,
            elevation_warning: false,
            distance_from_campus_miles: None,
            is_official_listing: true,
            photos: vec![],
            description: String::new(),
            url: "https://example.com".to_string(),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&listing).unwrap();
        let obj = value.as_object().unwrap();
        for field in [
            "title",
            "address",
            "latitude",
            "longitude",
            "rent",
            "bedrooms",
            "bathrooms",
            "neighborhood",
            "lease_term",
            "heating_type",
            "nearest_tcat_route",
            "elevation_warning",
            "distance_from_campus_miles",
            "is_official_listing",
            "photos",
            "description",
            "url",
            "created_at",
        ] {
            assert!(obj.contains_key(field), "missing field {field}");
        }
    }
}

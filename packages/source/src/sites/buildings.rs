//! Building-marketing sites with no per-unit data.
//!
//! Each of these emits a single static record; rent and unit mix vary by
//! floor plan and are left at the unknown markers.

use crate::settings::ScrapeSettings;
use crate::single_building::{BuildingConfig, SingleBuildingSource};

/// City Centre Ithaca, downtown high-rise.
#[must_use]
pub fn city_centre(settings: ScrapeSettings) -> SingleBuildingSource {
    SingleBuildingSource::new(
        BuildingConfig {
            id: "city_centre",
            name: "City Centre",
            title: "City Centre Ithaca",
            url: "https://citycentreithaca.com/",
            address: "301 E State St, Ithaca, NY 14850",
            description: "Luxury apartments in downtown Ithaca. Pet friendly, fitness center, roof terrace.",
            photos: vec![
                "https://citycentreithaca.com/wp-content/uploads/2019/06/City-Centre-Ithaca-Exterior-1.jpg"
                    .to_owned(),
            ],
            neighborhood_override: None,
        },
        settings,
    )
}

/// Lux and Lofts, two Collegetown communities.
#[must_use]
pub fn lux_and_lofts(settings: ScrapeSettings) -> SingleBuildingSource {
    SingleBuildingSource::new(
        BuildingConfig {
            id: "lux_and_lofts",
            name: "Lux and Lofts",
            title: "Lux and Lofts",
            url: "https://www.luxandlofts.com/",
            address: "114 Summit Ave, Ithaca, NY 14850",
            description: "Luxury student apartments in Collegetown. Three buildings, two communities.",
            photos: vec![
                "https://www.luxandlofts.com/wp-content/uploads/2022/10/Lux-Exterior-1.jpg"
                    .to_owned(),
            ],
            neighborhood_override: None,
        },
        settings,
    )
}

/// The Ithacan, downtown.
#[must_use]
pub fn the_ithacan(settings: ScrapeSettings) -> SingleBuildingSource {
    SingleBuildingSource::new(
        BuildingConfig {
            id: "the_ithacan",
            name: "The Ithacan",
            title: "The Ithacan",
            url: "https://livetheithacan.com/",
            address: "210 E State St, Ithaca, NY 14850",
            description: "Modern living in the heart of downtown Ithaca.",
            photos: vec![
                "https://livetheithacan.com/wp-content/uploads/2020/10/The-Ithacan-Exterior.jpg"
                    .to_owned(),
            ],
            neighborhood_override: None,
        },
        settings,
    )
}

/// The Ivy and The Bear, boutique Collegetown buildings.
#[must_use]
pub fn ivy_and_bear(settings: ScrapeSettings) -> SingleBuildingSource {
    SingleBuildingSource::new(
        BuildingConfig {
            id: "ivy_and_bear",
            name: "Ivy and Bear",
            title: "The Ivy and The Bear",
            url: "https://www.theivyandthebear.com/",
            address: "133 Dryden Rd, Ithaca, NY 14850",
            description: "Boutique apartments in Collegetown.",
            photos: vec![],
            neighborhood_override: None,
        },
        settings,
    )
}

/// Collegetown Crossing, College Ave.
#[must_use]
pub fn collegetown_crossing(settings: ScrapeSettings) -> SingleBuildingSource {
    SingleBuildingSource::new(
        BuildingConfig {
            id: "collegetown_crossing",
            name: "Collegetown Crossing",
            title: "Collegetown Crossing",
            url: "https://www.collegetowncrossing.com/",
            address: "307 College Ave, Ithaca, NY 14850",
            description: "Modern apartments in the heart of Collegetown.",
            photos: vec![
                "https://www.collegetowncrossing.com/wp-content/uploads/2019/06/Collegetown-Crossing-Exterior.jpg"
                    .to_owned(),
            ],
            neighborhood_override: None,
        },
        settings,
    )
}

/// Collegetown Terrace complex.
#[must_use]
pub fn collegetown_terrace(settings: ScrapeSettings) -> SingleBuildingSource {
    SingleBuildingSource::new(
        BuildingConfig {
            id: "collegetown_terrace",
            name: "Collegetown Terrace",
            title: "Collegetown Terrace",
            url: "https://collegetownterrace.com/",
            address: "115 S Quarry St, Ithaca, NY 14850",
            description: "Modern student apartments with shuttle service, gym, and more.",
            photos: vec![
                "https://collegetownterrace.com/wp-content/uploads/2020/10/CTT-Exterior.jpg"
                    .to_owned(),
            ],
            neighborhood_override: None,
        },
        settings,
    )
}

#[cfg(test)]
mod tests {
    use housing_map_listing_models::{Neighborhood, TcatRoute};

    use super::*;
    use crate::ListingSource as _;

    #[tokio::test]
    async fn building_addresses_drive_inference() {
        let listing = ivy_and_bear(ScrapeSettings::default())
            .scrape()
            .await
            .unwrap()
            .remove(0);
        assert_eq!(listing.neighborhood, Neighborhood::Collegetown);
        assert_eq!(listing.nearest_tcat_route, TcatRoute::Route10);

        let listing = city_centre(ScrapeSettings::default())
            .scrape()
            .await
            .unwrap()
            .remove(0);
        assert_eq!(listing.neighborhood, Neighborhood::Downtown);
        assert!(!listing.elevation_warning);

        let listing = collegetown_crossing(ScrapeSettings::default())
            .scrape()
            .await
            .unwrap()
            .remove(0);
        assert_eq!(listing.neighborhood, Neighborhood::Collegetown);
        assert_eq!(listing.nearest_tcat_route, TcatRoute::Route30);
    }
}

//! Ithaca Renting Company.
//!
//! Units are split across a Collegetown and a Downtown section, so the
//! section itself pins the neighborhood. Detail pages hang their
//! `unit-details/?uid=` href on non-anchor elements, which the engine's
//! universal href scan handles. This host is slow, so it gets a longer
//! politeness delay than the default.

use std::sync::Arc;

use housing_map_listing_models::Neighborhood;
use regex::Regex;

use crate::fetch::Fetch;
use crate::list_detail::{IndexSection, LinkMatcher, ListDetailSource, SiteProfile};
use crate::probe::{AddressStep, BathroomProbe, BedroomProbe, PhotoRule, ProbeProfile};
use crate::settings::ScrapeSettings;

/// Builds the Ithaca Renting source.
#[must_use]
pub fn source(fetcher: Arc<dyn Fetch>, settings: ScrapeSettings) -> ListDetailSource {
    ListDetailSource::new(profile(), settings, fetcher)
}

fn profile() -> SiteProfile {
    SiteProfile {
        id: "ithaca_renting",
        name: "Ithaca Renting",
        base_url: "https://ithacarenting.com".to_owned(),
        sections: vec![
            IndexSection::with_neighborhood("/collegetown/", Neighborhood::Collegetown),
            IndexSection::with_neighborhood("/downtown/", Neighborhood::Downtown),
        ],
        link_matcher: LinkMatcher::HrefRegex(
            Regex::new(r"unit-details/\?uid=").unwrap_or_else(|_| unreachable!()),
        ),
        paginate: false,
        marker_phrases: vec![],
        probes: ProbeProfile {
            title_selectors: vec!["h1".to_owned(), "h2.entry-title".to_owned()],
            address_steps: vec![AddressStep::TextPattern(
                // Unit pages spell the full address out with the zip.
                Regex::new("14850").unwrap_or_else(|_| unreachable!()),
            )],
            description_selectors: vec![".entry-content".to_owned(), ".description".to_owned()],
            photos: PhotoRule {
                include_substrings: vec!["uploads".to_owned()],
                exclude_svg: true,
                use_data_src: false,
                resolve_relative: true,
            },
            bedrooms: BedroomProbe::BodyText,
            bathrooms: BathroomProbe::BodyText,
            infer_heating: true,
            ..ProbeProfile::default()
        },
        detail_delay_ms: Some(1000),
    }
}

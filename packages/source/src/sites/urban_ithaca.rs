//! Urban Ithaca.
//!
//! Detail links all go through `detailed-view-more`. Unit pages are thin:
//! no bathroom counts and no heating copy, so those fields keep their
//! defaults. Some units are studios, flagged by the "Studio" keyword.

use std::sync::Arc;

use regex::Regex;

use crate::fetch::Fetch;
use crate::list_detail::{IndexSection, LinkMatcher, ListDetailSource, SiteProfile};
use crate::probe::{AddressStep, BathroomProbe, BedroomProbe, PhotoRule, ProbeProfile};
use crate::settings::ScrapeSettings;

/// Builds the Urban Ithaca source.
#[must_use]
pub fn source(fetcher: Arc<dyn Fetch>, settings: ScrapeSettings) -> ListDetailSource {
    ListDetailSource::new(profile(), settings, fetcher)
}

fn profile() -> SiteProfile {
    SiteProfile {
        id: "urban_ithaca",
        name: "Urban Ithaca",
        base_url: "https://www.urbanithaca.com".to_owned(),
        sections: vec![IndexSection::new("/apartments"), IndexSection::new("/houses")],
        link_matcher: LinkMatcher::HrefContains("detailed-view-more".to_owned()),
        paginate: false,
        marker_phrases: vec![],
        probes: ProbeProfile {
            address_steps: vec![AddressStep::TextPattern(
                Regex::new(r"(?i)\d+\s+[\w\s]+,\s*Ithaca").unwrap_or_else(|_| unreachable!()),
            )],
            description_selectors: vec![".description".to_owned()],
            photos: PhotoRule {
                include_substrings: vec!["uploads".to_owned()],
                exclude_svg: false,
                use_data_src: false,
                resolve_relative: true,
            },
            bedrooms: BedroomProbe::BodyTextOrStudio,
            bathrooms: BathroomProbe::Fixed(1.0),
            infer_heating: false,
            ..ProbeProfile::default()
        },
        detail_delay_ms: None,
    }
}

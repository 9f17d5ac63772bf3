//! Lambrou Real Estate.
//!
//! Index pages link properties by street address ("103 Eddy Street (5
//! Bed)"), so links are matched on anchor text rather than URL shape, and
//! the address and bedroom count both come from the title. Bathroom counts
//! and heating are never published.

use std::sync::Arc;

use regex::Regex;

use crate::fetch::Fetch;
use crate::list_detail::{IndexSection, LinkMatcher, ListDetailSource, SiteProfile};
use crate::probe::{AddressStep, BathroomProbe, BedroomProbe, PhotoRule, ProbeProfile};
use crate::settings::ScrapeSettings;

/// Builds the Lambrou Real Estate source.
#[must_use]
pub fn source(fetcher: Arc<dyn Fetch>, settings: ScrapeSettings) -> ListDetailSource {
    ListDetailSource::new(profile(), settings, fetcher)
}

fn profile() -> SiteProfile {
    SiteProfile {
        id: "lambrou",
        name: "Lambrou Real Estate",
        base_url: "https://www.lambrourealestate.com".to_owned(),
        sections: vec![IndexSection::new("/houses"), IndexSection::new("/apartments")],
        link_matcher: LinkMatcher::AnchorText(
            // A street-suffix token after a number, or an explicit bedroom
            // count in the anchor.
            Regex::new(r"(?i:\d+.*(?:st|ave|rd|place|lane))|Bed")
                .unwrap_or_else(|_| unreachable!()),
        ),
        paginate: false,
        marker_phrases: vec![],
        probes: ProbeProfile {
            address_steps: vec![AddressStep::TitleWithSuffix {
                require_digit: false,
            }],
            description_selectors: vec![".sqs-block-content".to_owned()],
            photos: PhotoRule {
                use_data_src: true,
                ..PhotoRule::default()
            },
            bedrooms: BedroomProbe::TitleOnly,
            bathrooms: BathroomProbe::Fixed(1.0),
            infer_heating: false,
            ..ProbeProfile::default()
        },
        detail_delay_ms: None,
    }
}

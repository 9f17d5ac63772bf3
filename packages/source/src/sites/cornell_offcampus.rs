//! Cornell Off-Campus Living portal.
//!
//! The one genuinely paginated source: listing results carry a "Next"
//! control that the engine follows up to the page ceiling. The search query
//! in the start path keeps the result set to realistic student rentals
//! (price band, any bedroom count).

use std::sync::Arc;

use crate::fetch::Fetch;
use crate::list_detail::{IndexSection, LinkMatcher, ListDetailSource, SiteProfile};
use crate::probe::{AddressStep, PhotoRule, ProbeProfile};
use crate::settings::ScrapeSettings;

/// Builds the Cornell Off-Campus Living source.
#[must_use]
pub fn source(fetcher: Arc<dyn Fetch>, settings: ScrapeSettings) -> ListDetailSource {
    ListDetailSource::new(profile(), settings, fetcher)
}

fn profile() -> SiteProfile {
    SiteProfile {
        id: "cornell_offcampus",
        name: "Cornell Off-Campus Living",
        base_url: "https://listings.offcampusliving.cornell.edu".to_owned(),
        sections: vec![IndexSection::new(
            "/listings?search=&priceMin=500&priceMax=3900&bedroom=10&pets=any&likes=false&view=list&safety=false",
        )],
        link_matcher: LinkMatcher::HrefContains("/listings/view/".to_owned()),
        paginate: true,
        marker_phrases: vec![],
        probes: ProbeProfile {
            title_selectors: vec!["h1".to_owned()],
            address_steps: vec![
                // Listings link the address to Google Maps; titles that are
                // themselves street addresses cover the rest.
                AddressStep::MapLink,
                AddressStep::TitleWithSuffix { require_digit: true },
            ],
            description_selectors: vec!["div.description".to_owned(), "div.details".to_owned()],
            photos: PhotoRule {
                include_substrings: vec!["listing".to_owned(), "upload".to_owned()],
                exclude_svg: false,
                use_data_src: false,
                resolve_relative: false,
            },
            ..ProbeProfile::default()
        },
        detail_delay_ms: None,
    }
}

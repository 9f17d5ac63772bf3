//! Travis Hyde Properties.
//!
//! Property pages have no recognizable URL shape, so the matcher takes
//! every same-site link minus known nav/utility pages, and the
//! marker-phrase gate rejects whatever non-listing pages slip through.
//! The site never states a per-property street address; records carry the
//! generic locality.

use std::sync::Arc;

use crate::fetch::Fetch;
use crate::list_detail::{IndexSection, LinkMatcher, ListDetailSource, SiteProfile};
use crate::probe::{BathroomProbe, BedroomProbe, PhotoRule, ProbeProfile};
use crate::settings::ScrapeSettings;

/// Builds the Travis Hyde source.
#[must_use]
pub fn source(fetcher: Arc<dyn Fetch>, settings: ScrapeSettings) -> ListDetailSource {
    ListDetailSource::new(profile(), settings, fetcher)
}

fn profile() -> SiteProfile {
    SiteProfile {
        id: "travis_hyde",
        name: "Travis Hyde",
        base_url: "https://travishyde.com".to_owned(),
        sections: vec![IndexSection::new("/residential-properties-ithaca-ny")],
        link_matcher: LinkMatcher::InternalPages {
            excluded_tokens: [
                "contact",
                "about",
                "floorplans",
                "news",
                "faq",
                "privacy",
                "terms",
                "commercial",
            ]
            .map(str::to_owned)
            .to_vec(),
            excluded_paths: ["/", "/home", "/residential-properties-ithaca-ny"]
                .map(str::to_owned)
                .to_vec(),
        },
        paginate: false,
        marker_phrases: ["Apply Now", "Amenities", "Floor Plans"]
            .map(str::to_owned)
            .to_vec(),
        probes: ProbeProfile {
            title_selectors: vec!["h1".to_owned()],
            title_strip: vec!["Residential -".to_owned()],
            address_steps: vec![],
            description_selectors: vec![".sqs-block-content".to_owned()],
            photos: PhotoRule {
                use_data_src: true,
                ..PhotoRule::default()
            },
            bedrooms: BedroomProbe::Fixed(1),
            bathrooms: BathroomProbe::Fixed(1.0),
            infer_heating: true,
            ..ProbeProfile::default()
        },
        detail_delay_ms: None,
    }
}

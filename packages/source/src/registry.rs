//! Source registry — every configured housing site, in run order.
//!
//! The order here is the order sources execute and the order their records
//! appear in the output file. Adding a site means adding its module under
//! [`crate::sites`] and one entry below.

use std::sync::Arc;

use crate::ListingSource;
use crate::fetch::Fetch;
use crate::settings::ScrapeSettings;
use crate::sites::{
    buildings, cornell_offcampus, demos_johnny, ithaca_renting, lambrou, travis_hyde,
    urban_ithaca,
};

/// Total number of configured sources (used in tests).
#[cfg(test)]
const EXPECTED_SOURCE_COUNT: usize = 12;

/// Returns all configured sources in run order, sharing one fetcher and one
/// settings value.
#[must_use]
pub fn all_sources(
    fetcher: &Arc<dyn Fetch>,
    settings: &ScrapeSettings,
) -> Vec<Box<dyn ListingSource>> {
    vec![
        Box::new(ithaca_renting::source(Arc::clone(fetcher), settings.clone())),
        Box::new(travis_hyde::source(Arc::clone(fetcher), settings.clone())),
        Box::new(buildings::city_centre(settings.clone())),
        Box::new(buildings::lux_and_lofts(settings.clone())),
        Box::new(buildings::the_ithacan(settings.clone())),
        Box::new(buildings::ivy_and_bear(settings.clone())),
        Box::new(buildings::collegetown_crossing(settings.clone())),
        Box::new(urban_ithaca::source(Arc::clone(fetcher), settings.clone())),
        Box::new(demos_johnny::source(settings.clone())),
        Box::new(lambrou::source(Arc::clone(fetcher), settings.clone())),
        Box::new(buildings::collegetown_terrace(settings.clone())),
        Box::new(cornell_offcampus::source(
            Arc::clone(fetcher),
            settings.clone(),
        )),
    ]
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::SourceError;

    /// Registry construction never touches the network; any fetcher does.
    struct NeverFetch;

    #[async_trait]
    impl Fetch for NeverFetch {
        async fn get(&self, url: &str) -> Result<String, SourceError> {
            Err(SourceError::Parse {
                message: format!("unexpected fetch of {url}"),
            })
        }
    }

    fn sources() -> Vec<Box<dyn ListingSource>> {
        let fetcher: Arc<dyn Fetch> = Arc::new(NeverFetch);
        all_sources(&fetcher, &ScrapeSettings::default())
    }

    #[test]
    fn loads_all_sources() {
        assert_eq!(sources().len(), EXPECTED_SOURCE_COUNT);
    }

    #[test]
    fn source_ids_are_unique() {
        let sources = sources();
        let mut ids: Vec<&str> = sources.iter().map(|s| s.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), EXPECTED_SOURCE_COUNT);
    }

    #[test]
    fn all_sources_have_required_fields() {
        for source in &sources() {
            assert!(!source.id().is_empty(), "source id is empty");
            assert!(!source.name().is_empty(), "source name is empty");
        }
    }
}

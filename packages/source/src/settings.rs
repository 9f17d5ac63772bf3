//! Shared scrape configuration and fallback defaults.
//!
//! Values that used to be scattered magic constants (lease term, fallback
//! coordinates, page ceiling, politeness delay) live in one struct that is
//! passed into every strategy constructor, so tests can override them.

/// Latitude of the Ithaca Commons, used when a listing cannot be geocoded.
const FALLBACK_LATITUDE: f64 = 42.444;

/// Longitude of the Ithaca Commons.
const FALLBACK_LONGITUDE: f64 = -76.501;

/// Configuration shared across strategy instances.
#[derive(Debug, Clone)]
pub struct ScrapeSettings {
    /// Lease term applied when a source does not state one.
    pub lease_term: String,
    /// Latitude emitted when coordinates are unresolved.
    pub fallback_latitude: f64,
    /// Longitude emitted when coordinates are unresolved.
    pub fallback_longitude: f64,
    /// Hard ceiling on pagination crawls, cycle protection included.
    pub max_pages: u32,
    /// Politeness delay between consecutive detail-page fetches (ms).
    pub detail_delay_ms: u64,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// User-agent header sent with every request.
    pub user_agent: String,
}

impl Default for ScrapeSettings {
    fn default() -> Self {
        Self {
            lease_term: "12-month".to_owned(),
            fallback_latitude: FALLBACK_LATITUDE,
            fallback_longitude: FALLBACK_LONGITUDE,
            max_pages: 20,
            detail_delay_ms: 500,
            request_timeout_secs: 30,
            user_agent: "Mozilla/5.0".to_owned(),
        }
    }
}

impl ScrapeSettings {
    /// Sets the politeness delay between detail fetches.
    #[must_use]
    pub const fn with_detail_delay_ms(mut self, ms: u64) -> Self {
        self.detail_delay_ms = ms;
        self
    }

    /// Sets the pagination ceiling.
    #[must_use]
    pub const fn with_max_pages(mut self, max: u32) -> Self {
        self.max_pages = max;
        self
    }

    /// Sets the lease term default.
    #[must_use]
    pub fn with_lease_term(mut self, term: &str) -> Self {
        term.clone_into(&mut self.lease_term);
        self
    }
}

//! Generic list+detail extraction engine.
//!
//! Covers every site that exposes an index of units:
//! 1. Fetches each configured index section and collects detail-page links
//!    via the site's [`LinkMatcher`], deduplicated by resolved absolute URL
//!    in insertion order so output order is reproducible run to run.
//! 2. Optionally follows a "next page" control, bounded by the configured
//!    page ceiling as runaway protection.
//! 3. Fetches each detail page (with a politeness delay between requests)
//!    and runs the site's field probes, then the shared inference rules.
//!
//! A failed index or detail fetch is logged and skipped; it never aborts
//! the rest of the crawl.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use housing_map_listing_models::{HeatingType, Listing, Neighborhood};
use regex::Regex;
use scraper::{Html, Selector};

use crate::fetch::Fetch;
use crate::inference;
use crate::probe::{self, ProbeProfile};
use crate::settings::ScrapeSettings;
use crate::{ListingSource, SourceError};

/// One index section of a site (e.g. its "houses" or "collegetown" page).
#[derive(Debug, Clone)]
pub struct IndexSection {
    /// Path appended to the site base URL.
    pub path: String,
    /// Pins the neighborhood when the section itself encodes the area,
    /// taking precedence over text-based inference.
    pub neighborhood_override: Option<Neighborhood>,
}

impl IndexSection {
    /// Section with no neighborhood override.
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_owned(),
            neighborhood_override: None,
        }
    }

    /// Section whose path encodes the neighborhood.
    #[must_use]
    pub fn with_neighborhood(path: &str, neighborhood: Neighborhood) -> Self {
        Self {
            path: path.to_owned(),
            neighborhood_override: Some(neighborhood),
        }
    }
}

/// How detail-page links are recognized on an index page.
#[derive(Debug, Clone)]
pub enum LinkMatcher {
    /// The raw `href` contains a substring.
    HrefContains(String),
    /// The raw `href` matches a pattern.
    HrefRegex(Regex),
    /// The anchor text matches a pattern (street-suffix tokens, "Bed").
    AnchorText(Regex),
    /// Every same-site link except known non-listing pages. For sites whose
    /// property pages have no recognizable URL shape.
    InternalPages {
        /// Links containing any of these substrings are skipped.
        excluded_tokens: Vec<String>,
        /// Exact paths that are never property pages (home, the index itself).
        excluded_paths: Vec<String>,
    },
}

/// Full configuration of one list+detail site.
#[derive(Debug, Clone)]
pub struct SiteProfile {
    /// Unique source identifier (e.g., `"ithaca_renting"`).
    pub id: &'static str,
    /// Human-readable source name.
    pub name: &'static str,
    /// Site base URL, no trailing slash.
    pub base_url: String,
    /// Index sections crawled in order.
    pub sections: Vec<IndexSection>,
    /// How detail links are recognized.
    pub link_matcher: LinkMatcher,
    /// Follow "next page" controls (bounded by the settings page ceiling).
    pub paginate: bool,
    /// When non-empty, a detail page lacking all of these phrases is
    /// treated as a non-listing page (contact, about) and skipped.
    pub marker_phrases: Vec<String>,
    /// Field-probe configuration for detail pages.
    pub probes: ProbeProfile,
    /// Per-site politeness delay override (ms).
    pub detail_delay_ms: Option<u64>,
}

/// Extraction strategy for sites exposing an index of units.
pub struct ListDetailSource {
    profile: SiteProfile,
    settings: ScrapeSettings,
    fetcher: Arc<dyn Fetch>,
}

impl ListDetailSource {
    /// Creates a source from a site profile and shared settings.
    #[must_use]
    pub const fn new(profile: SiteProfile, settings: ScrapeSettings, fetcher: Arc<dyn Fetch>) -> Self {
        Self {
            profile,
            settings,
            fetcher,
        }
    }

    /// Crawls one non-paginated index section.
    async fn crawl_section(&self, section: &IndexSection, listings: &mut Vec<Listing>) {
        let url = format!("{}{}", self.profile.base_url, section.path);
        log::info!("[{}] fetching index {url}", self.profile.name);

        let body = match self.fetcher.get(&url).await {
            Ok(body) => body,
            Err(e) => {
                log::warn!("[{}] failed to fetch index {url}: {e}", self.profile.name);
                return;
            }
        };

        let links = self.collect_links(&body);
        log::info!(
            "[{}] found {} detail links on {}",
            self.profile.name,
            links.len(),
            section.path,
        );

        self.process_links(&links, section.neighborhood_override, listings)
            .await;
    }

    /// Crawls an index section following "next page" controls, stopping when
    /// no control is found, a page is unreachable, or the page ceiling is
    /// reached (cycle protection — a self-referential next link must not
    /// crawl forever).
    async fn crawl_paginated(&self, section: &IndexSection, listings: &mut Vec<Listing>) {
        let mut current_url = format!("{}{}", self.profile.base_url, section.path);
        let mut page_count: u32 = 0;

        while page_count < self.settings.max_pages {
            page_count += 1;
            log::info!(
                "[{}] fetching index page {page_count} ({current_url})",
                self.profile.name,
            );

            let body = match self.fetcher.get(&current_url).await {
                Ok(body) => body,
                Err(e) => {
                    log::warn!(
                        "[{}] failed to fetch index page {page_count}: {e}",
                        self.profile.name,
                    );
                    return;
                }
            };

            let links = self.collect_links(&body);
            log::info!(
                "[{}] found {} detail links on page {page_count}",
                self.profile.name,
                links.len(),
            );

            self.process_links(&links, section.neighborhood_override, listings)
                .await;

            match self.find_next_url(&body) {
                Some(next) => current_url = next,
                None => {
                    log::info!("[{}] no next page control, crawl complete", self.profile.name);
                    return;
                }
            }
        }

        log::info!(
            "[{}] reached page ceiling ({}), stopping",
            self.profile.name,
            self.settings.max_pages,
        );
    }

    /// Fetches and probes each detail URL, isolating per-URL failures.
    async fn process_links(
        &self,
        links: &[String],
        neighborhood_override: Option<Neighborhood>,
        listings: &mut Vec<Listing>,
    ) {
        for (i, url) in links.iter().enumerate() {
            if i > 0 {
                let ms = self
                    .profile
                    .detail_delay_ms
                    .unwrap_or(self.settings.detail_delay_ms);
                if ms > 0 {
                    tokio::time::sleep(Duration::from_millis(ms)).await;
                }
            }

            match self.scrape_detail(url, neighborhood_override).await {
                Ok(Some(listing)) => {
                    log::info!("[{}] scraped: {}", self.profile.name, listing.title);
                    listings.push(listing);
                }
                Ok(None) => {}
                Err(e) => {
                    log::warn!("[{}] failed to scrape {url}: {e}", self.profile.name);
                }
            }
        }
    }

    /// Collects matching detail links from an index page, deduplicated by
    /// resolved absolute URL in insertion order.
    fn collect_links(&self, body: &str) -> Vec<String> {
        let document = Html::parse_document(body);
        // Href-pattern sites hang the detail href on elements other than
        // <a>; everything else scans anchors only.
        let selector_str = if matches!(self.profile.link_matcher, LinkMatcher::HrefRegex(_)) {
            "[href]"
        } else {
            "a[href]"
        };
        let href_sel = Selector::parse(selector_str).unwrap_or_else(|_| unreachable!());

        let mut seen: BTreeSet<String> = BTreeSet::new();
        let mut links = Vec::new();

        for element in document.select(&href_sel) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            if href.is_empty() {
                continue;
            }

            let resolved = resolve_url(&self.profile.base_url, href);
            let text = element.text().collect::<String>();
            if !self.link_matches(href, &resolved, text.trim()) {
                continue;
            }

            if seen.insert(resolved.clone()) {
                links.push(resolved);
            }
        }

        links
    }

    fn link_matches(&self, raw_href: &str, resolved: &str, anchor_text: &str) -> bool {
        match &self.profile.link_matcher {
            LinkMatcher::HrefContains(substring) => raw_href.contains(substring),
            LinkMatcher::HrefRegex(pattern) => pattern.is_match(raw_href),
            LinkMatcher::AnchorText(pattern) => pattern.is_match(anchor_text),
            LinkMatcher::InternalPages {
                excluded_tokens,
                excluded_paths,
            } => {
                if !resolved.starts_with(&self.profile.base_url) {
                    return false;
                }
                if excluded_tokens.iter().any(|t| resolved.contains(t.as_str())) {
                    return false;
                }
                let path = &resolved[self.profile.base_url.len()..];
                let path = if path.is_empty() { "/" } else { path };
                !excluded_paths.iter().any(|p| p == path)
            }
        }
    }

    /// Fetches one detail page and assembles a listing from its probes.
    /// Returns `None` for pages gated out by the marker-phrase check.
    async fn scrape_detail(
        &self,
        url: &str,
        neighborhood_override: Option<Neighborhood>,
    ) -> Result<Option<Listing>, SourceError> {
        let body = self.fetcher.get(url).await?;
        let document = Html::parse_document(&body);
        let probes = &self.profile.probes;

        if !self.profile.marker_phrases.is_empty()
            && !probe::has_any_phrase(&document, &self.profile.marker_phrases)
        {
            log::debug!("[{}] {url} has no unit markers, skipping", self.profile.name);
            return Ok(None);
        }

        let title = probe::title(&document, probes);
        let address = probe::address(&document, &title, probes);
        let description = probe::description(&document, probes);

        let neighborhood = neighborhood_override
            .unwrap_or_else(|| inference::infer_neighborhood(&address));
        let heating_type = if probes.infer_heating {
            inference::infer_heating(&description)
        } else {
            HeatingType::Unknown
        };

        Ok(Some(Listing {
            rent: probe::rent(&document),
            bedrooms: probe::bedrooms(&document, &title, &probes.bedrooms),
            bathrooms: probe::bathrooms(&document, &probes.bathrooms),
            photos: probe::photos(&document, &probes.photos, &self.profile.base_url),
            latitude: self.settings.fallback_latitude,
            longitude: self.settings.fallback_longitude,
            neighborhood,
            lease_term: self.settings.lease_term.clone(),
            heating_type,
            nearest_tcat_route: inference::infer_tcat_route(&address),
            elevation_warning: neighborhood.elevation_warning(),
            distance_from_campus_miles: None,
            is_official_listing: true,
            title,
            address,
            description,
            url: url.to_owned(),
            created_at: Utc::now(),
        }))
    }

    /// Locates a "next page" control: a link whose text matches `Next`
    /// case-insensitively, else an `a.next` element.
    fn find_next_url(&self, body: &str) -> Option<String> {
        let document = Html::parse_document(body);
        let a_sel = Selector::parse("a[href]").unwrap_or_else(|_| unreachable!());
        let next_re = Regex::new(r"(?i)next").unwrap_or_else(|_| unreachable!());

        for link in document.select(&a_sel) {
            let text = link.text().collect::<String>();
            if next_re.is_match(&text)
                && let Some(href) = link.value().attr("href")
            {
                return Some(resolve_url(&self.profile.base_url, href));
            }
        }

        let next_sel = Selector::parse("a.next").unwrap_or_else(|_| unreachable!());
        document
            .select(&next_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(|href| resolve_url(&self.profile.base_url, href))
    }
}

#[async_trait]
impl ListingSource for ListDetailSource {
    fn id(&self) -> &str {
        self.profile.id
    }

    fn name(&self) -> &str {
        self.profile.name
    }

    async fn scrape(&self) -> Result<Vec<Listing>, SourceError> {
        let mut listings = Vec::new();
        for section in &self.profile.sections {
            if self.profile.paginate {
                self.crawl_paginated(section, &mut listings).await;
            } else {
                self.crawl_section(section, &mut listings).await;
            }
        }
        Ok(listings)
    }
}

/// Resolves a possibly-relative href against the site base URL.
fn resolve_url(base_url: &str, href: &str) -> String {
    if href.starts_with("http") {
        href.to_owned()
    } else {
        format!("{base_url}{href}")
    }
}

//! Detail-page field probes.
//!
//! Every probe has a defined default — a missing element or pattern is never
//! an error, it just degrades to the default so the rest of the record still
//! gets extracted. Sites differ only in selector specifics, captured by
//! [`ProbeProfile`]; the probing approach itself is shared.

use regex::Regex;
use scraper::{Html, Selector};

use crate::inference::normalize_address;

/// Generic locality string used when no address can be located.
pub const LOCALITY: &str = "Ithaca, NY";

/// One step in a site's address-location chain, tried in order.
#[derive(Debug, Clone)]
pub enum AddressStep {
    /// Take the text of the first Google Maps link on the page.
    MapLink,
    /// Take the first text node matching an address-like pattern.
    TextPattern(Regex),
    /// Construct from the page title plus the locality suffix.
    TitleWithSuffix {
        /// Only use the title when it contains a digit (i.e. looks like a
        /// street address rather than a property name).
        require_digit: bool,
    },
}

/// How a site's bedroom count is located.
#[derive(Debug, Clone)]
pub enum BedroomProbe {
    /// Regex against the page's full text.
    BodyText,
    /// Regex against the full text, with "Studio" anywhere mapping to 0.
    BodyTextOrStudio,
    /// Regex against the page title only.
    TitleOnly,
    /// The site never publishes a count.
    Fixed(u32),
}

/// How a site's bathroom count is located.
#[derive(Debug, Clone)]
pub enum BathroomProbe {
    /// Regex against the page's full text.
    BodyText,
    /// The site never publishes a count.
    Fixed(f64),
}

/// Which image URLs count as listing photos.
#[derive(Debug, Clone, Default)]
pub struct PhotoRule {
    /// Keep only URLs containing one of these substrings; empty keeps all.
    pub include_substrings: Vec<String>,
    /// Drop SVG assets (logos, icons).
    pub exclude_svg: bool,
    /// Also read lazy-loaded `data-src` attributes.
    pub use_data_src: bool,
    /// Resolve relative URLs against the site base; when false, relative
    /// URLs are dropped instead.
    pub resolve_relative: bool,
}

/// Site-specific probe configuration for detail pages.
#[derive(Debug, Clone)]
pub struct ProbeProfile {
    /// Selectors tried in order for the listing title.
    pub title_selectors: Vec<String>,
    /// Substrings removed from the page-title fallback before use.
    pub title_strip: Vec<String>,
    /// Address-location chain, tried in order.
    pub address_steps: Vec<AddressStep>,
    /// Selectors tried in order for the description container.
    pub description_selectors: Vec<String>,
    /// Photo inclusion rules.
    pub photos: PhotoRule,
    pub bedrooms: BedroomProbe,
    pub bathrooms: BathroomProbe,
    /// Whether heating is inferred from the description. Sites that never
    /// publish heating copy emit Unknown instead.
    pub infer_heating: bool,
}

impl Default for ProbeProfile {
    fn default() -> Self {
        Self {
            title_selectors: vec!["h1".to_owned(), "h2".to_owned()],
            title_strip: vec![],
            address_steps: vec![],
            description_selectors: vec![],
            photos: PhotoRule::default(),
            bedrooms: BedroomProbe::BodyText,
            bathrooms: BathroomProbe::BodyText,
            infer_heating: true,
        }
    }
}

/// Extracts the listing title.
///
/// Tries the profile's selectors in order, then a cleaned `<title>`, then
/// the `"Unknown Property"` placeholder.
#[must_use]
pub fn title(document: &Html, profile: &ProbeProfile) -> String {
    for selector_str in &profile.title_selectors {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let text = element.text().collect::<String>().trim().to_owned();
            if !text.is_empty() {
                return text;
            }
        }
    }

    let title_sel = Selector::parse("title").unwrap_or_else(|_| unreachable!());
    if let Some(element) = document.select(&title_sel).next() {
        let mut text = element.text().collect::<String>();
        for strip in &profile.title_strip {
            text = text.replace(strip, "");
        }
        let cleaned = text
            .split(['—', '|'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_owned();
        if !cleaned.is_empty() {
            return cleaned;
        }
    }

    "Unknown Property".to_owned()
}

/// Resolves the listing address via the profile's step chain, falling back
/// to the generic locality string.
///
/// Extracted multi-part addresses are reduced to their street portion;
/// constructed fallbacks are returned as built.
#[must_use]
pub fn address(document: &Html, listing_title: &str, profile: &ProbeProfile) -> String {
    for step in &profile.address_steps {
        match step {
            AddressStep::MapLink => {
                let selector = Selector::parse(r#"a[href*="maps.google"]"#)
                    .unwrap_or_else(|_| unreachable!());
                if let Some(link) = document.select(&selector).next() {
                    let text = link.text().collect::<String>().trim().to_owned();
                    if !text.is_empty() {
                        return normalize_address(&text);
                    }
                }
            }
            AddressStep::TextPattern(pattern) => {
                if let Some(node) = first_text_node_matching(document, pattern) {
                    return normalize_address(&node);
                }
            }
            AddressStep::TitleWithSuffix { require_digit } => {
                if !*require_digit || listing_title.chars().any(|c| c.is_ascii_digit()) {
                    return format!("{listing_title}, {LOCALITY}");
                }
            }
        }
    }
    LOCALITY.to_owned()
}

/// Extracts the monthly rent from the first currency-looking text node.
/// Returns 0 when no price is found.
#[must_use]
pub fn rent(document: &Html) -> u32 {
    let pattern = Regex::new(r"\$([\d,]+)").unwrap_or_else(|_| unreachable!());
    let Some(node) = first_text_node_matching(document, &pattern) else {
        return 0;
    };
    pattern
        .captures(&node)
        .and_then(|caps| caps[1].replace(',', "").parse().ok())
        .unwrap_or(0)
}

/// Extracts the bedroom count per the profile's probe. Defaults to 1.
#[must_use]
pub fn bedrooms(document: &Html, listing_title: &str, probe: &BedroomProbe) -> u32 {
    let pattern = Regex::new(r"(?i)(\d+)\s*(?:bed|bdrm)").unwrap_or_else(|_| unreachable!());

    match probe {
        BedroomProbe::BodyText => capture_u32(&pattern, &page_text(document)).unwrap_or(1),
        BedroomProbe::BodyTextOrStudio => {
            let text = page_text(document);
            capture_u32(&pattern, &text).unwrap_or_else(|| {
                if listing_title.contains("Studio") || text.contains("Studio") {
                    0
                } else {
                    1
                }
            })
        }
        BedroomProbe::TitleOnly => capture_u32(&pattern, listing_title).unwrap_or(1),
        BedroomProbe::Fixed(count) => *count,
    }
}

/// Extracts the bathroom count per the profile's probe. Defaults to 1.0.
#[must_use]
pub fn bathrooms(document: &Html, probe: &BathroomProbe) -> f64 {
    match probe {
        BathroomProbe::BodyText => {
            let pattern =
                Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*bath").unwrap_or_else(|_| unreachable!());
            pattern
                .captures(&page_text(document))
                .and_then(|caps| caps[1].parse().ok())
                .unwrap_or(1.0)
        }
        BathroomProbe::Fixed(count) => *count,
    }
}

/// Extracts the description from the first matching container, falling back
/// to every paragraph longer than 50 characters, newline-joined in document
/// order.
#[must_use]
pub fn description(document: &Html, profile: &ProbeProfile) -> String {
    for selector_str in &profile.description_selectors {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let text = element.text().collect::<String>().trim().to_owned();
            if !text.is_empty() {
                return text;
            }
        }
    }

    let p_sel = Selector::parse("p").unwrap_or_else(|_| unreachable!());
    document
        .select(&p_sel)
        .map(|p| p.text().collect::<String>().trim().to_owned())
        .filter(|text| text.len() > 50)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collects listing photo URLs per the site's rule, truncated to five in
/// document order.
#[must_use]
pub fn photos(document: &Html, rule: &PhotoRule, base_url: &str) -> Vec<String> {
    let img_sel = Selector::parse("img").unwrap_or_else(|_| unreachable!());
    let mut urls = Vec::new();

    for img in document.select(&img_sel) {
        let src = img.value().attr("src").or_else(|| {
            if rule.use_data_src {
                img.value().attr("data-src")
            } else {
                None
            }
        });
        let Some(src) = src else {
            continue;
        };
        if src.is_empty() {
            continue;
        }
        if rule.exclude_svg && src.ends_with("svg") {
            continue;
        }
        if !rule.include_substrings.is_empty()
            && !rule.include_substrings.iter().any(|s| src.contains(s))
        {
            continue;
        }

        if src.starts_with("http") {
            urls.push(src.to_owned());
        } else if rule.resolve_relative {
            urls.push(format!("{base_url}{src}"));
        }

        if urls.len() == 5 {
            break;
        }
    }

    urls
}

/// Whether the page text contains any of the given phrases,
/// case-insensitively. Used to gate non-listing pages (contact, about).
#[must_use]
pub fn has_any_phrase(document: &Html, phrases: &[String]) -> bool {
    let text = page_text(document).to_lowercase();
    phrases
        .iter()
        .any(|phrase| text.contains(&phrase.to_lowercase()))
}

/// The document's full visible text, space-joined in document order.
#[must_use]
pub fn page_text(document: &Html) -> String {
    document
        .root_element()
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// First text node whose content matches `pattern`, trimmed.
fn first_text_node_matching(document: &Html, pattern: &Regex) -> Option<String> {
    document
        .root_element()
        .text()
        .find(|node| pattern.is_match(node))
        .map(|node| node.trim().to_owned())
}

fn capture_u32(pattern: &Regex, text: &str) -> Option<u32> {
    pattern.captures(text).and_then(|caps| caps[1].parse().ok())
}

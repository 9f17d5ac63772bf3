//! Shared normalization rules.
//!
//! Pure, deterministic text-to-category mappings applied identically by
//! every extraction strategy. Matching is case-insensitive substring search
//! with first-match-wins precedence; the keyword lists are deliberately not
//! word-boundary-aware ("gas" matches "Gaslight Village"), an accepted
//! limitation of the heuristic.

use housing_map_listing_models::{HeatingType, Neighborhood, TcatRoute};

/// Reduces a multi-part address to its street portion (content before the
/// first comma).
#[must_use]
pub fn normalize_address(address: &str) -> String {
    address
        .split(',')
        .next()
        .unwrap_or(address)
        .trim()
        .to_owned()
}

/// Infers the heating type from description copy.
#[must_use]
pub fn infer_heating(description: &str) -> HeatingType {
    let lower = description.to_lowercase();
    if contains_any(&lower, &["baseboard", "electric heat"]) {
        return HeatingType::ElectricBaseboard;
    }
    if lower.contains("gas") {
        return HeatingType::Gas;
    }
    if contains_any(&lower, &["radiator", "steam"]) {
        return HeatingType::Steam;
    }
    HeatingType::Unknown
}

/// Infers the nearest TCAT route from street-name keywords in the address.
#[must_use]
pub fn infer_tcat_route(address: &str) -> TcatRoute {
    let lower = address.to_lowercase();
    if contains_any(&lower, &["stewart", "college"]) {
        return TcatRoute::Route30;
    }
    if contains_any(&lower, &["dryden", "linden"]) {
        return TcatRoute::Route10;
    }
    if contains_any(&lower, &["university", "thurston", "highland"]) {
        return TcatRoute::Route81;
    }
    TcatRoute::Unknown
}

/// Infers the neighborhood from street-name keywords in the address.
///
/// Downtown is the catch-all: genuinely downtown addresses and addresses
/// the keywords don't cover land there alike.
#[must_use]
pub fn infer_neighborhood(address: &str) -> Neighborhood {
    let lower = address.to_lowercase();
    if contains_any(&lower, &["college", "dryden"]) {
        return Neighborhood::Collegetown;
    }
    if contains_any(&lower, &["stewart", "buffalo"]) {
        return Neighborhood::FallCreek;
    }
    if contains_any(&lower, &["highland", "thurston"]) {
        return Neighborhood::Lansing;
    }

    if lower.contains("stewart") {
        return Neighborhood::FallCreek;
    }
    if lower.contains("thurston") {
        return Neighborhood::FallCreek;
    }
    if lower.contains("highland") {
        return Neighborhood::Lansing;
    }

    Neighborhood::Downtown
}

/// Checks if `haystack` contains any of the given `needles`.
fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_multi_part_addresses() {
        assert_eq!(
            normalize_address("408 Stewart Ave, Ithaca, NY 14850"),
            "408 Stewart Ave"
        );
        assert_eq!(normalize_address("Ithaca"), "Ithaca");
        assert_eq!(normalize_address("  210 Dryden Rd , Ithaca"), "210 Dryden Rd");
    }

    #[test]
    fn baseboard_wins_over_other_heating_keywords() {
        // Precedence: "baseboard"/"electric heat" is checked before "gas"
        // and "radiator"/"steam", whatever else the copy mentions.
        assert_eq!(
            infer_heating("Electric BASEBOARD heat, gas stove, steam shower"),
            HeatingType::ElectricBaseboard
        );
        assert_eq!(
            infer_heating("tenant pays electric heat"),
            HeatingType::ElectricBaseboard
        );
    }

    #[test]
    fn maps_heating_keywords() {
        assert_eq!(infer_heating("Gas heat included"), HeatingType::Gas);
        assert_eq!(infer_heating("Old radiator charm"), HeatingType::Steam);
        assert_eq!(infer_heating("STEAM heat"), HeatingType::Steam);
        assert_eq!(infer_heating("Cozy and warm"), HeatingType::Unknown);
        assert_eq!(infer_heating(""), HeatingType::Unknown);
    }

    #[test]
    fn maps_tcat_routes() {
        assert_eq!(infer_tcat_route("408 Stewart Ave"), TcatRoute::Route30);
        assert_eq!(infer_tcat_route("312 College Ave"), TcatRoute::Route30);
        assert_eq!(infer_tcat_route("210 Linden Ave"), TcatRoute::Route10);
        assert_eq!(infer_tcat_route("1 University Ave"), TcatRoute::Route81);
        assert_eq!(infer_tcat_route("402 Thurston Ave"), TcatRoute::Route81);
        assert_eq!(infer_tcat_route("100 Highland Ave"), TcatRoute::Route81);
        assert_eq!(infer_tcat_route("301 E State St"), TcatRoute::Unknown);
    }

    #[test]
    fn dryden_is_collegetown_on_route_10() {
        // "dryden" anywhere in the address pins both categorical outputs,
        // independent of other keywords later in the string.
        let addr = "210 Dryden Rd, Ithaca, NY (near Thurston)";
        assert_eq!(infer_neighborhood(addr), Neighborhood::Collegetown);
        assert_eq!(infer_tcat_route(addr), TcatRoute::Route10);
    }

    #[test]
    fn maps_neighborhoods() {
        assert_eq!(
            infer_neighborhood("312 College Ave"),
            Neighborhood::Collegetown
        );
        assert_eq!(
            infer_neighborhood("408 Stewart Ave"),
            Neighborhood::FallCreek
        );
        assert_eq!(
            infer_neighborhood("110 E Buffalo St"),
            Neighborhood::FallCreek
        );
        assert_eq!(infer_neighborhood("100 Highland Ave"), Neighborhood::Lansing);
        assert_eq!(infer_neighborhood("402 Thurston Ave"), Neighborhood::Lansing);
        assert_eq!(infer_neighborhood("301 E State St"), Neighborhood::Downtown);
        assert_eq!(infer_neighborhood(""), Neighborhood::Downtown);
    }

    #[test]
    fn college_beats_stewart_in_precedence() {
        assert_eq!(
            infer_neighborhood("College Ave at Stewart Ave"),
            Neighborhood::Collegetown
        );
    }

    #[test]
    fn varna_is_never_inferred() {
        for addr in ["Varna", "1 Varna Rd", "Dryden Rd in Varna"] {
            assert_ne!(infer_neighborhood(addr), Neighborhood::Varna);
        }
    }
}

// crates/medalmap-core/src/normalize.rs

//! # Name Normalizer
//!
//! Historical and abbreviated team names in the results table ("UK",
//! "USA", "England") have to line up with the names a map uses. Both sides
//! go through [`normalize_country_name`] before any comparison.

use crate::text::fold_key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const GREAT_BRITAIN: &str = "Great Britain";
pub const UNITED_STATES: &str = "United States";

/// Folded alias -> canonical label.
static SYNONYMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("england", GREAT_BRITAIN),
        ("uk", GREAT_BRITAIN),
        ("united kingdom", GREAT_BRITAIN),
        ("usa", UNITED_STATES),
        ("us", UNITED_STATES),
        ("united states", UNITED_STATES),
        ("united states of america", UNITED_STATES),
    ]
    .into_iter()
    .collect()
});

/// Canonicalize a country/team name.
///
/// The whole string is matched case-insensitively against the known synonym
/// groups. Anything else is returned unchanged, original casing included.
///
/// Matching goes through [`fold_key`], which also transliterates accents,
/// so "Ünited Kingdom" resolves like "United Kingdom". Substrings never
/// match: "United States-1" is left alone.
///
/// ```rust
/// use medalmap_core::normalize_country_name;
///
/// assert_eq!(normalize_country_name("uk"), "Great Britain");
/// assert_eq!(normalize_country_name("Usa"), "United States");
/// assert_eq!(normalize_country_name("France"), "France");
/// ```
pub fn normalize_country_name(name: &str) -> &str {
    match SYNONYMS.get(fold_key(name).as_str()) {
        Some(canonical) => *canonical,
        None => name,
    }
}

/// `true` if `name` is one of the recognized aliases.
pub fn is_alias(name: &str) -> bool {
    SYNONYMS.contains_key(fold_key(name).as_str())
}

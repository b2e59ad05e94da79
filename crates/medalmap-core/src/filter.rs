// crates/medalmap-core/src/filter.rs
use crate::model::ResultRow;
use crate::normalize::normalize_country_name;
use serde::{Deserialize, Serialize};

/// How a row's team is compared against the selected country.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Normalized team contains the normalized target ("United States-1"
    /// matches "United States"). Can over-match: "Guinea" also selects
    /// "Equatorial Guinea" and "Papua New Guinea".
    #[default]
    Contains,
    /// Normalized team equals the normalized target.
    Exact,
}

impl MatchMode {
    /// `target` must already be normalized.
    #[inline]
    pub fn matches(self, team: &str, target: &str) -> bool {
        let team = normalize_country_name(team);
        match self {
            MatchMode::Contains => team.contains(target),
            MatchMode::Exact => team == target,
        }
    }
}

/// All rows belonging to `country` (a map-feature name, not yet normalized).
///
/// A blank country selects nothing.
pub fn filter_by_country<'a>(
    rows: &'a [ResultRow],
    country: &str,
    mode: MatchMode,
) -> Vec<&'a ResultRow> {
    let target = normalize_country_name(country);
    if target.trim().is_empty() {
        return Vec::new();
    }
    rows.iter()
        .filter(|row| mode.matches(&row.team, target))
        .collect()
}

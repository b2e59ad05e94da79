// crates/medalmap-core/src/model.rs
use crate::normalize::normalize_country_name;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Medal awarded for a result row.
///
/// Parsing is exact and case-sensitive: only `"Gold"`, `"Silver"` and
/// `"Bronze"` are medals. Empty cells, `"NA"` and anything else mean no
/// medal was awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub const ALL: [Medal; 3] = [Medal::Gold, Medal::Silver, Medal::Bronze];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Gold" => Some(Medal::Gold),
            "Silver" => Some(Medal::Silver),
            "Bronze" => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw row structure as it comes from the CSV, keyed by header name.
///
/// Only `Team`, `Year`, `Sport`, `Event` and `Medal` are part of the
/// contract. The other columns of `athlete_events.csv` are picked up when
/// present and ignored otherwise.
#[derive(Debug, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Sport")]
    pub sport: String,
    #[serde(rename = "Event")]
    pub event: String,
    #[serde(rename = "Medal", default)]
    pub medal: Option<String>,
    #[serde(rename = "NOC", default)]
    pub noc: Option<String>,
    #[serde(rename = "Season", default)]
    pub season: Option<String>,
    #[serde(rename = "Games", default)]
    pub games: Option<String>,
    #[serde(rename = "City", default)]
    pub city: Option<String>,
}

/// One athlete-event entry. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub team: String,
    pub year: i32,
    pub sport: String,
    pub event: String,
    pub medal: Option<Medal>,

    pub noc: Option<String>,
    pub season: Option<String>,
    pub games: Option<String>,
    pub city: Option<String>,
}

impl ResultRow {
    /// Row with only the contract columns filled in.
    pub fn new(
        team: impl Into<String>,
        year: i32,
        sport: impl Into<String>,
        event: impl Into<String>,
        medal: Option<Medal>,
    ) -> Self {
        Self {
            team: team.into(),
            year,
            sport: sport.into(),
            event: event.into(),
            medal,
            noc: None,
            season: None,
            games: None,
            city: None,
        }
    }

    pub fn has_medal(&self) -> bool {
        self.medal.is_some()
    }

    /// Team name after synonym normalization ("USA" -> "United States").
    pub fn canonical_team(&self) -> &str {
        normalize_country_name(&self.team)
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.is_empty())
}

impl From<RawRow> for ResultRow {
    fn from(raw: RawRow) -> Self {
        Self {
            medal: raw.medal.as_deref().and_then(Medal::from_label),
            team: raw.team,
            year: raw.year,
            sport: raw.sport,
            event: raw.event,
            noc: non_empty(raw.noc),
            season: non_empty(raw.season),
            games: non_empty(raw.games),
            city: non_empty(raw.city),
        }
    }
}

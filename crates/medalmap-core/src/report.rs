// crates/medalmap-core/src/report.rs

//! # Country Report
//!
//! Everything the info panel shows after a country is clicked:
//!
//! ```text
//! rows ─► filter ─► (medal rows) ─► dedup ─► by sport ─► top N
//!                 └──────────────► tally ─► percentages
//! index ─► most / least / own count ─► comparison scale
//! ```

use crate::dataset::{Dataset, DatasetState};
use crate::dedup::dedup_events;
use crate::error::Result;
use crate::filter::MatchMode;
use crate::normalize::normalize_country_name;
use crate::percent::{MedalPercentages, MedalTally};
use crate::ranker::{CountryCount, MedalIndex};
use crate::sports::{aggregate_by_sport, top_sports, SportCount, DEFAULT_TOP_N};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

/// Placeholder shown when a country has nothing to report.
pub const NO_DATA_MESSAGE: &str = "No data available.";

/// Per-report knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    pub top_n: usize,
    pub match_mode: MatchMode,
    /// Drop rows without a medal before deduplicating sport events.
    pub medalled_only: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            match_mode: MatchMode::Contains,
            medalled_only: true,
        }
    }
}

/// Where the selected country sits between the most and least decorated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub most: Option<CountryCount>,
    pub least: Option<CountryCount>,
    /// Unique-medal count of the selected country. `None`: not found.
    pub own: Option<usize>,
    /// 1-based rank of the selected country by unique-medal count.
    pub rank: Option<usize>,
    /// `own / most * 100`, the dot position on the comparison scale.
    pub scale_position: Option<f64>,
}

impl Comparison {
    pub fn from_index(index: &MedalIndex, country: &str) -> Self {
        let most = index.most().cloned();
        let own = index.count_for(country);
        let scale_position = match (own, &most) {
            (Some(own), Some(most)) if most.count > 0 => {
                Some(own as f64 / most.count as f64 * 100.0)
            }
            _ => None,
        };
        Self {
            most,
            least: index.least().cloned(),
            own,
            rank: index.rank_of(country),
            scale_position,
        }
    }
}

/// Aggregated statistics for one selected country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryReport {
    /// Name as selected on the map.
    pub country: String,
    pub canonical: String,
    pub matched_rows: usize,
    pub top_sports: Vec<SportCount>,
    pub tally: MedalTally,
    /// `None` when the country has no medals.
    pub percentages: Option<MedalPercentages>,
    pub comparison: Comparison,
}

impl CountryReport {
    /// Report for a country with nothing to show (or a dataset not loaded yet).
    pub fn empty(country: &str) -> Self {
        Self {
            country: country.to_owned(),
            canonical: normalize_country_name(country).to_owned(),
            matched_rows: 0,
            top_sports: Vec::new(),
            tally: MedalTally::default(),
            percentages: None,
            comparison: Comparison::default(),
        }
    }

    /// `false` means the panel should show [`NO_DATA_MESSAGE`].
    pub fn has_data(&self) -> bool {
        !self.top_sports.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build the full report for `country` against `dataset`.
pub fn build_report(dataset: &Dataset, country: &str, opts: &ReportOptions) -> CountryReport {
    let started = Instant::now();
    let canonical = normalize_country_name(country);

    let rows = dataset.filter_country(country, opts.match_mode);
    let events = if opts.medalled_only {
        dedup_events(rows.iter().copied().filter(|r| r.has_medal()))
    } else {
        dedup_events(rows.iter().copied())
    };
    let top = top_sports(aggregate_by_sport(&events), opts.top_n);
    let tally = MedalTally::from_rows(rows.iter().copied());

    let report = CountryReport {
        country: country.to_owned(),
        canonical: canonical.to_owned(),
        matched_rows: rows.len(),
        top_sports: top,
        tally,
        percentages: tally.percentages(),
        comparison: Comparison::from_index(dataset.index(), canonical),
    };

    debug!(
        "Report built - country={}, rows={}, events={}, elapsed={:?}",
        canonical,
        report.matched_rows,
        events.len(),
        started.elapsed()
    );
    report
}

impl Dataset {
    pub fn country_report(&self, country: &str, opts: &ReportOptions) -> CountryReport {
        build_report(self, country, opts)
    }
}

impl DatasetState {
    /// Before the dataset is ready this yields an empty report, not an error.
    pub fn country_report(&self, country: &str, opts: &ReportOptions) -> CountryReport {
        match self.dataset() {
            Some(ds) => ds.country_report(country, opts),
            None => CountryReport::empty(country),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Medal, ResultRow};

    fn dataset() -> Dataset {
        Dataset::from_rows(vec![
            ResultRow::new("USA", 2000, "Swimming", "100m", Some(Medal::Gold)),
            ResultRow::new("USA", 2000, "Swimming", "Relay", Some(Medal::Silver)),
            ResultRow::new("USA", 2000, "Swimming", "Relay", Some(Medal::Silver)),
            ResultRow::new("USA", 2004, "Athletics", "100m", None),
            ResultRow::new("France", 2000, "Fencing", "Epee", Some(Medal::Bronze)),
            ResultRow::new("Chad", 2000, "Athletics", "100m", None),
        ])
    }

    #[test]
    fn report_combines_all_aggregates() {
        let report =
            dataset().country_report("United States of America", &ReportOptions::default());
        assert!(report.has_data());
        assert_eq!(report.canonical, "United States");
        assert_eq!(report.matched_rows, 4);
        assert_eq!(report.top_sports, vec![SportCount { sport: "Swimming".into(), count: 2 }]);
        assert_eq!(report.tally, MedalTally { gold: 1, silver: 2, bronze: 0 });
        let pct = report.percentages.unwrap();
        assert_eq!(pct.gold, 33.33);
        assert_eq!(pct.silver, 66.67);

        let cmp = &report.comparison;
        assert_eq!(cmp.own, Some(2));
        assert_eq!(cmp.rank, Some(1));
        assert_eq!(cmp.most.as_ref().unwrap().country, "United States");
        assert_eq!(cmp.least.as_ref().unwrap().country, "France");
        assert_eq!(cmp.scale_position, Some(100.0));
    }

    #[test]
    fn unmedaled_rows_can_be_kept_as_their_own_group() {
        let opts = ReportOptions { medalled_only: false, ..ReportOptions::default() };
        let report = dataset().country_report("USA", &opts);
        assert_eq!(report.top_sports.len(), 2);
        assert_eq!(report.top_sports[1], SportCount { sport: "Athletics".into(), count: 1 });
    }

    #[test]
    fn country_without_medals_has_no_data() {
        let report = dataset().country_report("Chad", &ReportOptions::default());
        assert!(!report.has_data());
        assert_eq!(report.matched_rows, 1);
        assert_eq!(report.percentages, None);
        assert_eq!(report.comparison.own, None);
        assert_eq!(report.comparison.rank, None);
        assert_eq!(report.comparison.scale_position, None);
    }

    #[test]
    fn not_loaded_state_reports_empty() {
        let report = DatasetState::NotLoaded.country_report("UK", &ReportOptions::default());
        assert!(!report.has_data());
        assert_eq!(report.canonical, "Great Britain");
        assert_eq!(report.comparison, Comparison::default());
    }

    #[test]
    fn report_serializes_to_json() {
        let json = dataset()
            .country_report("France", &ReportOptions::default())
            .to_json()
            .unwrap();
        assert!(json.contains("\"canonical\": \"France\""));
        assert!(json.contains("\"Fencing\""));
    }
}

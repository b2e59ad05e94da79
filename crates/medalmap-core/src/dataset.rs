// crates/medalmap-core/src/dataset.rs
use crate::common::DatasetStats;
use crate::error::{MedalError, Result};
use crate::filter::{filter_by_country, MatchMode};
use crate::model::ResultRow;
use crate::ranker::MedalIndex;
use std::collections::HashSet;
use std::sync::Arc;

/// Immutable snapshot of the results table plus its precomputed
/// unique-medal index.
///
/// Cloning is cheap: rows and index are shared.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Arc<[ResultRow]>,
    index: Arc<MedalIndex>,
}

impl Dataset {
    pub fn from_rows(rows: Vec<ResultRow>) -> Self {
        let index = MedalIndex::build(&rows);
        Self {
            rows: rows.into(),
            index: Arc::new(index),
        }
    }

    pub fn empty() -> Self {
        Self::from_rows(Vec::new())
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn index(&self) -> &MedalIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows for a map-feature country name.
    pub fn filter_country(&self, country: &str, mode: MatchMode) -> Vec<&ResultRow> {
        filter_by_country(&self.rows, country, mode)
    }

    pub fn stats(&self) -> DatasetStats {
        let sports: HashSet<&str> = self.rows.iter().map(|r| r.sport.as_str()).collect();
        DatasetStats {
            rows: self.rows.len(),
            medal_rows: self.rows.iter().filter(|r| r.has_medal()).count(),
            countries: self.index.len(),
            sports: sports.len(),
            first_year: self.rows.iter().map(|r| r.year).min(),
            last_year: self.rows.iter().map(|r| r.year).max(),
        }
    }
}

impl From<Vec<ResultRow>> for Dataset {
    fn from(rows: Vec<ResultRow>) -> Self {
        Self::from_rows(rows)
    }
}

/// Whether the results table has arrived yet.
///
/// Country selection should only be enabled once this is `Ready`.
#[derive(Debug, Clone, Default)]
pub enum DatasetState {
    #[default]
    NotLoaded,
    Ready(Dataset),
}

impl DatasetState {
    pub fn is_ready(&self) -> bool {
        matches!(self, DatasetState::Ready(_))
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            DatasetState::Ready(ds) => Some(ds),
            DatasetState::NotLoaded => None,
        }
    }

    /// Like [`DatasetState::dataset`], but a missing dataset is an error.
    pub fn require_ready(&self) -> Result<&Dataset> {
        self.dataset().ok_or(MedalError::NotLoaded)
    }
}

impl From<Dataset> for DatasetState {
    fn from(ds: Dataset) -> Self {
        DatasetState::Ready(ds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Medal;

    #[test]
    fn stats_summarize_rows() {
        let ds = Dataset::from_rows(vec![
            ResultRow::new("USA", 1996, "Swimming", "100m", Some(Medal::Gold)),
            ResultRow::new("UK", 2012, "Cycling", "Sprint", Some(Medal::Gold)),
            ResultRow::new("Chad", 2004, "Athletics", "100m", None),
        ]);
        let stats = ds.stats();
        assert_eq!(stats.rows, 3);
        assert_eq!(stats.medal_rows, 2);
        assert_eq!(stats.countries, 2);
        assert_eq!(stats.sports, 3);
        assert_eq!(stats.first_year, Some(1996));
        assert_eq!(stats.last_year, Some(2012));
    }

    #[test]
    fn empty_dataset_has_empty_stats() {
        let stats = Dataset::empty().stats();
        assert_eq!(stats, DatasetStats::default());
    }

    #[test]
    fn not_loaded_state_is_explicit() {
        let state = DatasetState::default();
        assert!(!state.is_ready());
        assert!(matches!(state.require_ready(), Err(MedalError::NotLoaded)));

        let state = DatasetState::from(Dataset::empty());
        assert!(state.is_ready());
        assert!(state.require_ready().is_ok());
    }
}

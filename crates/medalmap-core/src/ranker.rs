// crates/medalmap-core/src/ranker.rs

//! # Cross-Country Ranker
//!
//! Counts, for every canonical country, the distinct `(year, sport, event)`
//! combinations in which it won at least one medal. The medal type is not
//! part of the key, so a country winning both gold and bronze in the same
//! event counts that event once.
//!
//! The index is built in one pass when a dataset is loaded and then only
//! read, so comparisons are lookups instead of full-table scans.

use crate::model::ResultRow;
use crate::normalize::normalize_country_name;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Grouping key for the unique-medal count. Medal type is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKey<'a> {
    pub year: i32,
    pub sport: &'a str,
    pub event: &'a str,
}

impl<'a> From<&'a ResultRow> for EventKey<'a> {
    fn from(row: &'a ResultRow) -> Self {
        Self {
            year: row.year,
            sport: &row.sport,
            event: &row.event,
        }
    }
}

/// A canonical country with its unique-medal count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCount {
    pub country: String,
    pub count: usize,
}

/// Canonical country -> unique-medal count, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct MedalIndex {
    entries: Vec<CountryCount>,
    positions: HashMap<String, usize>,
}

impl MedalIndex {
    /// Single pass over `rows`. Rows without a medal are ignored.
    pub fn build(rows: &[ResultRow]) -> Self {
        let mut order: Vec<&str> = Vec::new();
        let mut sets: HashMap<&str, HashSet<EventKey<'_>>> = HashMap::new();

        for row in rows.iter().filter(|r| r.has_medal()) {
            let country = normalize_country_name(&row.team);
            sets.entry(country)
                .or_insert_with(|| {
                    order.push(country);
                    HashSet::new()
                })
                .insert(EventKey::from(row));
        }

        let mut entries = Vec::with_capacity(order.len());
        let mut positions = HashMap::with_capacity(order.len());
        for country in order {
            let count = sets.get(country).map_or(0, HashSet::len);
            positions.insert(country.to_owned(), entries.len());
            entries.push(CountryCount {
                country: country.to_owned(),
                count,
            });
        }

        Self { entries, positions }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every indexed country in first-seen order.
    pub fn countries(&self) -> &[CountryCount] {
        &self.entries
    }

    /// Country with the largest count. The first one seen wins ties.
    pub fn most(&self) -> Option<&CountryCount> {
        let mut best: Option<&CountryCount> = None;
        for entry in &self.entries {
            if best.map_or(true, |b| entry.count > b.count) {
                best = Some(entry);
            }
        }
        best
    }

    /// Country with the smallest count. The first one seen wins ties.
    pub fn least(&self) -> Option<&CountryCount> {
        let mut best: Option<&CountryCount> = None;
        for entry in &self.entries {
            if best.map_or(true, |b| entry.count < b.count) {
                best = Some(entry);
            }
        }
        best
    }

    /// Unique-medal count for `country`, normalized before lookup.
    ///
    /// `None` means the country never won a medal in this dataset.
    pub fn count_for(&self, country: &str) -> Option<usize> {
        self.get(country).map(|e| e.count)
    }

    pub fn get(&self, country: &str) -> Option<&CountryCount> {
        let key = normalize_country_name(country);
        self.positions.get(key).map(|&i| &self.entries[i])
    }

    /// Countries by count, descending. Ties keep first-seen order.
    pub fn ranked(&self) -> Vec<&CountryCount> {
        let mut out: Vec<&CountryCount> = self.entries.iter().collect();
        out.sort_by(|a, b| b.count.cmp(&a.count));
        out
    }

    /// 1-based competition rank: one more than the number of countries
    /// with a strictly larger count.
    pub fn rank_of(&self, country: &str) -> Option<usize> {
        let count = self.count_for(country)?;
        Some(1 + self.entries.iter().filter(|e| e.count > count).count())
    }
}

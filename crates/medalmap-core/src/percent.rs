// crates/medalmap-core/src/percent.rs

//! # Medal Percentage Calculator
//!
//! Shares are computed over raw medal rows, one per athlete. Team events
//! therefore weigh more here than in the deduplicated sport counts.

use crate::model::{Medal, ResultRow};
use serde::{Deserialize, Serialize};

/// Raw gold/silver/bronze row counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalTally {
    pub gold: usize,
    pub silver: usize,
    pub bronze: usize,
}

impl MedalTally {
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a ResultRow>,
    {
        let mut tally = Self::default();
        for medal in rows.into_iter().filter_map(|row| row.medal) {
            tally.add(medal);
        }
        tally
    }

    #[inline]
    pub fn add(&mut self, medal: Medal) {
        match medal {
            Medal::Gold => self.gold += 1,
            Medal::Silver => self.silver += 1,
            Medal::Bronze => self.bronze += 1,
        }
    }

    pub fn get(&self, medal: Medal) -> usize {
        match medal {
            Medal::Gold => self.gold,
            Medal::Silver => self.silver,
            Medal::Bronze => self.bronze,
        }
    }

    pub fn total(&self) -> usize {
        self.gold + self.silver + self.bronze
    }

    /// `None` when no medals were counted.
    pub fn percentages(&self) -> Option<MedalPercentages> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let share = |n: usize| round2(n as f64 / total as f64 * 100.0);
        Some(MedalPercentages {
            gold: share(self.gold),
            silver: share(self.silver),
            bronze: share(self.bronze),
        })
    }
}

/// Percent of a country's own medals by type, rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MedalPercentages {
    pub gold: f64,
    pub silver: f64,
    pub bronze: f64,
}

impl MedalPercentages {
    pub fn get(&self, medal: Medal) -> f64 {
        match medal {
            Medal::Gold => self.gold,
            Medal::Silver => self.silver,
            Medal::Bronze => self.bronze,
        }
    }

    pub fn sum(&self) -> f64 {
        self.gold + self.silver + self.bronze
    }
}

/// Gold/silver/bronze shares of `rows`, or `None` if none carry a medal.
pub fn medal_percentages<'a, I>(rows: I) -> Option<MedalPercentages>
where
    I: IntoIterator<Item = &'a ResultRow>,
{
    MedalTally::from_rows(rows).percentages()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

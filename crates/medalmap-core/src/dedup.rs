// crates/medalmap-core/src/dedup.rs

//! # Event Deduplicator
//!
//! The results table has one row per athlete, so a relay or team medal
//! shows up once per team member. Collapsing rows on
//! `(year, sport, event, medal)` counts each awarded medal once.

use crate::model::{Medal, ResultRow};
use serde::Serialize;
use std::collections::HashSet;

/// One deduplicated medal event, borrowing its strings from the source row.
///
/// Rows without a medal form their own `medal: None` group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MedalEvent<'a> {
    pub year: i32,
    pub sport: &'a str,
    pub event: &'a str,
    pub medal: Option<Medal>,
}

impl<'a> From<&'a ResultRow> for MedalEvent<'a> {
    fn from(row: &'a ResultRow) -> Self {
        Self {
            year: row.year,
            sport: &row.sport,
            event: &row.event,
            medal: row.medal,
        }
    }
}

/// One record per distinct key, in first-seen order.
pub fn dedup_events<'a, I>(rows: I) -> Vec<MedalEvent<'a>>
where
    I: IntoIterator<Item = &'a ResultRow>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for row in rows {
        let event = MedalEvent::from(row);
        if seen.insert(event) {
            out.push(event);
        }
    }
    out
}

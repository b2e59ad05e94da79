// crates/medalmap-core/src/sports.rs
use crate::dedup::MedalEvent;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of sports shown per country unless configured otherwise.
pub const DEFAULT_TOP_N: usize = 3;

/// Deduplicated medal events won in one sport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportCount {
    pub sport: String,
    pub count: usize,
}

/// Group deduplicated events by sport.
///
/// Sports appear in the order they are first seen, which is also the
/// tie-break order used by [`top_sports`].
pub fn aggregate_by_sport(events: &[MedalEvent<'_>]) -> Vec<SportCount> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<SportCount> = Vec::new();

    for event in events {
        match slots.get(event.sport) {
            Some(&slot) => out[slot].count += 1,
            None => {
                slots.insert(event.sport, out.len());
                out.push(SportCount {
                    sport: event.sport.to_owned(),
                    count: 1,
                });
            }
        }
    }
    out
}

/// The `n` sports with the most events, count descending.
///
/// The sort is stable, so equal counts keep grouping order. Fewer than `n`
/// sports returns all of them.
pub fn top_sports(mut counts: Vec<SportCount>, n: usize) -> Vec<SportCount> {
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dedup::dedup_events;
    use crate::model::{Medal, ResultRow};

    fn sample() -> Vec<ResultRow> {
        vec![
            ResultRow::new("Norway", 1994, "Biathlon", "10km", Some(Medal::Gold)),
            ResultRow::new("Norway", 1994, "Cross Country Skiing", "15km", Some(Medal::Gold)),
            ResultRow::new("Norway", 1998, "Cross Country Skiing", "15km", Some(Medal::Silver)),
            ResultRow::new("Norway", 1998, "Cross Country Skiing", "Relay", Some(Medal::Gold)),
            ResultRow::new("Norway", 1998, "Cross Country Skiing", "Relay", Some(Medal::Gold)),
            ResultRow::new("Norway", 2002, "Curling", "Men", Some(Medal::Bronze)),
            ResultRow::new("Norway", 2002, "Biathlon", "Sprint", Some(Medal::Gold)),
            ResultRow::new("Norway", 2006, "Ski Jumping", "Normal Hill", Some(Medal::Bronze)),
        ]
    }

    #[test]
    fn counts_sum_to_deduplicated_size() {
        let rows = sample();
        let events = dedup_events(&rows);
        let counts = aggregate_by_sport(&events);
        let total: usize = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, events.len());
        assert_eq!(events.len(), 7);
    }

    #[test]
    fn groups_in_first_seen_order() {
        let rows = sample();
        let counts = aggregate_by_sport(&dedup_events(&rows));
        let names: Vec<&str> = counts.iter().map(|c| c.sport.as_str()).collect();
        assert_eq!(
            names,
            ["Biathlon", "Cross Country Skiing", "Curling", "Ski Jumping"]
        );
    }

    #[test]
    fn top_sports_sorts_descending_with_stable_ties() {
        let rows = sample();
        let top = top_sports(aggregate_by_sport(&dedup_events(&rows)), DEFAULT_TOP_N);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0], SportCount { sport: "Cross Country Skiing".into(), count: 3 });
        assert_eq!(top[1], SportCount { sport: "Biathlon".into(), count: 2 });
        // Curling and Ski Jumping tie at 1; Curling was seen first.
        assert_eq!(top[2].sport, "Curling");
    }

    #[test]
    fn fewer_sports_than_requested_returns_all() {
        let counts = vec![SportCount { sport: "Judo".into(), count: 2 }];
        assert_eq!(top_sports(counts.clone(), 3), counts);
        assert!(top_sports(Vec::new(), 3).is_empty());
        assert!(top_sports(counts, 0).is_empty());
    }
}

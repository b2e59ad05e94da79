//! medalmap-cli
//! ============
//!
//! Command-line interface for the `medalmap-core` Olympic medal aggregator.
//!
//! This crate primarily provides a binary (`medalmap`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Basic usage:
//!
//! ```text
//! medalmap --help
//! medalmap -i athlete_events.csv stats
//! medalmap -i athlete_events.csv country "United Kingdom" --top 5
//! medalmap -i athlete_events.csv country usa --json
//! medalmap -i athlete_events.csv ranking
//! ```
//!
//! For programmatic access to the aggregation APIs, use the
//! [`medalmap-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.

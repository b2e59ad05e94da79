// crates/medalmap-core/src/lib.rs

//! medalmap-core
//! =============
//!
//! Aggregates a flat table of Olympic results (one row per athlete and
//! event) into the per-country summaries an interactive medal map shows:
//! top sports, gold/silver/bronze shares, and how a country compares with
//! the most and least decorated countries.
//!
//! ```rust
//! use medalmap_core::prelude::*;
//!
//! let csv = "Team,Year,Sport,Event,Medal\nUSA,2000,Swimming,100m,Gold\n";
//! let dataset = Dataset::from_csv_str(csv)?;
//!
//! let report = dataset.country_report("United States", &ReportOptions::default());
//! assert_eq!(report.top_sports[0].sport, "Swimming");
//! assert_eq!(report.percentages.unwrap().gold, 100.0);
//! # Ok::<(), MedalError>(())
//! ```

pub mod common;
pub mod dataset;
pub mod dedup;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod percent;
pub mod prelude;
pub mod ranker;
pub mod report;
pub mod sports;
pub mod text;

// Re-exports
pub use crate::common::DatasetStats;
pub use crate::dataset::{Dataset, DatasetState};
pub use crate::dedup::{dedup_events, MedalEvent};
pub use crate::error::{MedalError, Result};
pub use crate::filter::{filter_by_country, MatchMode};
pub use crate::loader::{LoadOptions, LoadReport};
pub use crate::model::{Medal, ResultRow};
pub use crate::normalize::normalize_country_name;
pub use crate::percent::{medal_percentages, MedalPercentages, MedalTally};
pub use crate::ranker::{CountryCount, EventKey, MedalIndex};
pub use crate::report::{build_report, Comparison, CountryReport, ReportOptions, NO_DATA_MESSAGE};
pub use crate::sports::{aggregate_by_sport, top_sports, SportCount, DEFAULT_TOP_N};

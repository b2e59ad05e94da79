//! medalmap-rs
//! ===========
//!
//! Umbrella crate for the workspace. It re-exports [`medalmap_core`] so the
//! benches (and anyone who just wants "the library") can depend on a single
//! name.
//!
//! ```no_run
//! use medalmap_rs::prelude::*;
//!
//! let dataset = Dataset::load_from_path("data/athlete_events.csv")?;
//! let report = dataset.country_report("USA", &ReportOptions::default());
//! println!("{}: {} top sports", report.country, report.top_sports.len());
//! # Ok::<(), MedalError>(())
//! ```
pub use medalmap_core::*;

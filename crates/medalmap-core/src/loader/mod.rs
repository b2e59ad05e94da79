// crates/medalmap-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression, row cache) and delegates
//! to the CSV parser. Loading happens once; the resulting [`Dataset`] is an
//! immutable snapshot.

use crate::dataset::Dataset;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

pub mod common_io;
pub mod csv_rows;

#[cfg(feature = "cache")]
pub mod cache;

#[cfg(feature = "fetch")]
pub mod fetch;

pub use csv_rows::REQUIRED_COLUMNS;

/// What happened while loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub total_rows: usize,
    pub loaded_rows: usize,
    pub skipped_rows: usize,
    pub from_cache: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Read and refresh the binary row cache (feature `cache`).
    pub use_cache: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { use_cache: true }
    }
}

impl Dataset {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "athlete_events.csv"
    }

    /// Load a `.csv` or `.csv.gz` results table with default options.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(path, &LoadOptions::default()).map(|(ds, _)| ds)
    }

    /// **Smart Load:** checks the row cache, otherwise parses the CSV and
    /// refreshes the cache (best effort).
    pub fn load_with(path: impl AsRef<Path>, opts: &LoadOptions) -> Result<(Self, LoadReport)> {
        let path = path.as_ref();
        let started = Instant::now();

        #[cfg(feature = "cache")]
        if opts.use_cache {
            if let Some((rows, report)) = cache::load_fresh(path) {
                info!(
                    "Dataset loaded from cache - path={}, rows={}, skipped={}, elapsed={:?}",
                    path.display(),
                    report.loaded_rows,
                    report.skipped_rows,
                    started.elapsed()
                );
                return Ok((Dataset::from_rows(rows), report));
            }
        }

        let reader = common_io::open_stream(path)?;
        let (rows, report) = csv_rows::read_rows(reader)?;

        #[cfg(feature = "cache")]
        if opts.use_cache {
            if let Err(e) = cache::store(path, &rows, &report) {
                tracing::warn!("Could not write row cache for {}: {}", path.display(), e);
            }
        }
        #[cfg(not(feature = "cache"))]
        let _ = opts;

        info!(
            "Dataset loaded - path={}, rows={}, skipped={}, elapsed={:?}",
            path.display(),
            report.loaded_rows,
            report.skipped_rows,
            started.elapsed()
        );
        Ok((Dataset::from_rows(rows), report))
    }

    /// Parse CSV from any reader (uncompressed).
    pub fn load_from_reader<R: Read>(reader: R) -> Result<(Self, LoadReport)> {
        let (rows, report) = csv_rows::read_rows(reader)?;
        Ok((Dataset::from_rows(rows), report))
    }

    /// Parse CSV text already in memory, e.g. a browser fetch result.
    pub fn from_csv_str(text: &str) -> Result<Self> {
        Self::load_from_reader(text.as_bytes()).map(|(ds, _)| ds)
    }
}

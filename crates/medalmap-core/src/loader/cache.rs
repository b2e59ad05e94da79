// crates/medalmap-core/src/loader/cache.rs
#![cfg(feature = "cache")]

//! Binary row cache written next to the source CSV.
//!
//! Parsing the full `athlete_events.csv` takes a while; the cache stores the
//! already-parsed rows with bincode (gzip-wrapped when `compact` is on) and
//! is reused as long as it is newer than the CSV.

use super::{common_io, LoadReport};
use crate::error::{MedalError, Result};
use crate::model::ResultRow;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;
use tracing::debug;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "rows.bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "rows.comp.bin";

/// Bump when `ResultRow` or the cached header changes shape.
const CACHE_VERSION: u32 = 2;

#[derive(Deserialize)]
struct CachedRows {
    version: u32,
    total_rows: usize,
    skipped_rows: usize,
    rows: Vec<ResultRow>,
}

/// Write-side twin of [`CachedRows`]; same bincode layout.
#[derive(Serialize)]
struct CachedRowsRef<'a> {
    version: u32,
    total_rows: usize,
    skipped_rows: usize,
    rows: &'a [ResultRow],
}

/// Rows and the original parse counts from a fresh cache, or `None` if the
/// cache is stale, missing or unreadable.
pub fn load_fresh(source: &Path) -> Option<(Vec<ResultRow>, LoadReport)> {
    let cache_path = common_io::get_cache_path(source, CACHE_SUFFIX);
    if !is_cache_fresh(source, &cache_path) {
        debug!("Row cache miss - {}", cache_path.display());
        return None;
    }
    match read_cache(&cache_path) {
        Ok(cached) => {
            debug!("Row cache hit - {} ({} rows)", cache_path.display(), cached.rows.len());
            let report = LoadReport {
                total_rows: cached.total_rows,
                loaded_rows: cached.rows.len(),
                skipped_rows: cached.skipped_rows,
                from_cache: true,
            };
            Some((cached.rows, report))
        }
        Err(e) => {
            debug!("Ignoring unreadable row cache {}: {}", cache_path.display(), e);
            None
        }
    }
}

/// Write the cache for `source`, keeping the counts of the parse that
/// produced `rows`.
pub fn store(source: &Path, rows: &[ResultRow], report: &LoadReport) -> Result<()> {
    let cache_path = common_io::get_cache_path(source, CACHE_SUFFIX);
    let payload = CachedRowsRef {
        version: CACHE_VERSION,
        total_rows: report.total_rows,
        skipped_rows: report.skipped_rows,
        rows,
    };
    let writer = BufWriter::new(File::create(&cache_path)?);

    #[cfg(feature = "compact")]
    let writer = {
        let mut encoder = GzEncoder::new(writer, Compression::default());
        bincode::serialize_into(&mut encoder, &payload)?;
        encoder.finish()?
    };
    #[cfg(not(feature = "compact"))]
    let writer = {
        let mut writer = writer;
        bincode::serialize_into(&mut writer, &payload)?;
        writer
    };

    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    debug!("Row cache written - {}", cache_path.display());
    Ok(())
}

fn read_cache(cache_path: &Path) -> Result<CachedRows> {
    let reader = BufReader::new(File::open(cache_path)?);

    #[cfg(feature = "compact")]
    let mut decoder: Box<dyn Read> = Box::new(GzDecoder::new(reader));
    #[cfg(not(feature = "compact"))]
    let mut decoder: Box<dyn Read> = Box::new(reader);

    let cached: CachedRows = bincode::deserialize_from(&mut decoder)?;
    if cached.version != CACHE_VERSION {
        return Err(MedalError::InvalidData(format!(
            "row cache version {} (expected {})",
            cached.version, CACHE_VERSION
        )));
    }
    Ok(cached)
}

fn is_cache_fresh(source: &Path, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Medal;

    #[test]
    fn stored_rows_round_trip_through_the_cache() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("athlete_events.csv");
        fs::write(&source, "Team,Year,Sport,Event,Medal\n").unwrap();

        let rows = vec![ResultRow::new("USA", 2000, "Swimming", "100m", Some(Medal::Gold))];
        let parsed = LoadReport {
            total_rows: 3,
            loaded_rows: 1,
            skipped_rows: 2,
            from_cache: false,
        };
        store(&source, &rows, &parsed).unwrap();

        let (cached, report) = load_fresh(&source).unwrap();
        assert_eq!(cached, rows);
        assert_eq!(
            report,
            LoadReport {
                from_cache: true,
                ..parsed
            }
        );
    }

    #[cfg(feature = "compact")]
    #[test]
    fn compressed_cache_is_a_complete_gzip_stream() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("athlete_events.csv");
        fs::write(&source, "Team,Year,Sport,Event,Medal\n").unwrap();
        let rows = vec![ResultRow::new("UK", 2012, "Cycling", "Sprint", Some(Medal::Gold))];
        store(&source, &rows, &LoadReport::default()).unwrap();

        let raw = fs::read(common_io::get_cache_path(&source, CACHE_SUFFIX)).unwrap();
        assert_eq!(&raw[..2], &[0x1f, 0x8b]);
        let mut decoded = Vec::new();
        GzDecoder::new(raw.as_slice()).read_to_end(&mut decoded).unwrap();
        assert!(!decoded.is_empty());
    }

    #[test]
    fn missing_cache_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("athlete_events.csv");
        fs::write(&source, "Team,Year,Sport,Event,Medal\n").unwrap();
        assert_eq!(load_fresh(&source), None);
    }

    #[test]
    fn corrupt_cache_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("athlete_events.csv");
        fs::write(&source, "Team,Year,Sport,Event,Medal\n").unwrap();
        fs::write(common_io::get_cache_path(&source, CACHE_SUFFIX), b"garbage").unwrap();
        assert_eq!(load_fresh(&source), None);
    }
}

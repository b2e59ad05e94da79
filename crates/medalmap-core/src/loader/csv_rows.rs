// crates/medalmap-core/src/loader/csv_rows.rs
use super::LoadReport;
use crate::error::{MedalError, Result};
use crate::model::{RawRow, ResultRow};
use csv::{ReaderBuilder, Trim};
use std::io::Read;
use tracing::{debug, warn};

/// Columns every results table must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = ["Team", "Year", "Sport", "Event", "Medal"];

/// Stream-deserialize result rows from CSV.
///
/// Rows that fail to deserialize (a non-numeric `Year`, a short line) are
/// skipped and counted. A missing required column fails the whole load.
pub fn read_rows<R: Read>(reader: R) -> Result<(Vec<ResultRow>, LoadReport)> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if !missing.is_empty() {
        return Err(MedalError::InvalidData(format!(
            "missing required column(s): {}",
            missing.join(", ")
        )));
    }

    let mut report = LoadReport::default();
    let mut rows = Vec::new();

    for result in rdr.deserialize::<RawRow>() {
        report.total_rows += 1;
        match result {
            Ok(raw) => rows.push(ResultRow::from(raw)),
            Err(e) => {
                report.skipped_rows += 1;
                debug!("Skipping malformed row {}: {}", report.total_rows, e);
            }
        }
    }
    report.loaded_rows = rows.len();

    if report.skipped_rows > 0 {
        warn!(
            "Skipped {} of {} rows that could not be parsed",
            report.skipped_rows, report.total_rows
        );
    }
    Ok((rows, report))
}

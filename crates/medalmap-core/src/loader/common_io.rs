// crates/medalmap-core/src/loader/common_io.rs
use crate::error::{MedalError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

pub fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a file, buffers it, and unwraps gzip for `.gz` paths.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        MedalError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(MedalError::InvalidData(format!(
                "{} is gzip-compressed but the 'compact' feature is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

/// `athlete_events.csv` -> `athlete_events.csv.<suffix>`
pub fn get_cache_path(source: &Path, suffix: &str) -> PathBuf {
    let filename = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset".to_owned());
    source.with_file_name(format!("{filename}.{suffix}"))
}

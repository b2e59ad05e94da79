// crates/medalmap-core/src/loader/fetch.rs
#![cfg(feature = "fetch")]

use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Download `url` to `out`. Returns the number of bytes written.
pub fn fetch_to_path(url: &str, out: &Path) -> Result<u64> {
    let started = Instant::now();
    info!("Fetching dataset - url={}", url);

    let mut resp = reqwest::blocking::get(url)?.error_for_status()?;
    let mut writer = BufWriter::new(File::create(out)?);
    let bytes = resp.copy_to(&mut writer)?;
    writer.flush()?;

    info!(
        "Dataset fetched - path={}, bytes={}, duration={:.2}s",
        out.display(),
        bytes,
        started.elapsed().as_secs_f32()
    );
    Ok(bytes)
}

// crates/medalmap-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading or caching a results dataset.
///
/// Aggregation itself never fails: empty input, countries without medals
/// and unknown countries all have defined empty outputs.
#[derive(Debug, Error)]
pub enum MedalError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "cache")]
    #[error("Row cache error: {0}")]
    Bincode(#[from] bincode::Error),

    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Dataset has not been loaded yet")]
    NotLoaded,
}

pub type Result<T> = std::result::Result<T, MedalError>;

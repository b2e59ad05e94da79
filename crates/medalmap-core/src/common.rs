use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a loaded dataset.
///
/// Returned by [`Dataset::stats`](crate::Dataset::stats). Counts reflect the
/// rows that survived parsing; skipped rows are reported by the loader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub rows: usize,
    pub medal_rows: usize,
    /// Canonical countries with at least one medal.
    pub countries: usize,
    pub sports: usize,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
}

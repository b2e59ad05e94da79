// crates/medalmap-core/src/prelude.rs
pub use crate::{
    aggregate_by_sport, build_report, dedup_events, filter_by_country, medal_percentages,
    normalize_country_name, top_sports, Comparison, CountryCount, CountryReport, Dataset,
    DatasetState, DatasetStats, LoadOptions, LoadReport, MatchMode, Medal, MedalError,
    MedalIndex, MedalPercentages, MedalTally, ReportOptions, Result, ResultRow, SportCount,
    DEFAULT_TOP_N, NO_DATA_MESSAGE,
};

//! medalmap-wasm: WebAssembly bindings for medalmap-core
//!
//! The browser page owns the map and the charts; this crate owns the data.
//! The page fetches the results CSV, hands the text to [`load_dataset`] once,
//! and then asks for a report every time a country is clicked.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { load_dataset, is_ready, country_report } from 'medalmap-wasm';
//!
//! async function main() {
//!   await init();
//!   const csv = await (await fetch('dataset/athlete_events.csv')).text();
//!   load_dataset(csv);
//!
//!   map.on('click', (feature) => {
//!     if (!is_ready()) return;
//!     const report = country_report(feature.properties.name, 3);
//!     // report.top_sports, report.percentages, report.comparison
//!   });
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - The dataset slot is write-once. Until it is filled every query returns
//!   `{ "status": "not_loaded" }` instead of throwing.
//! - All exported functions return plain types or `JsValue` holding
//!   JSON-serializable objects. [`list_countries`] returns a JS array.

use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

use medalmap_core::{
    CountryCount, Dataset, DatasetState, ReportOptions, DEFAULT_TOP_N, NO_DATA_MESSAGE,
};
use serde::Serialize;
use serde_json::json;
use serde_wasm_bindgen::to_value;

static STATE: OnceLock<DatasetState> = OnceLock::new();
static NOT_LOADED: DatasetState = DatasetState::NotLoaded;

/// Current dataset state; `NotLoaded` until [`load_dataset`] succeeds.
fn state() -> &'static DatasetState {
    STATE.get().unwrap_or(&NOT_LOADED)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing medalmap WASM module...".into());
}

fn js_err(msg: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&msg.to_string())
}

fn not_loaded() -> JsValue {
    to_value(&json!({ "status": "not_loaded" })).unwrap_or(JsValue::NULL)
}

/* --------------------------------------------------------------------------
   JS-facing views
-------------------------------------------------------------------------- */

#[derive(Serialize)]
struct RankingView<'a> {
    status: &'static str,
    most: Option<&'a CountryCount>,
    least: Option<&'a CountryCount>,
}

#[derive(Serialize)]
struct RankedCountryView<'a> {
    rank: usize,
    country: &'a str,
    count: usize,
}

/* --------------------------------------------------------------------------
   Loading
-------------------------------------------------------------------------- */

/// Parse the results CSV and install it. Returns the number of rows.
///
/// Can only succeed once per page session.
#[wasm_bindgen]
pub fn load_dataset(csv_text: &str) -> Result<usize, JsValue> {
    if state().is_ready() {
        return Err(js_err("dataset already loaded"));
    }
    let (dataset, report) = Dataset::load_from_reader(csv_text.as_bytes()).map_err(js_err)?;
    let rows = dataset.len();
    STATE
        .set(DatasetState::from(dataset))
        .map_err(|_| js_err("dataset already loaded"))?;

    web_sys::console::log_1(
        &format!("✓ Loaded {} rows ({} skipped)", rows, report.skipped_rows).into(),
    );
    Ok(rows)
}

#[wasm_bindgen]
pub fn is_ready() -> bool {
    state().is_ready()
}

/* --------------------------------------------------------------------------
   Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn normalize_country_name(name: &str) -> String {
    medalmap_core::normalize_country_name(name).to_owned()
}

/// Full report for a clicked country.
#[wasm_bindgen]
pub fn country_report(name: &str, top_n: Option<usize>) -> Result<JsValue, JsValue> {
    let state = state();
    if !state.is_ready() {
        return Ok(not_loaded());
    }
    let opts = ReportOptions {
        top_n: top_n.unwrap_or(DEFAULT_TOP_N),
        ..ReportOptions::default()
    };
    let report = state.country_report(name, &opts);
    let message = if report.has_data() { None } else { Some(NO_DATA_MESSAGE) };

    to_value(&json!({
        "status": "ok",
        "message": message,
        "report": report,
    }))
    .map_err(js_err)
}

/// Most and least decorated countries.
#[wasm_bindgen]
pub fn get_ranking() -> Result<JsValue, JsValue> {
    let Ok(dataset) = state().require_ready() else {
        return Ok(not_loaded());
    };
    let index = dataset.index();
    to_value(&RankingView {
        status: "ok",
        most: index.most(),
        least: index.least(),
    })
    .map_err(js_err)
}

/// Every medal-winning country by unique-medal count, descending.
///
/// Empty array until the dataset is loaded.
#[wasm_bindgen]
pub fn list_countries() -> Result<JsValue, JsValue> {
    let array = js_sys::Array::new();
    let Some(dataset) = state().dataset() else {
        return Ok(array.into());
    };
    let index = dataset.index();
    for entry in index.ranked() {
        let view = RankedCountryView {
            rank: index.rank_of(&entry.country).unwrap_or_default(),
            country: &entry.country,
            count: entry.count,
        };
        array.push(&to_value(&view).map_err(js_err)?);
    }
    Ok(array.into())
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsValue> {
    let Some(dataset) = state().dataset() else {
        return Ok(not_loaded());
    };
    let stats = dataset.stats();
    to_value(&json!({
        "status": "ok",
        "rows": stats.rows,
        "medal_rows": stats.medal_rows,
        "countries": stats.countries,
        "sports": stats.sports,
    }))
    .map_err(js_err)
}

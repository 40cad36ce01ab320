//! flagdb-wasm: WebAssembly bindings for flagdb-core
//!
//! Exposes the flag catalog and its filter engine to JavaScript. The
//! dataset is compiled into the module, parsed once on first use, and all
//! queries return plain values or JSON-serializable `JsValue`s.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Lookups: `get_flag_count()`, `get_flag(code)`, `describe_flag(code)`
//! - Filtering: `filter_flags({ search, colors, colorCount, continent })`
//!   and the pure reducer `apply_filter_action(criteria, action)`
//! - Choices for a filter panel: `get_palette()`, `get_continents()`,
//!   `get_color_stats()`
//! - Slideshow support: `random_flags(n)`, `get_slideshow_interval_ms()`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { filter_flags, get_palette } from 'flagdb-wasm';
//!
//! async function main() {
//!   await init();
//!   const red = get_palette().find(c => c.name === 'Red').hex;
//!   const hits = filter_flags({ colors: [red], continent: 'Europe' });
//!   console.log(hits.map(f => f.name));
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - If the embedded dataset fails to parse, every query sees an empty
//!   catalog and `get_load_error()` returns the reason.
//! - Errors from malformed arguments are thrown as JS strings.
use flagdb_core::prelude::*;
use flagdb_core::{color, palette};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use std::sync::OnceLock;
use std::result::Result;
use wasm_bindgen::prelude::*;

static CATALOG: OnceLock<CatalogLoad> = OnceLock::new();

fn load() -> &'static CatalogLoad {
    CATALOG.get_or_init(|| CatalogLoad::from_result(FlagCatalog::bundled()))
}

fn catalog() -> &'static FlagCatalog {
    &load().catalog
}

#[cfg(target_arch = "wasm32")]
fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    log("Initializing flagdb WASM module...");

    let load = load();
    match &load.error {
        None => log(&format!("✓ Loaded {} flags", load.catalog.len())),
        Some(e) => web_sys::console::error_1(&format!("flag catalog failed to load: {e}").into()),
    }
}

/* --------------------------------------------------------------------------
   Catalog
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_flag_count() -> usize {
    catalog().len()
}

/// The load failure, if the embedded dataset could not be parsed.
#[wasm_bindgen]
pub fn get_load_error() -> Option<String> {
    load().error.as_ref().map(ToString::to_string)
}

/// The record for `code` (case-insensitive), or `null`.
#[wasm_bindgen]
pub fn get_flag(code: &str) -> Result<JsValue, JsValue> {
    match catalog().find_by_code(code) {
        Some(flag) => Ok(to_value(flag)?),
        None => Ok(JsValue::NULL),
    }
}

#[wasm_bindgen]
pub fn describe_flag(code: &str) -> Option<String> {
    catalog().find_by_code(code).map(FlagRecord::description)
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsValue> {
    Ok(to_value(&catalog().stats())?)
}

/* --------------------------------------------------------------------------
   Filtering
-------------------------------------------------------------------------- */

fn criteria_from(value: JsValue) -> Result<FilterCriteria, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(FilterCriteria::default());
    }
    Ok(from_value(value)?)
}

/// Flags matching `criteria`, in catalog order. Missing fields are
/// unconstrained; `undefined` returns the whole catalog.
#[wasm_bindgen]
pub fn filter_flags(criteria: JsValue) -> Result<JsValue, JsValue> {
    let criteria = criteria_from(criteria)?;
    Ok(to_value(&catalog().filter(&criteria))?)
}

/// Pure reducer for a filter panel: returns the criteria after `action`,
/// e.g. `{ type: "toggleColor", value: "#E53935" }`.
#[wasm_bindgen]
pub fn apply_filter_action(criteria: JsValue, action: JsValue) -> Result<JsValue, JsValue> {
    let criteria = criteria_from(criteria)?;
    let action: FilterAction = from_value(action)?;
    Ok(to_value(&criteria.apply(action))?)
}

/// Euclidean RGB distance; `Infinity` when either value is malformed.
#[wasm_bindgen]
pub fn color_distance(a: &str, b: &str) -> f64 {
    color::color_distance(a, b)
}

/* --------------------------------------------------------------------------
   Filter choices
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_palette() -> Result<JsValue, JsValue> {
    Ok(to_value(&PALETTE)?)
}

#[wasm_bindgen]
pub fn get_continents() -> Result<JsValue, JsValue> {
    Ok(to_value(&catalog().continents())?)
}

#[derive(Serialize)]
struct ColorStatView {
    name: &'static str,
    hex: &'static str,
    count: usize,
}

/// How many flags contain each palette color.
#[wasm_bindgen]
pub fn get_color_stats() -> Result<JsValue, JsValue> {
    let stats: Vec<ColorStatView> = palette::color_stats(catalog())
        .into_iter()
        .map(|(c, count)| ColorStatView {
            name: c.name,
            hex: c.hex,
            count,
        })
        .collect();
    Ok(to_value(&stats)?)
}

/* --------------------------------------------------------------------------
   Slideshow
-------------------------------------------------------------------------- */

/// Up to `count` distinct flags in random order.
#[wasm_bindgen]
pub fn random_flags(count: usize) -> Result<JsValue, JsValue> {
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(to_value(&catalog().sample(count, &mut rng))?)
}

#[wasm_bindgen]
pub fn get_slideshow_interval_ms() -> u32 {
    flagdb_core::SLIDESHOW_AUTO_INTERVAL.as_millis() as u32
}

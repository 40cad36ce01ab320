// crates/flagdb-core/src/builder/mod.rs
#![cfg(feature = "builder")]

//! # Dataset Builder
//!
//! The one-shot tool behind `data/flags.json`: fetch country metadata from
//! the REST Countries API, merge the curated color table, sort, and write.

pub mod color_table;
pub mod raw;

use crate::common::CatalogStats;
use crate::error::Result;
use crate::loader::common_io;
use crate::model::{FlagCatalog, FlagRecord};
use crate::traits::FlagSearch;
use raw::{CountriesRaw, RestCountryRaw};
use std::path::Path;
use std::time::Duration;

pub const REST_COUNTRIES_URL: &str = "https://restcountries.com/v3.1/all?fields=cca2,name,capital,continents,population,area,languages,flags";

/// Capital shown when the upstream record has none.
pub const NO_CAPITAL: &str = "N/A";

/// Downloads the raw country list.
pub fn fetch_countries() -> Result<CountriesRaw> {
    tracing::info!(url = REST_COUNTRIES_URL, "fetching country data");
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("flagdb/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let response = client.get(REST_COUNTRIES_URL).send()?.error_for_status()?;
    let raw: CountriesRaw = serde_json::from_reader(response)?;
    tracing::info!(countries = raw.len(), "fetched country data");
    Ok(raw)
}

/// Converts one upstream record; `None` when it has no ISO2 code.
pub fn convert_country(country: RestCountryRaw) -> Option<FlagRecord> {
    let code = country.cca2.trim().to_ascii_uppercase();
    if code.is_empty() {
        return None;
    }
    let colors: Vec<String> = color_table::colors_for(&code)
        .iter()
        .map(|c| (*c).to_string())
        .collect();

    Some(FlagRecord {
        color_count: colors.len(),
        colors,
        continent: color_table::normalize_continent(&country.continents),
        capital: country
            .capital
            .into_iter()
            .next()
            .unwrap_or_else(|| NO_CAPITAL.to_string()),
        name: country.name.common,
        population: country.population,
        area: country.area,
        languages: Some(
            country
                .languages
                .map(|l| l.into_values().collect())
                .unwrap_or_default(),
        ),
        code,
    })
}

/// **Standard Converter:** Raw -> Catalog.
pub fn from_raw(raw: CountriesRaw) -> FlagCatalog {
    FlagCatalog::from_records(raw.into_iter().filter_map(convert_country).collect())
}

/// Builds a catalog from a saved REST Countries response (plain or gzip).
pub fn build_from_file(source: &Path) -> Result<FlagCatalog> {
    let reader = common_io::open_stream(source)?;
    let raw: CountriesRaw = serde_json::from_reader(reader)?;
    Ok(from_raw(raw))
}

/// Fetches (or reads `source`), converts, writes `out_path`, and returns
/// the statistics of the written catalog.
pub fn build_database(source: Option<&Path>, out_path: &Path) -> Result<CatalogStats> {
    let catalog = match source {
        Some(path) => {
            tracing::info!(source = %path.display(), "building from local file");
            build_from_file(path)?
        }
        None => from_raw(fetch_countries()?),
    };

    catalog.save_as(out_path)?;

    let stats = catalog.stats();
    tracing::info!(
        out = %out_path.display(),
        flags = stats.flags,
        continents = ?catalog.continents(),
        with_colors = stats.with_colors,
        average_colors = %format!("{:.1}", stats.average_colors),
        "dataset written"
    );
    Ok(stats)
}

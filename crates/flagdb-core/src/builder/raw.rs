// crates/flagdb-core/src/builder/raw.rs
use serde::Deserialize;
use std::collections::BTreeMap;

/// Country name block from the REST Countries API.
#[derive(Debug, Deserialize)]
pub struct RestNameRaw {
    pub common: String,
    #[serde(default)]
    pub official: Option<String>,
}

/// One country as returned by `restcountries.com/v3.1/all?fields=...`.
/// NOTE: mirrors the external API and is not part of the catalog format.
#[derive(Debug, Deserialize)]
pub struct RestCountryRaw {
    #[serde(default)]
    pub cca2: String,
    pub name: RestNameRaw,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub continents: Vec<String>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub area: Option<f64>,
    /// `{ "eng": "English", "fra": "French" }`
    #[serde(default)]
    pub languages: Option<BTreeMap<String, String>>,
}

pub type CountriesRaw = Vec<RestCountryRaw>;

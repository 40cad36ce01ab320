// crates/flagdb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, gzip, embedded bytes) and hands the
//! parsed records to [`FlagCatalog::from_records`], which fixes the order.

use crate::error::{FlagError, Result};
use crate::model::{FlagCatalog, FlagRecord};
use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod common_io;

pub use common_io::DataFormat;

/// Environment variable pointing [`FlagCatalog::load`] at another dataset.
pub const DATA_ENV_VAR: &str = "FLAGDB_DATA";

static BUNDLED_JSON: &str = include_str!("../../data/flags.json");

static CATALOG_CACHE: OnceCell<FlagCatalog> = OnceCell::new();

/// Outcome of a load that must not fail: the catalog (empty on error) plus
/// the error that emptied it, for the presentation layer to report.
#[derive(Debug)]
pub struct CatalogLoad {
    pub catalog: FlagCatalog,
    pub error: Option<FlagError>,
}

impl CatalogLoad {
    pub fn from_result(result: Result<FlagCatalog>) -> Self {
        match result {
            Ok(catalog) => Self {
                catalog,
                error: None,
            },
            Err(error) => {
                tracing::warn!(%error, "flag catalog failed to load; continuing with an empty catalog");
                Self {
                    catalog: FlagCatalog::empty(),
                    error: Some(error),
                }
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl FlagCatalog {
    /// The process-wide catalog, parsed on first use.
    ///
    /// Reads the file named by `FLAGDB_DATA` when set, otherwise the dataset
    /// compiled into the crate.
    pub fn load() -> Result<&'static FlagCatalog> {
        CATALOG_CACHE.get_or_try_init(|| match std::env::var_os(DATA_ENV_VAR) {
            Some(path) => Self::load_from_path(PathBuf::from(path)),
            None => Self::bundled(),
        })
    }

    /// Parses the dataset embedded at compile time.
    pub fn bundled() -> Result<Self> {
        Self::parse_json(BUNDLED_JSON, "<bundled>")
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::parse_json(json, "<string>")
    }

    fn parse_json(json: &str, source: &str) -> Result<Self> {
        let records: Vec<FlagRecord> = serde_json::from_str(json)?;
        Ok(Self::from_checked(records, source))
    }

    /// Loads `.json`, `.json.gz` or `.bin` datasets.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = DataFormat::from_path(path)?;
        let reader = common_io::open_stream(path)?;

        let records: Vec<FlagRecord> = match format {
            DataFormat::Json => serde_json::from_reader(reader)?,
            DataFormat::Binary => bincode::deserialize_from(reader)?,
        };
        Ok(Self::from_checked(records, &path.display().to_string()))
    }

    /// Like [`FlagCatalog::load_from_path`], but never fails.
    pub fn load_or_empty(path: impl AsRef<Path>) -> CatalogLoad {
        CatalogLoad::from_result(Self::load_from_path(path))
    }

    /// Writes the catalog in the format implied by the file name.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = DataFormat::from_path(path)?;
        let mut writer = common_io::create_stream(path, common_io::wants_gzip(path, format))?;

        match format {
            DataFormat::Json => serde_json::to_writer_pretty(&mut writer, self)?,
            DataFormat::Binary => bincode::serialize_into(&mut writer, self)?,
        }
        writer.finish()?;
        tracing::debug!(path = %path.display(), flags = self.len(), ?format, "saved flag catalog");
        Ok(())
    }

    fn from_checked(records: Vec<FlagRecord>, source: &str) -> Self {
        let mut seen = HashSet::with_capacity(records.len());
        for r in &records {
            if r.color_count != r.colors.len() {
                tracing::warn!(code = %r.code, source, "colorCount does not match colors");
            }
            if !seen.insert(r.code.to_ascii_uppercase()) {
                tracing::warn!(code = %r.code, source, "duplicate flag code");
            }
        }
        let catalog = Self::from_records(records);
        tracing::debug!(source, flags = catalog.len(), "loaded flag catalog");
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::FlagSearch;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("flagdb-{}-{name}", std::process::id()))
    }

    #[test]
    fn bundled_dataset_parses() {
        let catalog = FlagCatalog::bundled().unwrap();
        assert!(catalog.len() >= 240);
        assert!(catalog.find_by_code("fr").is_some());
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = FlagCatalog::load_from_path(temp_path("missing.json")).unwrap_err();
        assert!(matches!(err, FlagError::NotFound(_)));
    }

    #[test]
    fn json_strings_parse_into_a_sorted_catalog() {
        let json = r##"[
            {"code": "FR", "name": "France", "continent": "Europe", "capital": "Paris", "colors": ["#FFFFFF"], "colorCount": 1},
            {"code": "AX", "name": "Åland Islands", "continent": "Europe", "capital": "Mariehamn", "colors": [], "colorCount": 0}
        ]"##;
        let catalog = FlagCatalog::from_json_str(json).unwrap();
        let codes: Vec<&str> = catalog.iter().map(|f| f.code.as_str()).collect();
        assert_eq!(codes, ["AX", "FR"]);
        assert!(FlagCatalog::from_json_str("{}").is_err());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = FlagCatalog::load_from_path("flags.csv").unwrap_err();
        assert!(matches!(err, FlagError::InvalidData(_)));
    }

    #[test]
    fn load_or_empty_reports_the_error() {
        let load = FlagCatalog::load_or_empty(temp_path("nope.json"));
        assert!(!load.is_ok());
        assert!(load.catalog.is_empty());
    }

    #[test]
    fn malformed_json_surfaces_as_json_error() {
        let path = temp_path("broken.json");
        std::fs::write(&path, "[{\"code\": ").unwrap();
        let load = FlagCatalog::load_or_empty(&path);
        assert!(matches!(load.error, Some(FlagError::Json(_))));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn saved_files_load_back_identically() {
        let catalog = FlagCatalog::bundled().unwrap();
        let mut names = vec!["out.json", "out.bin"];
        if cfg!(feature = "compact") {
            names.push("out.json.gz");
        }
        for name in names {
            let path = temp_path(name);
            catalog.save_as(&path).unwrap();
            let back = FlagCatalog::load_from_path(&path).unwrap();
            assert_eq!(back, catalog, "{name} did not survive a save/load cycle");
            std::fs::remove_file(path).ok();
        }
    }
}

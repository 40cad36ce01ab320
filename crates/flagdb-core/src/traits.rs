// crates/flagdb-core/src/traits.rs
use crate::common::CatalogStats;
use crate::filter::{filter_flags, FilterCriteria};
use crate::model::{FlagCatalog, FlagRecord};
use crate::palette::{self, PaletteColor};
use std::collections::BTreeSet;

/// Read-only queries over an ordered set of flags.
///
/// Implementors only provide [`FlagSearch::flags`]; everything else is
/// derived from it and never reorders the underlying slice.
///
/// # Example
///
/// ```rust
/// use flagdb_core::{FilterCriteria, FlagCatalog, FlagSearch};
///
/// let catalog = FlagCatalog::bundled().unwrap();
///
/// let us = catalog.find_by_code("us").unwrap();
/// assert_eq!(us.name, "United States");
///
/// let criteria = FilterCriteria::default().with_search("fra");
/// assert!(catalog.filter(&criteria).iter().any(|f| f.code == "FR"));
/// ```
pub trait FlagSearch {
    fn flags(&self) -> &[FlagRecord];

    fn stats(&self) -> CatalogStats {
        CatalogStats::from_flags(self.flags())
    }

    /// Case-insensitive lookup of a record by its two-letter code.
    fn find_by_code(&self, code: &str) -> Option<&FlagRecord> {
        let code = code.trim();
        self.flags()
            .iter()
            .find(|f| f.code.eq_ignore_ascii_case(code))
    }

    /// Records passing every active constraint in `criteria`, in order.
    fn filter(&self, criteria: &FilterCriteria) -> Vec<&FlagRecord> {
        filter_flags(self.flags(), criteria)
    }

    /// Distinct continents present, sorted.
    fn continents(&self) -> Vec<&str> {
        self.flags()
            .iter()
            .map(|f| f.continent.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of flags containing each palette color.
    fn color_stats(&self) -> Vec<(&'static PaletteColor, usize)> {
        palette::color_stats(self.flags())
    }
}

impl FlagSearch for FlagCatalog {
    fn flags(&self) -> &[FlagRecord] {
        self.as_slice()
    }
}

impl FlagSearch for [FlagRecord] {
    fn flags(&self) -> &[FlagRecord] {
        self
    }
}

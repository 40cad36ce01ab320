// crates/flagdb-core/src/common.rs
use crate::model::FlagRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Duration;

/// Interval between slides when a slideshow runs on its own.
pub const SLIDESHOW_AUTO_INTERVAL: Duration = Duration::from_millis(3000);

/// Simple aggregate statistics over a set of flags.
///
/// Returned by [`FlagSearch::stats`](crate::traits::FlagSearch::stats) and
/// logged by the dataset builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub flags: usize,
    pub continents: usize,
    pub with_colors: usize,
    pub average_colors: f64,
}

impl CatalogStats {
    pub fn from_flags<'a, I>(flags: I) -> Self
    where
        I: IntoIterator<Item = &'a FlagRecord>,
    {
        let mut continents = BTreeSet::new();
        let (mut total, mut with_colors, mut color_sum) = (0usize, 0usize, 0usize);
        for f in flags {
            total += 1;
            continents.insert(f.continent.as_str());
            if f.has_colors() {
                with_colors += 1;
            }
            color_sum += f.color_count;
        }
        Self {
            flags: total,
            continents: continents.len(),
            with_colors,
            average_colors: if total == 0 {
                0.0
            } else {
                color_sum as f64 / total as f64
            },
        }
    }
}

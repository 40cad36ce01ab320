// crates/flagdb-core/src/filter.rs

//! # Filter Engine
//!
//! Narrows an ordered list of flags by four independent constraints:
//! free-text search, palette colors, color count and continent. Active
//! constraints combine with AND; an inactive one (empty string, empty set,
//! `None`) passes every record. The result keeps the input order.

use crate::color::{flag_contains_color, COLOR_MATCH_THRESHOLD};
use crate::model::FlagRecord;
use crate::text::contains_lower;
use serde::{Deserialize, Deserializer, Serialize};

/// Color-count value meaning "this many colors or more".
pub const MAX_COLOR_COUNT: u8 = 6;

/// The user's current narrowing constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    #[serde(deserialize_with = "null_as_default")]
    pub search: String,
    /// Palette hex values; a flag must contain a near match for each one.
    #[serde(deserialize_with = "null_as_default")]
    pub colors: Vec<String>,
    /// Wider than any real count so out-of-range input matches nothing
    /// instead of failing to parse.
    pub color_count: Option<i64>,
    pub continent: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl FilterCriteria {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_color(mut self, hex: impl Into<String>) -> Self {
        let hex = hex.into();
        if !self.colors.contains(&hex) {
            self.colors.push(hex);
        }
        self
    }

    pub fn with_color_count(mut self, count: u8) -> Self {
        self.color_count = Some(i64::from(count));
        self
    }

    pub fn with_continent(mut self, continent: impl Into<String>) -> Self {
        self.continent = Some(continent.into());
        self
    }

    /// True when no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.colors.is_empty()
            && self.color_count.is_none()
            && self.continent.is_none()
    }

    /// True when any constraint other than search is active.
    pub fn has_active_filters(&self) -> bool {
        !self.colors.is_empty() || self.color_count.is_some() || self.continent.is_some()
    }
}

/// Filters `flags` by `criteria`, preserving order.
///
/// Accepts anything that yields `&FlagRecord`: a catalog, a slice, or the
/// output of a previous call, so filters can be chained.
///
/// ```rust
/// use flagdb_core::filter::{filter_flags, FilterCriteria};
/// use flagdb_core::FlagRecord;
///
/// let flags = vec![
///     FlagRecord::new("US", "United States", "North America", "Washington D.C.",
///         vec!["#B31942".into(), "#FFFFFF".into(), "#0A3161".into()]),
///     FlagRecord::new("FR", "France", "Europe", "Paris",
///         vec!["#002395".into(), "#FFFFFF".into(), "#ED2939".into()]),
/// ];
///
/// let hits = filter_flags(&flags, &FilterCriteria::default().with_search("fra"));
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].code, "FR");
/// ```
pub fn filter_flags<'a, I>(flags: I, criteria: &FilterCriteria) -> Vec<&'a FlagRecord>
where
    I: IntoIterator<Item = &'a FlagRecord>,
{
    let query = Query::new(criteria);
    flags.into_iter().filter(|f| query.matches(f)).collect()
}

/// The per-record predicate behind [`filter_flags`].
pub fn matches(flag: &FlagRecord, criteria: &FilterCriteria) -> bool {
    Query::new(criteria).matches(flag)
}

/// Criteria with the search text normalized once per call instead of once
/// per record.
struct Query<'c> {
    search: Option<String>,
    criteria: &'c FilterCriteria,
}

impl<'c> Query<'c> {
    fn new(criteria: &'c FilterCriteria) -> Self {
        let trimmed = criteria.search.trim();
        Self {
            search: (!trimmed.is_empty()).then(|| trimmed.to_lowercase()),
            criteria,
        }
    }

    fn matches(&self, flag: &FlagRecord) -> bool {
        self.matches_search(flag)
            && self.matches_colors(flag)
            && self.matches_color_count(flag)
            && self.matches_continent(flag)
    }

    fn matches_search(&self, flag: &FlagRecord) -> bool {
        let Some(q) = self.search.as_deref() else {
            return true;
        };
        [&flag.name, &flag.code, &flag.capital, &flag.continent]
            .into_iter()
            .any(|field| contains_lower(field, q))
    }

    fn matches_colors(&self, flag: &FlagRecord) -> bool {
        self.criteria
            .colors
            .iter()
            .all(|c| flag_contains_color(flag, c, COLOR_MATCH_THRESHOLD))
    }

    fn matches_color_count(&self, flag: &FlagRecord) -> bool {
        match self.criteria.color_count {
            None => true,
            Some(n) if n == i64::from(MAX_COLOR_COUNT) => {
                flag.color_count >= usize::from(MAX_COLOR_COUNT)
            }
            Some(n) => usize::try_from(n).is_ok_and(|n| flag.color_count == n),
        }
    }

    fn matches_continent(&self, flag: &FlagRecord) -> bool {
        self.criteria
            .continent
            .as_deref()
            .is_none_or(|c| flag.continent == c)
    }
}

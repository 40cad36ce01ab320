// crates/flagdb-core/src/controller.rs
use crate::filter::{filter_flags, FilterCriteria};
use crate::model::FlagRecord;
use serde::{Deserialize, Serialize};

/// A single user interaction with the filter panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum FilterAction {
    SetSearch(String),
    /// Adds the color if absent, removes it if present.
    ToggleColor(String),
    /// Selecting the active count again clears it.
    SetColorCount(Option<i64>),
    /// Selecting the active continent again clears it.
    SetContinent(Option<String>),
    /// Clears colors, count and continent. The search text is kept.
    ClearFilters,
    Reset,
}

impl FilterCriteria {
    /// Pure transition: returns the criteria after `action`.
    pub fn apply(mut self, action: FilterAction) -> Self {
        match action {
            FilterAction::SetSearch(search) => self.search = search,
            FilterAction::ToggleColor(hex) => {
                if let Some(pos) = self.colors.iter().position(|c| *c == hex) {
                    self.colors.remove(pos);
                } else {
                    self.colors.push(hex);
                }
            }
            FilterAction::SetColorCount(count) => {
                self.color_count = toggled(self.color_count, count);
            }
            FilterAction::SetContinent(continent) => {
                self.continent = toggled(self.continent, continent);
            }
            FilterAction::ClearFilters => {
                self.colors.clear();
                self.color_count = None;
                self.continent = None;
            }
            FilterAction::Reset => self = FilterCriteria::default(),
        }
        self
    }
}

fn toggled<T: PartialEq>(current: Option<T>, requested: Option<T>) -> Option<T> {
    if current == requested {
        None
    } else {
        requested
    }
}

/// Owns the criteria for one view of a catalog and recomputes the visible
/// flags after each action.
#[derive(Debug, Clone)]
pub struct FilterController<'a> {
    flags: &'a [FlagRecord],
    criteria: FilterCriteria,
}

impl<'a> FilterController<'a> {
    pub fn new(flags: &'a [FlagRecord]) -> Self {
        Self {
            flags,
            criteria: FilterCriteria::default(),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn dispatch(&mut self, action: FilterAction) -> Vec<&'a FlagRecord> {
        tracing::trace!(?action, "filter action");
        self.criteria = std::mem::take(&mut self.criteria).apply(action);
        self.visible()
    }

    pub fn visible(&self) -> Vec<&'a FlagRecord> {
        filter_flags(self.flags, &self.criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_color_adds_then_removes() {
        let c = FilterCriteria::default().apply(FilterAction::ToggleColor("#FFFFFF".into()));
        assert_eq!(c.colors, ["#FFFFFF"]);
        let c = c.apply(FilterAction::ToggleColor("#E53935".into()));
        assert_eq!(c.colors, ["#FFFFFF", "#E53935"]);
        let c = c.apply(FilterAction::ToggleColor("#FFFFFF".into()));
        assert_eq!(c.colors, ["#E53935"]);
    }

    #[test]
    fn choosing_the_same_count_twice_clears_it() {
        let c = FilterCriteria::default().apply(FilterAction::SetColorCount(Some(3)));
        assert_eq!(c.color_count, Some(3));
        let c = c.apply(FilterAction::SetColorCount(Some(4)));
        assert_eq!(c.color_count, Some(4));
        let c = c.apply(FilterAction::SetColorCount(Some(4)));
        assert_eq!(c.color_count, None);
    }

    #[test]
    fn choosing_the_same_continent_twice_clears_it() {
        let c = FilterCriteria::default().apply(FilterAction::SetContinent(Some("Asia".into())));
        assert_eq!(c.continent.as_deref(), Some("Asia"));
        let c = c.apply(FilterAction::SetContinent(Some("Asia".into())));
        assert_eq!(c.continent, None);
    }

    #[test]
    fn clear_filters_keeps_search() {
        let c = FilterCriteria::default()
            .with_search("island")
            .with_color("#FFFFFF")
            .with_color_count(2)
            .with_continent("Oceania")
            .apply(FilterAction::ClearFilters);
        assert_eq!(c.search, "island");
        assert!(!c.has_active_filters());

        assert!(c.apply(FilterAction::Reset).is_empty());
    }

    #[test]
    fn controller_recomputes_on_dispatch() {
        let flags = vec![
            FlagRecord::new("FR", "France", "Europe", "Paris", vec!["#002395".into()]),
            FlagRecord::new("JP", "Japan", "Asia", "Tokyo", vec!["#FFFFFF".into(), "#BC002D".into()]),
        ];
        let mut ctl = FilterController::new(&flags);
        assert_eq!(ctl.visible().len(), 2);

        let shown = ctl.dispatch(FilterAction::SetContinent(Some("Asia".into())));
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].code, "JP");

        let shown = ctl.dispatch(FilterAction::SetContinent(Some("Asia".into())));
        assert_eq!(shown.len(), 2);
        assert!(ctl.criteria().is_empty());
    }

    #[test]
    fn actions_deserialize_from_tagged_json() {
        let a: FilterAction =
            serde_json::from_str(r##"{"type":"toggleColor","value":"#FFFFFF"}"##).unwrap();
        assert_eq!(a, FilterAction::ToggleColor("#FFFFFF".into()));
        let r: FilterAction = serde_json::from_str(r#"{"type":"reset"}"#).unwrap();
        assert_eq!(r, FilterAction::Reset);
    }
}

// crates/flagdb-core/src/model/flag.rs
use serde::{Deserialize, Serialize};

/// One country's flag and display data.
///
/// Field names follow the bundled `flags.json` (camelCase). `color_count`
/// mirrors `colors.len()`; the dataset builder guarantees it and queries
/// trust it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagRecord {
    /// ISO 3166-1 alpha-2 code, e.g. `"US"`.
    pub code: String,
    pub name: String,
    pub continent: String,
    pub capital: String,
    /// Hex colors as they appear in the flag, e.g. `["#B31942", "#FFFFFF"]`.
    #[serde(default)]
    pub colors: Vec<String>,
    pub color_count: usize,
    #[serde(default)]
    pub population: Option<u64>,
    /// Area in km².
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
}

impl FlagRecord {
    /// Builds a record with no optional attributes, deriving `color_count`.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        continent: impl Into<String>,
        capital: impl Into<String>,
        colors: Vec<String>,
    ) -> Self {
        let color_count = colors.len();
        Self {
            code: code.into(),
            name: name.into(),
            continent: continent.into(),
            capital: capital.into(),
            colors,
            color_count,
            population: None,
            area: None,
            languages: None,
        }
    }

    pub fn has_colors(&self) -> bool {
        !self.colors.is_empty()
    }

    /// A one-sentence summary for detail views and alt text.
    ///
    /// ```rust
    /// use flagdb_core::FlagRecord;
    ///
    /// let fr = FlagRecord::new("FR", "France", "Europe", "Paris",
    ///     vec!["#002395".into(), "#FFFFFF".into(), "#ED2939".into()]);
    /// assert_eq!(
    ///     fr.description(),
    ///     "The flag of France, located in Europe, with 3 colors. Capital: Paris."
    /// );
    /// ```
    pub fn description(&self) -> String {
        let colors = match self.color_count {
            0 => String::new(),
            1 => ", with 1 color".to_string(),
            n => format!(", with {n} colors"),
        };
        format!(
            "The flag of {}, located in {}{}. Capital: {}.",
            self.name, self.continent, colors, self.capital
        )
    }
}

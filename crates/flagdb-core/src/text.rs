// crates/flagdb-core/src/text.rs
/// Convert a string into a folded key suitable for ordering.
///
/// Transliterates Unicode to ASCII (`Åland` -> `Aland`) and lowercases, so
/// names sort the way a human-facing alphabetical list expects.
///
/// ```rust
/// use flagdb_core::text::fold_key;
///
/// assert_eq!(fold_key("Åland Islands"), "aland islands");
/// assert_eq!(fold_key("Curaçao"), "curacao");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Case-insensitive substring test. `needle_lower` must already be lowercase.
#[inline]
pub fn contains_lower(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accented_names_fold_next_to_their_base_letter() {
        assert!(fold_key("Åland Islands") < fold_key("Albania"));
        assert!(fold_key("Afghanistan") < fold_key("Åland Islands"));
        assert!(fold_key("Réunion") < fold_key("Romania"));
    }

    #[test]
    fn folding_ignores_case() {
        assert!(fold_key("chad") < fold_key("Chile"));
        assert_eq!(fold_key("FRANCE"), fold_key("France"));
    }

    #[test]
    fn contains_lower_is_case_insensitive() {
        assert!(contains_lower("France", "fra"));
        assert!(contains_lower("NORTH AMERICA", "north"));
        assert!(!contains_lower("Germany", "fra"));
    }
}

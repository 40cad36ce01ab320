// crates/flagdb-core/src/model/catalog.rs
use super::flag::FlagRecord;
use crate::text::fold_key;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// The immutable, alphabetically ordered flag catalog.
///
/// Records are sorted exactly once, in [`FlagCatalog::from_records`]. Every
/// consumer (listing, filtering, slideshow) relies on that order, so the
/// catalog hands out shared slices and never reorders afterwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FlagCatalog {
    flags: Vec<FlagRecord>,
}

impl FlagCatalog {
    /// Builds a catalog, sorting by folded name (then raw name, then code).
    pub fn from_records(mut records: Vec<FlagRecord>) -> Self {
        records.sort_by_cached_key(|f| (fold_key(&f.name), f.name.clone(), f.code.clone()));
        Self { flags: records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlagRecord> {
        self.flags.iter()
    }

    pub fn as_slice(&self) -> &[FlagRecord] {
        &self.flags
    }

    /// Up to `count` distinct records in random order.
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<&FlagRecord> {
        let mut refs: Vec<&FlagRecord> = self.flags.iter().collect();
        let (picked, _) = refs.partial_shuffle(rng, count);
        picked.to_vec()
    }
}

impl<'a> IntoIterator for &'a FlagCatalog {
    type Item = &'a FlagRecord;
    type IntoIter = std::slice::Iter<'a, FlagRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.flags.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rec(code: &str, name: &str) -> FlagRecord {
        FlagRecord::new(code, name, "Europe", "Capital", vec![])
    }

    #[test]
    fn from_records_sorts_alphabetically_with_folding() {
        let cat = FlagCatalog::from_records(vec![
            rec("AL", "Albania"),
            rec("AX", "Åland Islands"),
            rec("AF", "Afghanistan"),
            rec("ZW", "zimbabwe"),
        ]);
        let codes: Vec<_> = cat.iter().map(|f| f.code.as_str()).collect();
        assert_eq!(codes, ["AF", "AX", "AL", "ZW"]);
    }

    #[test]
    fn duplicate_names_are_ordered_by_code() {
        let cat = FlagCatalog::from_records(vec![rec("YY", "Same"), rec("XX", "Same")]);
        assert_eq!(cat.as_slice()[0].code, "XX");
    }

    #[test]
    fn sample_returns_distinct_records_and_caps_at_len() {
        let cat = FlagCatalog::from_records(vec![rec("A1", "A"), rec("B1", "B"), rec("C1", "C")]);
        let mut rng = StdRng::seed_from_u64(7);

        let two = cat.sample(2, &mut rng);
        assert_eq!(two.len(), 2);
        assert_ne!(two[0].code, two[1].code);

        let all = cat.sample(10, &mut rng);
        let codes: HashSet<_> = all.iter().map(|f| f.code.as_str()).collect();
        assert_eq!(codes.len(), 3);
    }

    #[test]
    fn sample_of_empty_catalog_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(FlagCatalog::empty().sample(5, &mut rng).is_empty());
    }
}

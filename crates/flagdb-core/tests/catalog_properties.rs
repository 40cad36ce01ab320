use flagdb_core::prelude::*;
use flagdb_core::text::fold_key;
use rstest::rstest;

fn catalog() -> &'static FlagCatalog {
    FlagCatalog::load().expect("bundled dataset should load")
}

#[test]
fn bundled_catalog_is_sorted_and_consistent() {
    let flags = catalog().as_slice();
    assert_eq!(flags.len(), 250);

    for pair in flags.windows(2) {
        assert!(
            fold_key(&pair[0].name) <= fold_key(&pair[1].name),
            "{} should not precede {}",
            pair[0].name,
            pair[1].name
        );
    }
    for f in flags {
        assert_eq!(f.color_count, f.colors.len(), "{} colorCount drifted", f.code);
        assert_eq!(f.code.len(), 2);
    }
}

#[test]
fn empty_criteria_returns_the_whole_catalog_in_order() {
    let all: Vec<&FlagRecord> = catalog().iter().collect();
    assert_eq!(catalog().filter(&FilterCriteria::default()), all);
}

#[test]
fn every_flag_is_found_by_its_own_continent_and_count() {
    let cat = catalog();
    for f in cat.iter() {
        let by_continent = cat.filter(&FilterCriteria::default().with_continent(f.continent.clone()));
        assert!(by_continent.contains(&f), "{} missing from {}", f.code, f.continent);

        let count = u8::try_from(f.color_count).unwrap();
        let by_count = cat.filter(&FilterCriteria::default().with_color_count(count));
        assert!(by_count.contains(&f), "{} missing from count {count}", f.code);

        if f.color_count >= usize::from(MAX_COLOR_COUNT) {
            let by_sentinel = cat.filter(&FilterCriteria::default().with_color_count(MAX_COLOR_COUNT));
            assert!(by_sentinel.contains(&f));
        }
    }
}

#[test]
fn six_plus_finds_the_busiest_flags() {
    let hits = catalog().filter(&FilterCriteria::default().with_color_count(MAX_COLOR_COUNT));
    let mut codes: Vec<_> = hits.iter().map(|f| f.code.as_str()).collect();
    codes.sort_unstable();
    assert_eq!(codes, ["DM", "SS", "ZA"]);
}

#[rstest]
#[case("#FFFFFF", "#E53935")]
#[case("#1E88E5", "#FDD835")]
#[case("#43A047", "#212121")]
fn color_constraints_decompose(#[case] first: &str, #[case] second: &str) {
    let cat = catalog();
    let both = FilterCriteria::default().with_color(first).with_color(second);
    let direct = cat.filter(&both);

    let step = cat.filter(&FilterCriteria::default().with_color(first));
    let chained = filter_flags(step, &FilterCriteria::default().with_color(second));

    assert_eq!(direct, chained);
}

#[test]
fn filtering_preserves_catalog_order() {
    let cat = catalog();
    let hits = cat.filter(&FilterCriteria::default().with_search("island"));
    assert!(hits.len() > 5);
    let positions: Vec<usize> = hits
        .iter()
        .map(|h| cat.iter().position(|f| f.code == h.code).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn us_and_france_example() {
    let cat = catalog();
    let pair: Vec<FlagRecord> = ["US", "FR"]
        .iter()
        .map(|c| cat.find_by_code(c).unwrap().clone())
        .collect();
    let pair = FlagCatalog::from_records(pair);

    let codes = |c: &FilterCriteria| -> Vec<String> {
        pair.filter(c).iter().map(|f| f.code.clone()).collect()
    };

    assert_eq!(codes(&FilterCriteria::default().with_search("fra")), ["FR"]);
    assert_eq!(codes(&FilterCriteria::default().with_color("#FFFFFF")), ["FR", "US"]);
    assert_eq!(
        codes(&FilterCriteria::default().with_continent("Europe").with_color_count(3)),
        ["FR"]
    );
    assert!(codes(&FilterCriteria::default().with_color_count(6)).is_empty());
}

#[test]
fn lookup_by_code_is_case_insensitive() {
    let cat = catalog();
    assert_eq!(cat.find_by_code(" gb ").unwrap().name, "United Kingdom");
    assert!(cat.find_by_code("XX").is_none());
    assert!(cat.find_by_code("").is_none());
}

#[test]
fn continents_cover_all_seven_regions() {
    let found = catalog().continents();
    let expected: Vec<&str> = Continent::ALL.iter().map(|c| c.as_str()).collect();
    assert_eq!(found, expected);
}

#[test]
fn stats_and_color_stats_match_the_dataset() {
    let cat = catalog();
    let stats = cat.stats();
    assert_eq!(stats.flags, 250);
    assert_eq!(stats.continents, 7);
    assert_eq!(stats.with_colors, 244);

    let color_stats = cat.color_stats();
    assert_eq!(color_stats.len(), PALETTE.len());
    let white = color_stats.iter().find(|(c, _)| c.name == "White").unwrap().1;
    assert!(white > 100, "white should be common, got {white}");
}

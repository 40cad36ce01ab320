use flagdb_cli::args::Commands;
use flagdb_cli::commands::{resolve_color, resolve_continent, run};
use flagdb_core::FlagCatalog;

fn output_of(command: Commands) -> String {
    let catalog = FlagCatalog::bundled().unwrap();
    let mut out = Vec::new();
    run(command, &catalog, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn colors_resolve_from_names_and_hex() {
    assert_eq!(resolve_color("red").unwrap(), "#E53935");
    assert_eq!(resolve_color("Light Blue").unwrap(), "#4FC3F7");
    assert_eq!(resolve_color("#ffffff").unwrap(), "#FFFFFF");
    assert_eq!(resolve_color("123abc").unwrap(), "#123ABC");
    assert!(resolve_color("chartreuse").is_err());
}

#[test]
fn continents_resolve_to_display_names() {
    assert_eq!(resolve_continent("north-america"), "North America");
    assert_eq!(resolve_continent("EUROPE"), "Europe");
    assert_eq!(resolve_continent("Atlantis"), "Atlantis");
}

#[test]
fn show_prints_details_and_description() {
    let text = output_of(Commands::Show { code: "fr".into() });
    assert!(text.contains("Flag: France (FR)"));
    assert!(text.contains("Capital: Paris"));
    assert!(text.contains("The flag of France, located in Europe, with 3 colors."));
}

#[test]
fn show_unknown_code_is_an_error() {
    let catalog = FlagCatalog::bundled().unwrap();
    let mut out = Vec::new();
    assert!(run(Commands::Show { code: "QQ".into() }, &catalog, &mut out).is_err());
}

#[test]
fn filter_json_output_parses_back() {
    let text = output_of(Commands::Filter {
        search: None,
        colors: vec![],
        count: Some(6),
        continent: None,
        json: true,
    });
    let records: Vec<serde_json::Value> = serde_json::from_str(&text).unwrap();
    let codes: Vec<&str> = records.iter().filter_map(|r| r["code"].as_str()).collect();
    // Catalog order is by name: Dominica, South Africa, South Sudan.
    assert_eq!(codes, ["DM", "ZA", "SS"]);
}

#[test]
fn filter_text_output_lists_matches_and_total() {
    let text = output_of(Commands::Filter {
        search: Some("france".into()),
        colors: vec!["white".into()],
        count: None,
        continent: Some("europe".into()),
        json: false,
    });
    assert!(text.contains("France (FR) | Europe"));
    assert!(text.contains("1 of 250 flags"));
}

#[test]
fn slideshow_wraps_and_starts_where_asked() {
    let text = output_of(Commands::Slideshow {
        random: None,
        seed: None,
        start: Some("zw".into()),
        steps: Some(2),
    });
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("[250/250]"));
    assert!(lines[1].starts_with("[1/250]"));
}

#[test]
fn seeded_random_slideshow_is_repeatable() {
    let make = || Commands::Slideshow {
        random: Some(4),
        seed: Some(99),
        start: None,
        steps: None,
    };
    let first = output_of(make());
    assert_eq!(first.lines().count(), 4);
    assert_eq!(first, output_of(make()));
}

#[test]
fn palette_lists_all_fourteen_swatches() {
    let text = output_of(Commands::Palette);
    assert_eq!(text.lines().count(), 14);
    assert!(text.starts_with("Red"));
}

#[test]
fn unseeded_random_slideshow_picks_the_requested_count() {
    let text = output_of(Commands::Slideshow {
        random: Some(3),
        seed: None,
        start: None,
        steps: None,
    });
    assert_eq!(text.lines().count(), 3);
    assert!(text.lines().all(|l| l.starts_with('[') && l.contains("/3]")));
}

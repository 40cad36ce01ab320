//! Advanced filtering example for flagdb-rs
//!
//! This example demonstrates color matching, the color-count sentinel,
//! the filter controller, and random sampling.

use flagdb_core::palette;
use flagdb_core::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    println!("=== flagdb-rs Advanced Filtering Example ===\n");

    let catalog = FlagCatalog::load()?;

    // Example 1: Colors combine with AND
    println!("--- Example 1: European flags with red and white ---");
    let red = palette::resolve("red").unwrap_or("#E53935");
    let white = palette::resolve("white").unwrap_or("#FFFFFF");
    let criteria = FilterCriteria::default()
        .with_color(red)
        .with_color(white)
        .with_continent(Continent::Europe.as_str());

    let hits = catalog.filter(&criteria);
    println!("Found {} flags:", hits.len());
    for flag in hits.iter().take(10) {
        println!("- {} {}", flag.name, flag.colors.join(" "));
    }
    println!();

    // Example 2: A count of 6 means "six or more"
    println!("--- Example 2: Flags with six or more colors ---");
    let criteria = FilterCriteria::default().with_color_count(MAX_COLOR_COUNT);
    for flag in catalog.filter(&criteria) {
        println!("- {} ({} colors)", flag.name, flag.color_count);
    }
    println!();

    // Example 3: How close is a flag's red to the palette's red?
    println!("--- Example 3: Color distances ---");
    for code in ["FR", "US", "CN"] {
        if let Some(flag) = catalog.find_by_code(code) {
            let closest = flag
                .colors
                .iter()
                .map(|c| color_distance(c, red))
                .fold(f64::INFINITY, f64::min);
            let verdict = if closest < COLOR_MATCH_THRESHOLD {
                "match"
            } else {
                "no match"
            };
            println!("- {}: {:.1} ({verdict})", flag.name, closest);
        }
    }
    println!();

    // Example 4: Drive the filter like a UI would
    println!("--- Example 4: Filter controller ---");
    let mut controller = FilterController::new(catalog.as_slice());
    let steps = [
        FilterAction::SetContinent(Some("Oceania".into())),
        FilterAction::SetColorCount(Some(3)),
        FilterAction::ToggleColor(palette::resolve("blue").unwrap_or("#1E88E5").into()),
        FilterAction::SetColorCount(Some(3)),
        FilterAction::ClearFilters,
    ];
    for action in steps {
        let label = format!("{action:?}");
        let visible = controller.dispatch(action);
        println!("{label:<40} -> {} flags", visible.len());
    }
    println!();

    // Example 5: Top palette colors across the catalog
    println!("--- Example 5: Palette usage ---");
    let mut stats = catalog.color_stats();
    stats.sort_by(|a, b| b.1.cmp(&a.1));
    for (color, count) in stats.iter().take(5) {
        println!("- {:<10} {count}", color.name);
    }
    println!();

    // Example 6: A repeatable random sample
    println!("--- Example 6: Five random flags (seed 2024) ---");
    let mut rng = StdRng::seed_from_u64(2024);
    for flag in catalog.sample(5, &mut rng) {
        println!("- {}", flag.name);
    }

    Ok(())
}

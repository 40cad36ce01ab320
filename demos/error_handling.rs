//! Error handling example for flagdb-rs
//!
//! This example demonstrates load failures, missing records and
//! malformed colors.

use flagdb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== flagdb-rs Error Handling Example ===\n");

    // Example 1: Typed errors from an explicit path
    println!("--- Example 1: Loading a missing dataset ---");
    match FlagCatalog::load_from_path("does/not/exist.json") {
        Ok(catalog) => println!("✓ Loaded {} flags", catalog.len()),
        Err(FlagError::NotFound(path)) => println!("✗ Not found: {path}"),
        Err(e) => println!("✗ Failed: {e}"),
    }

    match FlagCatalog::load_from_path("flags.csv") {
        Ok(_) => println!("✓ Loaded"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 2: The never-failing variant keeps the error as a marker
    println!("--- Example 2: Empty catalog with an error marker ---");
    let load = FlagCatalog::load_or_empty("does/not/exist.json");
    println!("  flags: {}, ok: {}", load.catalog.len(), load.is_ok());
    if let Some(e) = &load.error {
        println!("  error: {e}");
    }
    println!();

    let catalog = FlagCatalog::load()?;

    // Example 3: Missing records are simply absent
    println!("--- Example 3: Looking up unknown codes ---");
    for code in ["XX", "", "USA", "us"] {
        match catalog.find_by_code(code) {
            Some(flag) => println!("  Found: {} ({})", flag.name, flag.code),
            None => println!("  Not found: {code:?}"),
        }
    }
    println!();

    // Example 4: Malformed colors match nothing and never error
    println!("--- Example 4: Malformed colors ---");
    for hex in ["#GGGGGG", "#FFF", "not a color"] {
        let criteria = FilterCriteria::default().with_color(hex);
        println!(
            "  {hex:<12} distance to white: {}, matches: {}",
            color_distance(hex, "#FFFFFF"),
            catalog.filter(&criteria).len()
        );
    }
    println!();

    // Example 5: Unknown continents parse as errors but filter to nothing
    println!("--- Example 5: Unknown continent ---");
    if let Err(e) = "Atlantis".parse::<Continent>() {
        println!("  parse: {e}");
    }
    let criteria = FilterCriteria::default().with_continent("Atlantis");
    println!("  matches: {}", catalog.filter(&criteria).len());

    Ok(())
}

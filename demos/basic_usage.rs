//! Basic usage example for flagdb-rs
//!
//! This example demonstrates how to:
//! - Load the flag catalog
//! - Look up a flag by code
//! - Run a simple filter
//! - Step through a slideshow

use flagdb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== flagdb-rs Basic Usage Example ===\n");

    println!("Loading flag catalog...");
    let catalog = FlagCatalog::load()?;
    println!("✓ Catalog loaded successfully\n");

    // Example 1: The first few flags, alphabetically
    println!("--- Example 1: List flags ---");
    println!("Total flags: {}", catalog.len());
    for (i, flag) in catalog.iter().take(5).enumerate() {
        println!("{}. {} ({})", i + 1, flag.name, flag.code);
    }
    println!("... and {} more\n", catalog.len().saturating_sub(5));

    // Example 2: Lookup is case-insensitive
    println!("--- Example 2: Find flag by code ---");
    if let Some(flag) = catalog.find_by_code("jp") {
        println!("Found: {}", flag.name);
        println!("Capital: {}", flag.capital);
        println!("Colors: {}", flag.colors.join(", "));
        println!("{}", flag.description());
    }
    println!();

    // Example 3: Search text covers name, code, capital and continent
    println!("--- Example 3: Search for 'guinea' ---");
    let criteria = FilterCriteria::default().with_search("guinea");
    for flag in catalog.filter(&criteria) {
        println!("- {} ({})", flag.name, flag.continent);
    }
    println!();

    // Example 4: Slideshow wraps around at both ends
    println!("--- Example 4: Slideshow ---");
    let mut show = Slideshow::new(catalog.iter());
    if let Some(flag) = show.go_prev() {
        println!("Previous from the start wraps to: {}", flag.name);
    }
    if let Some(flag) = show.go_next() {
        println!("Next wraps back to: {}", flag.name);
    }
    println!(
        "Autoplay would advance every {} ms",
        flagdb_core::SLIDESHOW_AUTO_INTERVAL.as_millis()
    );

    Ok(())
}

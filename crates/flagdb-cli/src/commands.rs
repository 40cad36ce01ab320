// crates/flagdb-cli/src/commands.rs
use crate::args::Commands;
use anyhow::{bail, Context};
use flagdb_core::color::Rgb;
use flagdb_core::palette;
use flagdb_core::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::borrow::Cow;
use std::io::Write;

/// Loads `--input` when given, otherwise the process-wide default catalog.
pub fn load_catalog(input: Option<&str>) -> anyhow::Result<Cow<'static, FlagCatalog>> {
    match input {
        Some(path) => {
            let catalog = FlagCatalog::load_from_path(path)
                .with_context(|| format!("failed to load dataset from {path}"))?;
            Ok(Cow::Owned(catalog))
        }
        None => Ok(Cow::Borrowed(FlagCatalog::load()?)),
    }
}

/// Turns a palette name or hex value into the hex string used by the filter.
pub fn resolve_color(input: &str) -> anyhow::Result<String> {
    if let Some(hex) = palette::resolve(input) {
        return Ok(hex.to_string());
    }
    match Rgb::from_hex(input.trim()) {
        Some(rgb) => Ok(rgb.to_string()),
        None => bail!("unknown color {input:?}: use a palette name (see `flagdb palette`) or a hex value like #FF0000"),
    }
}

/// Canonical continent name, or the input unchanged if it is not one of the seven.
pub fn resolve_continent(input: &str) -> String {
    match input.parse::<Continent>() {
        Ok(c) => c.as_str().to_string(),
        Err(_) => {
            tracing::warn!(continent = input, "unknown continent, nothing will match");
            input.to_string()
        }
    }
}

pub fn run<W: Write>(command: Commands, catalog: &FlagCatalog, out: &mut W) -> anyhow::Result<()> {
    match command {
        Commands::Stats => {
            let stats = catalog.stats();
            writeln!(out, "Catalog statistics:")?;
            writeln!(out, "  Flags: {}", stats.flags)?;
            writeln!(out, "  Continents: {}", stats.continents)?;
            writeln!(out, "  With color data: {}", stats.with_colors)?;
            writeln!(out, "  Average colors: {:.1}", stats.average_colors)?;
        }

        Commands::List => {
            for f in catalog {
                writeln!(out, "{} ({})", f.name, f.code)?;
            }
        }

        Commands::Show { code } => {
            let Some(f) = catalog.find_by_code(&code) else {
                bail!("no flag found for code {code:?}");
            };
            writeln!(out, "Flag: {} ({})", f.name, f.code)?;
            writeln!(out, "Continent: {}", f.continent)?;
            writeln!(out, "Capital: {}", f.capital)?;
            writeln!(out, "Colors ({}): {}", f.color_count, f.colors.join(" "))?;
            if let Some(population) = f.population {
                writeln!(out, "Population: {population}")?;
            }
            if let Some(area) = f.area {
                writeln!(out, "Area: {area} km²")?;
            }
            if let Some(languages) = f.languages.as_ref().filter(|l| !l.is_empty()) {
                writeln!(out, "Languages: {}", languages.join(", "))?;
            }
            writeln!(out, "{}", f.description())?;
        }

        Commands::Filter {
            search,
            colors,
            count,
            continent,
            json,
        } => {
            let mut criteria = FilterCriteria::default();
            if let Some(search) = search {
                criteria = criteria.with_search(search);
            }
            for color in &colors {
                criteria = criteria.with_color(resolve_color(color)?);
            }
            if let Some(count) = count {
                criteria = criteria.with_color_count(count);
            }
            if let Some(continent) = continent {
                criteria = criteria.with_continent(resolve_continent(&continent));
            }
            tracing::debug!(?criteria, "filtering");

            let hits = catalog.filter(&criteria);
            if json {
                serde_json::to_writer_pretty(&mut *out, &hits)?;
                writeln!(out)?;
            } else if hits.is_empty() {
                writeln!(out, "No flags match.")?;
            } else {
                for f in &hits {
                    writeln!(
                        out,
                        "{} ({}) | {} | {}",
                        f.name,
                        f.code,
                        f.continent,
                        f.colors.join(" ")
                    )?;
                }
                writeln!(out, "{} of {} flags", hits.len(), catalog.len())?;
            }
        }

        Commands::Palette => {
            for c in PALETTE.iter() {
                writeln!(out, "{:<11} {}", c.name, c.hex)?;
            }
        }

        Commands::Continents => {
            for c in catalog.continents() {
                writeln!(out, "{c}")?;
            }
        }

        Commands::Colors => {
            for (color, count) in catalog.color_stats() {
                writeln!(out, "{:<11} {} {:>4}", color.name, color.hex, count)?;
            }
        }

        Commands::Slideshow {
            random,
            seed,
            start,
            steps,
        } => {
            let picked: Vec<&FlagRecord> = match (random, seed) {
                (Some(n), Some(seed)) => catalog.sample(n, &mut StdRng::seed_from_u64(seed)),
                (Some(n), None) => catalog.sample(n, &mut rand::rng()),
                (None, _) => catalog.iter().collect(),
            };
            let mut show = Slideshow::new(picked);
            if show.is_empty() {
                writeln!(out, "No flags to show.")?;
                return Ok(());
            }
            if let Some(code) = start {
                if show.jump_to(&code).is_none() {
                    bail!("flag {code:?} is not part of this slideshow");
                }
            }
            for _ in 0..steps.unwrap_or(show.len()) {
                if let (Some(f), Some(pos)) = (show.current(), show.position()) {
                    writeln!(out, "[{}/{}] {} ({})", pos + 1, show.len(), f.name, f.code)?;
                }
                show.go_next();
            }
        }

        Commands::Convert { output } => {
            catalog
                .save_as(&output)
                .with_context(|| format!("failed to write {output}"))?;
            writeln!(out, "Wrote {} flags to {output}", catalog.len())?;
        }

        #[cfg(feature = "builder")]
        Commands::Build { output, source } => {
            let stats = flagdb_core::builder::build_database(
                source.as_deref().map(std::path::Path::new),
                std::path::Path::new(&output),
            )?;
            writeln!(
                out,
                "Wrote {} flags ({} with colors) to {output}",
                stats.flags, stats.with_colors
            )?;
        }
    }

    Ok(())
}

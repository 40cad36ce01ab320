use clap::{Parser, Subcommand};

/// CLI arguments for flagdb
#[derive(Debug, Parser)]
#[command(
    name = "flagdb",
    version,
    about = "Browse, search and filter the world flag catalog"
)]
pub struct CliArgs {
    /// Dataset to load (.json, .json.gz or .bin). Defaults to $FLAGDB_DATA, then the bundled catalog.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG is used otherwise.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the catalog
    Stats,

    /// List all flags in catalog order
    List,

    /// Show details for a flag by its two-letter code
    Show {
        /// ISO2 code (e.g. FR, us)
        code: String,
    },

    /// Filter flags by text, colors, color count and continent
    Filter {
        /// Substring of name, code, capital or continent (case-insensitive)
        #[arg(short = 's', long)]
        search: Option<String>,

        /// Palette color name or hex value; repeat to require several
        #[arg(short = 'c', long = "color")]
        colors: Vec<String>,

        /// Exact number of colors; 6 means six or more
        #[arg(short = 'n', long = "count", value_parser = clap::value_parser!(u8).range(1..=6))]
        count: Option<u8>,

        /// Continent name (e.g. Europe, "North America", south-america)
        #[arg(short = 'C', long)]
        continent: Option<String>,

        /// Print matching records as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the reference color palette
    Palette,

    /// List the continents present in the catalog
    Continents,

    /// Count flags containing each palette color
    Colors,

    /// Step through flags like the slideshow view
    Slideshow {
        /// Use N random flags instead of the whole catalog
        #[arg(short = 'r', long)]
        random: Option<usize>,

        /// Seed for --random, for repeatable runs
        #[arg(long)]
        seed: Option<u64>,

        /// Code of the flag to start from
        #[arg(long)]
        start: Option<String>,

        /// Number of slides to print (default: one full cycle)
        #[arg(long)]
        steps: Option<usize>,
    },

    /// Write the loaded catalog to another format (.json, .json.gz, .bin)
    Convert {
        /// Output path; the extension selects the format
        output: String,
    },

    /// Regenerate the dataset from the REST Countries API
    #[cfg(feature = "builder")]
    Build {
        /// Output path (e.g. crates/flagdb-core/data/flags.json)
        output: String,

        /// Read a saved API response instead of fetching
        #[arg(long)]
        source: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_colors_and_count() {
        let args = CliArgs::parse_from([
            "flagdb", "filter", "-c", "red", "--color", "#FFFFFF", "-n", "3", "-C", "Europe",
        ]);
        match args.command {
            Commands::Filter {
                colors,
                count,
                continent,
                search,
                json,
            } => {
                assert_eq!(colors, ["red", "#FFFFFF"]);
                assert_eq!(count, Some(3));
                assert_eq!(continent.as_deref(), Some("Europe"));
                assert!(search.is_none());
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_count() {
        assert!(CliArgs::try_parse_from(["flagdb", "filter", "--count", "7"]).is_err());
        assert!(CliArgs::try_parse_from(["flagdb", "filter", "--count", "0"]).is_err());
    }

    #[test]
    fn global_flags_work_after_the_subcommand() {
        let args = CliArgs::parse_from(["flagdb", "stats", "-vv", "--input", "x.json"]);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.input.as_deref(), Some("x.json"));
    }
}

//! flagdb-cli: command-line interface for flagdb-core
//!
//! Inspect the bundled flag catalog from a terminal: print statistics,
//! look up a flag, run the filter engine, or step through a slideshow.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ flagdb stats
//!
//! - Details for a flag (code is case-insensitive)
//!   $ flagdb show fr
//!
//! - Flags of Europe with red and white and exactly three colors
//!   $ flagdb filter -c red -c white -n 3 -C europe
//!
//! - Five random flags, repeatable
//!   $ flagdb slideshow --random 5 --seed 7
//!
//! Data source
//! -----------
//!
//! By default the CLI uses the dataset compiled into `flagdb-core`, or the
//! file named by `FLAGDB_DATA`. Use `--input <path>` to load a `.json`,
//! `.json.gz` or `.bin` dataset instead. Logs go to stderr and follow
//! `RUST_LOG`; `-v` / `-vv` raise the level.
use clap::Parser;
use flagdb_cli::args::CliArgs;
use flagdb_cli::commands;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let catalog = commands::load_catalog(args.input.as_deref())?;
    let mut out = std::io::stdout().lock();
    commands::run(args.command, &catalog, &mut out)
}

//! phrasefuzz command line
//!
//! ## Usage
//!
//! ```bash
//! phrasefuzz match "caesar salad with grilled chicken" "chicken salad"
//! phrasefuzz distance kitten sitting
//! phrasefuzz stem running dogs
//! phrasefuzz search --catalog menu.json "cheeseburger"
//! ```
//!
//! ## Configuration
//!
//! - `--config <file.json>`: catalog/matcher config file
//! - `PHRASEFUZZ_TOLERANCE`: match tolerance (default: 2)
//! - `PHRASEFUZZ_PARALLEL_THRESHOLD`: catalog size for parallel scans (default: 1000)
//! - `RUST_LOG`: Logging filter (default: the `--log-level` flag)

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use phrasefuzz::{config, Result};
use phrasefuzz_core::{
    levenshtein_distance, space_mixed_case, stem_all_words, strip_html, Catalog, FuzzyMatcher,
};
use tracing::{debug, error};

#[derive(Parser, Debug)]
#[command(name = "phrasefuzz")]
#[command(about = "Fuzzy phrase matching, Porter stemming and catalog search")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Is CANDIDATE contained in REFERENCE? Exits 0 on match, 1 otherwise
    Match {
        reference: String,
        candidate: String,
        /// Edit tolerance; negative for exact matching after normalization
        #[arg(short, long, allow_negative_numbers = true)]
        tolerance: Option<i32>,
        /// Print the deciding stage instead of true/false
        #[arg(long)]
        explain: bool,
    },
    /// Print the Levenshtein distance between two strings
    Distance { a: String, b: String },
    /// Print the Porter stem of each word
    Stem {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Search a JSON catalog; prints matching items as JSON lines
    Search {
        /// JSON array of {"id", "name", "aliases"} items
        #[arg(long)]
        catalog: PathBuf,
        term: String,
        /// Edit tolerance; negative for exact matching after normalization
        #[arg(short, long, allow_negative_numbers = true)]
        tolerance: Option<i32>,
    },
    /// Decode HTML entities and strip tags
    StripHtml { text: String },
    /// Insert spaces into a MixedCase name
    SpaceCase { text: String },
}

fn main() -> ExitCode {
    let args = Args::parse();

    phrasefuzz::tracing::init_with_filter(&args.log_level);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "phrasefuzz failed");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let mut settings = config::load(args.config.as_deref())?;
    debug!(?settings, "configuration resolved");

    match args.command {
        Command::Match {
            reference,
            candidate,
            tolerance,
            explain,
        } => {
            if let Some(tolerance) = tolerance {
                settings.matcher.tolerance = tolerance;
            }
            let outcome = FuzzyMatcher::with_config(settings.matcher).explain(&reference, &candidate);
            if explain {
                println!("{outcome}");
            } else {
                println!("{}", outcome.is_match());
            }
            Ok(if outcome.is_match() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Command::Distance { a, b } => {
            println!("{}", levenshtein_distance(&a, &b));
            Ok(ExitCode::SUCCESS)
        }
        Command::Stem { words } => {
            println!("{}", stem_all_words(&words.join(" ")));
            Ok(ExitCode::SUCCESS)
        }
        Command::Search {
            catalog,
            term,
            tolerance,
        } => {
            if let Some(tolerance) = tolerance {
                settings.matcher.tolerance = tolerance;
            }
            let raw = std::fs::read_to_string(&catalog)?;
            let catalog = Catalog::from_json(settings, &raw)?;
            debug!(items = catalog.len(), hash = catalog.index_hash(), "catalog loaded");

            let found = catalog.find_items(&term);
            for item in &found {
                println!("{}", serde_json::to_string(item)?);
            }
            Ok(if found.is_empty() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            })
        }
        Command::StripHtml { text } => {
            println!("{}", strip_html(Some(&text)).unwrap_or_default());
            Ok(ExitCode::SUCCESS)
        }
        Command::SpaceCase { text } => {
            println!("{}", space_mixed_case(&text));
            Ok(ExitCode::SUCCESS)
        }
    }
}

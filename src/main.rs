use anyhow::{Context, Result};
use arrange::{parse_bound, Arranger, Item};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::info;

/// Random and sequential grouping of JSON items
#[derive(Parser, Debug)]
#[command(name = "arrange", version, about)]
struct Cli {
    /// Seed for reproducible output (thread randomness when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log level used when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    /// Print single-line JSON instead of pretty JSON
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a random integer between MINIMUM and MAXIMUM (inclusive)
    RandomInt {
        #[arg(allow_hyphen_values = true)]
        minimum: String,
        #[arg(allow_hyphen_values = true)]
        maximum: String,
    },

    /// Print a random group-size distribution
    Partition {
        items: usize,
        groups: usize,
        min_per_group: usize,
        max_per_group: usize,
    },

    /// Group a JSON array randomly
    #[command(alias = "group")]
    Random {
        /// Minimum items per group
        #[arg(long)]
        min: usize,

        /// Maximum items per group
        #[arg(long)]
        max: usize,

        /// JSON file to read (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Split a JSON array into consecutive chunks
    #[command(alias = "chunk")]
    Sequential {
        /// Chunk size, or the lower bound when --max is given
        #[arg(long)]
        min: usize,

        /// Upper bound for a randomly chosen chunk size
        #[arg(long)]
        max: Option<usize>,

        /// JSON file to read (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Lowercase field names and fill in uid/gender
    Standardize {
        /// JSON file to read (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.clone().into()),
        )
        .init();

    let mut builder = Arranger::builder();
    if let Some(seed) = cli.seed {
        info!(seed, "using seeded random source");
        builder = builder.seed(seed);
    }
    let mut arranger = builder.build();

    match cli.command {
        Commands::RandomInt { minimum, maximum } => {
            let minimum = parse_bound("minimum", &minimum)?;
            let maximum = parse_bound("maximum", &maximum)?;
            print_json(&arranger.random_int(minimum, maximum)?, cli.compact)?;
        }
        Commands::Partition {
            items,
            groups,
            min_per_group,
            max_per_group,
        } => {
            let sizes = arranger.partition(items, groups, min_per_group, max_per_group)?;
            print_json(&sizes, cli.compact)?;
        }
        Commands::Random { min, max, input } => {
            let items: Vec<Value> = read_json(input.as_deref())?;
            info!(items = items.len(), min, max, "grouping randomly");
            let groups = arranger.random(&items, min, max)?;
            print_json(&groups, cli.compact)?;
        }
        Commands::Sequential { min, max, input } => {
            let items: Vec<Value> = read_json(input.as_deref())?;
            info!(items = items.len(), min, ?max, "chunking sequentially");
            let chunks = arranger.sequential(&items, min, max)?;
            print_json(&chunks, cli.compact)?;
        }
        Commands::Standardize { input } => {
            let items: Vec<Item> = read_json(input.as_deref())?;
            info!(items = items.len(), "standardizing");
            print_json(&arranger.standardize(&items), cli.compact)?;
        }
    }

    Ok(())
}

/// Read JSON from a file, or from stdin when no path is given
fn read_json<T: DeserializeOwned>(path: Option<&Path>) -> Result<T> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };

    serde_json::from_str(&text).context("Failed to parse input JSON")
}

fn print_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<()> {
    let text = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .context("Failed to serialize output")?;

    println!("{}", text);
    Ok(())
}

use clap::{Parser, Subcommand};
use fichat_core::Scorer;

/// CLI arguments for fichat
#[derive(Debug, Parser)]
#[command(
    name = "fichat",
    version,
    about = "Ask about financial institutions per city and province"
)]
pub struct CliArgs {
    /// Path to the dataset (.csv, .json or .bin, optionally .gz)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// JSON file with router settings (thresholds, scorers, exit keyword)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Minimum similarity (0-100) for a city match
    #[arg(long = "city-threshold", global = true, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub city_threshold: Option<u8>,

    /// Minimum similarity (0-100) for a province match
    #[arg(long = "province-threshold", global = true, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub province_threshold: Option<u8>,

    /// Similarity scorer for both cities and provinces: ratio | partial_ratio
    #[arg(long = "scorer", global = true)]
    pub scorer: Option<Scorer>,

    /// Print answers as JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// More log output (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Answer a single question
    Ask {
        /// Free-text question, e.g. "how many FIs in quezon city"
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Start an interactive conversation (type 'exit' to leave)
    Chat,

    /// Show a summary of the dataset
    Stats,

    /// List cities, optionally only those of one province
    Cities {
        /// Province name (fuzzy matched)
        #[arg(short = 'p', long = "province")]
        province: Option<String>,
    },

    /// List all provinces
    Provinces,

    /// Normalize the dataset and write a binary snapshot
    Build {
        /// Output path (.bin, or .bin.gz for a compressed snapshot)
        output: String,
    },
}

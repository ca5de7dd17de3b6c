use anyhow::Result;
use clap::{Parser, Subcommand};

use seqkit::ranges::Interval;

mod commands;
mod utils;

#[derive(Parser)]
#[command(name = "seqkit-cmd")]
#[command(about = "Command-line driver for seqkit sequence algorithms")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through bounded sequence operations, printing each state
    Demo {
        /// Capacity of the demo sequence
        #[arg(short, long, default_value_t = 10)]
        capacity: usize,
    },

    /// Search for a value in a list of integers
    Search {
        /// Comma-separated values to search
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
        values: Vec<i32>,

        /// Value to look for
        #[arg(short, long, allow_negative_numbers = true)]
        target: i32,

        /// Search algorithm; binary requires ascending values
        #[arg(short, long, value_enum, default_value_t = commands::search::Method::Binary)]
        method: commands::search::Method,
    },

    /// Print the maximum (or minimum) of every window of width k
    WindowMax {
        /// Comma-separated input values
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
        values: Vec<i32>,

        /// Window width
        #[arg(short)]
        k: usize,

        /// Report window minima instead of maxima
        #[arg(long)]
        min: bool,
    },

    /// Merge overlapping or touching intervals
    Merge {
        /// Interval as START,END (can be specified multiple times)
        #[arg(short, long = "interval", value_parser = utils::parse_interval, allow_hyphen_values = true)]
        intervals: Vec<Interval>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    match cli.command {
        Commands::Demo { capacity } => commands::demo::run(capacity),
        Commands::Search {
            values,
            target,
            method,
        } => commands::search::run(values, target, method),
        Commands::WindowMax { values, k, min } => commands::window::run(values, k, min),
        Commands::Merge { intervals } => commands::merge::run(intervals),
    }
}

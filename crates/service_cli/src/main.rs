//! Stakes CLI - Command Line Operations for Multi-Stake Bankroll Modelling
//!
//! This is the presentation entry point for the stakes_* library crates.
//!
//! # Commands
//!
//! - `stakes aggregate` - Expected value, sigma, Sharpe ratio, and
//!   confidence intervals for a set of stakes
//! - `stakes simulate` - Monte Carlo bankroll trajectories
//!
//! # Architecture
//!
//! All input parsing and output formatting happens here; the model
//! crates only ever see validated numeric arrays. Win rates and
//! standard deviations are given in big blinds per 100 hands, and
//! confidence levels in percent, matching poker convention.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Multi-stake bankroll model CLI
#[derive(Parser)]
#[command(name = "stakes")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate per-stake statistics into one outcome distribution
    Aggregate {
        /// Big blind values in $, comma separated (e.g. "2,5,10")
        #[arg(short, long)]
        stakes: String,

        /// Win rates in bb/100, comma separated (e.g. "5,5,5")
        #[arg(short, long)]
        winrates: String,

        /// Standard deviations in bb/100, comma separated
        #[arg(short = 'd', long)]
        stddevs: String,

        /// Hand counts per stake, comma separated
        #[arg(short = 'n', long)]
        hands: String,

        /// Confidence levels in percent, comma separated
        #[arg(short, long, default_value = "50,75,90,95")]
        confidence: String,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Simulate Monte Carlo bankroll trajectories
    Simulate {
        /// Big blind values in $, comma separated
        #[arg(short, long)]
        stakes: String,

        /// Win rates in bb/100, comma separated
        #[arg(short, long)]
        winrates: String,

        /// Standard deviations in bb/100, comma separated
        #[arg(short = 'd', long)]
        stddevs: String,

        /// Hand counts per stake, comma separated
        #[arg(short = 'n', long)]
        hands: String,

        /// Number of independent runs
        #[arg(short, long, default_value = "10")]
        runs: usize,

        /// Seed for reproducible runs (fresh entropy when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Aggregate {
            stakes,
            winrates,
            stddevs,
            hands,
            confidence,
            format,
        } => commands::aggregate::run(&stakes, &winrates, &stddevs, &hands, &confidence, &format),
        Commands::Simulate {
            stakes,
            winrates,
            stddevs,
            hands,
            runs,
            seed,
        } => commands::simulate::run(&stakes, &winrates, &stddevs, &hands, runs, seed),
    }
}

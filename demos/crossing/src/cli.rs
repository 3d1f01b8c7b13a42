//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use xing_io::DEFAULT_COLUMN;

/// Monte Carlo efficiency sweeps for a controlled crossing.
///
/// Intervals are read from one column of a CSV file.  Sweep settings come
/// from built-in defaults, then an optional JSON config file, then flags.
///
/// Example usage:
///   crossing max-l -i data/intervals.csv --threshold 0.02 --seed 7
///   crossing surface -i data/intervals.csv --n-end 20 -o output/
#[derive(Parser)]
#[command(name = "crossing")]
#[command(version, about = "Crossing efficiency simulator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sweep L at a fixed arrival rate and report the largest L within tolerance
    MaxL {
        #[command(flatten)]
        common: Common,

        /// Arrival rate N
        #[arg(short = 'n', long)]
        rate: Option<f64>,

        /// Units served per cycle, k
        #[arg(short = 'k', long)]
        capacity: Option<u64>,

        #[arg(long)]
        l_start: Option<f64>,

        #[arg(long)]
        l_end: Option<f64>,

        #[arg(long)]
        l_step: Option<f64>,

        /// Half-width of the tolerance band around efficiency 1
        #[arg(short = 't', long)]
        threshold: Option<f64>,

        /// Independent replications per point
        #[arg(short = 'r', long)]
        replications: Option<u32>,
    },

    /// Sweep the (L, N) grid and reconstruct the efficiency surface
    Surface {
        #[command(flatten)]
        common: Common,

        /// Units served per cycle, k
        #[arg(short = 'k', long)]
        capacity: Option<u64>,

        #[arg(long)]
        l_start: Option<f64>,

        #[arg(long)]
        l_end: Option<f64>,

        #[arg(long)]
        l_step: Option<f64>,

        #[arg(long)]
        n_start: Option<f64>,

        #[arg(long)]
        n_end: Option<f64>,

        #[arg(long)]
        n_step: Option<f64>,

        /// Independent replications per point
        #[arg(short = 'r', long)]
        replications: Option<u32>,
    },
}

/// Flags shared by both modes.
#[derive(Args)]
pub struct Common {
    /// CSV file holding the observed intervals
    #[arg(short = 'i', long)]
    pub intervals: PathBuf,

    /// Column to read from the intervals file
    #[arg(long, default_value = DEFAULT_COLUMN)]
    pub column: String,

    /// Fixed run seed (omit for a fresh seed each run)
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// JSON file with sweep settings
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Directory for CSV results
    #[arg(short = 'o', long)]
    pub out: Option<PathBuf>,
}

use clap::{Parser, Subcommand};
use medalmap_core::DEFAULT_TOP_N;

/// CLI arguments for medalmap
#[derive(Debug, Parser)]
#[command(
    name = "medalmap",
    version,
    about = "CLI for per-country Olympic medal statistics"
)]
pub struct CliArgs {
    /// Path to the results CSV (.csv or .csv.gz; default: athlete_events.csv)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Always parse the CSV; neither read nor write the binary row cache
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// Show the medal report for one country
    Country {
        /// Country name as shown on a map (aliases like USA or UK are accepted)
        name: String,

        /// How many top sports to list
        #[arg(long = "top", default_value_t = DEFAULT_TOP_N)]
        top: usize,

        /// Match the team name exactly instead of by substring
        #[arg(long)]
        exact: bool,

        /// Count results without a medal as their own sport events
        #[arg(long = "include-unmedaled")]
        include_unmedaled: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the most and least decorated countries
    Ranking,

    /// List countries by unique-medal count
    Countries {
        /// Only show the first N countries
        #[arg(short = 'n', long = "limit")]
        limit: Option<usize>,
    },

    /// Print the canonical form of a country name
    Normalize {
        /// Name to normalize (e.g. England, usa)
        name: String,
    },

    /// Download the results CSV
    #[cfg(feature = "fetch")]
    Fetch {
        /// Source URL of the CSV
        url: String,

        /// Output path
        out: String,
    },
}

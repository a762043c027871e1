use clap::{Parser, Subcommand, ValueEnum};
use covidtrend_core::TimeFrame;

/// CLI arguments for covidtrend-cli
#[derive(Debug, Parser)]
#[command(
    name = "covidtrend",
    version,
    about = "CLI for querying county and state COVID trends from an NYT-style dataset"
)]
pub struct CliArgs {
    /// Data directory holding us-counties.csv, us-states.csv and the name tables
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<String>,

    /// Optional JSON engine config (thresholds, merge rules, routes)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Print results as JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// Show one county's series (merged areas like NYC included)
    County {
        /// Five-digit county FIPS code (e.g. 06001)
        fips: String,
        #[arg(short = 't', long = "time-frame", value_enum, default_value_t = Frame::Max)]
        time_frame: Frame,
    },

    /// Show one state's series
    State {
        /// Two-digit state FIPS code (e.g. 06)
        fips: String,
        #[arg(short = 't', long = "time-frame", value_enum, default_value_t = Frame::Max)]
        time_frame: Frame,
    },

    /// List the latest counts of every county in a state
    Counties {
        /// Two-digit state FIPS code
        state_fips: String,
    },

    /// Rank regions by percent increase over the last N days
    Trending {
        /// Rank states instead of counties
        #[arg(long)]
        states: bool,
        /// Number of distinct days in the window
        #[arg(long, default_value_t = 7)]
        days: usize,
        /// Only print the N fastest risers
        #[arg(long)]
        top: Option<usize>,
    },

    /// Autocomplete suggestions
    Suggest {
        #[arg(value_enum)]
        kind: SuggestKind,
        /// Prefix to search (case-insensitive)
        term: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Frame {
    Week,
    Month,
    Max,
}

impl From<Frame> for TimeFrame {
    fn from(f: Frame) -> Self {
        match f {
            Frame::Week => TimeFrame::Week,
            Frame::Month => TimeFrame::Month,
            Frame::Max => TimeFrame::Max,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SuggestKind {
    /// County by name
    County,
    /// County by ZIP code
    Zip,
    /// State by name
    State,
}

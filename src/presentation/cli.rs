//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --data, --config) are inherited by all subcommands
//! - Running without a subcommand records the sample week, same as `demo`

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Green Habits - personal carbon-footprint tracker
#[derive(Parser, Debug)]
#[command(name = "green-habits")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'green-habits' without arguments to record the sample week.")]
pub struct Cli {
    /// Emit one JSON object per event instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// When to use colors
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Activity data file (default: user_data.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Config file (default: <config dir>/green-habits/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Record the sample week, print the footprint and suggestions, then save
    Demo,

    /// Record an activity and save
    Add {
        /// Activity identifier (e.g. car_miles)
        activity: String,

        /// Units of the activity
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Print the footprint of the saved activities
    Report,

    /// Print suggestions for reducing the footprint
    Suggest,

    /// Print the emission factor table
    Factors,
}

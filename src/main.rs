//! Green Habits CLI - personal carbon-footprint tracker
//!
//! Usage: green-habits [COMMAND]
//!
//! Commands:
//!   demo     Record the sample week, report it and save (default)
//!   add      Record one activity and save
//!   report   Print the footprint of the saved activities
//!   suggest  Print ways to reduce the footprint
//!   factors  Print the emission factor table

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use green_habits::presentation::Cli;

const LOG_ENV: &str = "GREEN_HABITS_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    commands::dispatch(cli)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

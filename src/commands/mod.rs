//! Subcommand handlers.
//!
//! Each handler loads the config, builds a tracker and reports outcomes
//! through [`Reporter`](crate::ui::output::Reporter). Ledger and storage
//! failures are reported, not returned; only config errors bubble up.

mod add;
mod demo;
mod factors;
mod report;
mod suggest;

use anyhow::{Context, Result};

use green_habits::presentation::{create_tracker, Cli, Commands, ConcreteTracker};
use green_habits::Config;

use crate::ui::context::UiContext;
use crate::ui::output::Reporter;

/// Everything a handler needs for one run.
pub struct Session {
    pub ui: UiContext,
    pub tracker: ConcreteTracker,
}

impl Session {
    pub fn reporter(&self) -> Reporter<'_> {
        Reporter::new(&self.ui)
    }
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let (config, warnings) = Config::load_or_default(cli.config.as_deref()).with_context(|| {
        match &cli.config {
            Some(path) => format!("failed to load config {}", path.display()),
            None => "failed to load config".to_string(),
        }
    })?;

    let ui = UiContext::new(cli.json, cli.color, &config);
    Reporter::new(&ui).config_warnings(&warnings);

    let tracker = create_tracker(&config, cli.data.as_deref());
    tracing::debug!(data = %tracker.data_path().display(), "resolved data file");

    let mut session = Session { ui, tracker };

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => demo::cmd_demo(&mut session),
        Commands::Add { activity, amount } => add::cmd_add(&mut session, &activity, amount),
        Commands::Report => report::cmd_report(&mut session),
        Commands::Suggest => suggest::cmd_suggest(&session),
        Commands::Factors => factors::cmd_factors(&session),
    }

    Ok(())
}

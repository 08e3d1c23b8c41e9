//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.

use std::path::{Path, PathBuf};

use crate::application::Tracker;
use crate::config::Config;
use crate::domain::entities::ActivityLedger;
use crate::infrastructure::JsonLedgerRepository;

/// Type alias for the tracker backed by the JSON data file
pub type ConcreteTracker = Tracker<JsonLedgerRepository>;

/// Resolve the data file: CLI flag, then config (env already applied).
pub fn data_path(config: &Config, cli_data: Option<&Path>) -> PathBuf {
    cli_data
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.storage.data_file.clone())
}

/// Create a tracker with the configured factor table and data file.
pub fn create_tracker(config: &Config, cli_data: Option<&Path>) -> ConcreteTracker {
    Tracker::new(
        ActivityLedger::new(config.emission_factors()),
        JsonLedgerRepository::new(),
        data_path(config, cli_data),
    )
}

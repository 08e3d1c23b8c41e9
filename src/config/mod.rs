//! Configuration module for Green Habits
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (GREEN_HABITS_*)
//! 3. Config file (`--config`, or `<config_dir>/green-habits/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::{ConfigWarning, ConfigWarningKind};

pub use loader::user_config_path;
pub use types::{ColorMode, Config, OutputConfig, StorageConfig};

//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ConfigWarning, EmissionFactors};
use crate::error::GreenHabitsResult;
use crate::infrastructure::DEFAULT_DATA_FILE;

use super::loader;

/// Where the activity record is persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
///
/// ```toml
/// [storage]
/// data_file = "green/user_data.json"
///
/// [output]
/// color = "never"
///
/// [factors]
/// bus_miles = 0.089
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Extra activities, kg CO2 per unit. Built-in activities are fixed.
    #[serde(default)]
    pub factors: BTreeMap<String, f64>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> GreenHabitsResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> GreenHabitsResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit path, the user config, or defaults, then apply
    /// environment overrides.
    pub fn load_or_default(
        explicit: Option<&Path>,
    ) -> GreenHabitsResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Built-in factors plus any extra ones from `[factors]`.
    pub fn emission_factors(&self) -> EmissionFactors {
        EmissionFactors::standard().with_extra(
            self.factors
                .iter()
                .map(|(activity, factor)| (activity.clone(), *factor)),
        )
    }
}

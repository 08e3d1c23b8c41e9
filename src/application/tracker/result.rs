//! Tracker outcomes
//!
//! Every failure the tracker can meet is reported through one of these
//! instead of aborting the run.

use std::path::PathBuf;

/// Result of loading the data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Record replaced with the stored one
    Loaded { path: PathBuf, activities: usize },
    /// No data file yet; ledger stays empty
    StartingFresh { path: PathBuf },
    /// Data file present but unusable; ledger unchanged
    Malformed { path: PathBuf, message: String },
    /// Data file could not be read; ledger unchanged
    Failed { path: PathBuf, message: String },
}

impl LoadOutcome {
    /// True for outcomes that should be shown as failures.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Malformed { .. } | Self::Failed { .. })
    }
}

/// Result of recording one activity
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added {
        activity: String,
        amount: f64,
        /// Accumulated quantity after the add
        total: f64,
    },
    Unrecognized {
        activity: String,
    },
    InvalidAmount {
        activity: String,
        amount: f64,
    },
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added { .. })
    }
}

/// Result of writing the data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { path: PathBuf, activities: usize },
    Failed { path: PathBuf, message: String },
}

impl SaveOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

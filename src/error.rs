//! Error types for Green Habits
//!
//! Uses `thiserror` for library errors. Ledger and storage failures have
//! their own enums next to the code that raises them; this is the crate-level
//! error used for configuration and startup.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Green Habits operations
pub type GreenHabitsResult<T> = Result<T, GreenHabitsError>;

/// Main error type for Green Habits operations
#[derive(Error, Debug)]
pub enum GreenHabitsError {
    /// Config file could not be parsed as TOML
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Config declares an emission factor that is negative or not finite
    #[error("invalid emission factor for '{activity}' in {file}: {factor}")]
    InvalidFactor {
        activity: String,
        factor: f64,
        file: PathBuf,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

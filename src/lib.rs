//! Green Habits - personal carbon-footprint tracker
//!
//! Records activity quantities (miles driven, kWh used, kg of beef eaten),
//! converts them to kg CO2 with a fixed emission factor table, and keeps the
//! running tally in a flat JSON file between runs.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{AddOutcome, LoadOutcome, SaveOutcome, Tracker};
pub use config::Config;
pub use domain::entities::{
    ActivityLedger, ActivityRecord, EmissionLine, Footprint, LedgerError, LoadStatus,
};
pub use domain::ports::{LedgerRepository, LedgerStoreError};
pub use domain::value_objects::{suggestions, EmissionFactors, Suggestion};
pub use error::{GreenHabitsError, GreenHabitsResult};
pub use infrastructure::{JsonLedgerRepository, DEFAULT_DATA_FILE};

//! Tracker Use Case
//!
//! Drives one session against the activity ledger:
//! - Loading the data file (or starting fresh)
//! - Recording activities
//! - Computing the footprint and listing suggestions
//! - Saving the data file

mod result;
mod use_case;

pub use result::{AddOutcome, LoadOutcome, SaveOutcome};
pub use use_case::Tracker;

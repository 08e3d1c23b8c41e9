//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Turns domain and storage errors into reported outcomes
//!
//! ## Use Cases
//!
//! - `Tracker` - load, add, footprint, suggestions, save

pub mod tracker;

pub use tracker::{AddOutcome, LoadOutcome, SaveOutcome, Tracker};

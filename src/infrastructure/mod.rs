//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.

pub mod repositories;

pub use repositories::{JsonLedgerRepository, DEFAULT_DATA_FILE};

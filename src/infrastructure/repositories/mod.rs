//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod ledger;

pub use ledger::{JsonLedgerRepository, DEFAULT_DATA_FILE};

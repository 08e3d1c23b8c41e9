//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod ledger_repository;

pub use ledger_repository::{LedgerRepository, LedgerStoreError};

//! Domain Layer
//!
//! Pure ledger logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - ActivityLedger, ActivityRecord, Footprint
//! - `value_objects/` - EmissionFactors, Suggestion, ConfigWarning
//! - `ports/` - LedgerRepository, implemented by the infrastructure layer

pub mod entities;
pub mod ports;
pub mod value_objects;

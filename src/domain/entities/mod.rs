//! Domain Entities

mod activity_record;
mod footprint;
mod ledger;

pub use activity_record::ActivityRecord;
pub use footprint::{EmissionLine, Footprint};
pub use ledger::{ActivityLedger, LedgerError, LoadStatus};

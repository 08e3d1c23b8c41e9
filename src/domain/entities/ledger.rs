//! Activity ledger entity
//!
//! Owns the emission factor table and the accumulated activity record.
//! Persistence goes through the [`LedgerRepository`] port; the ledger itself
//! never touches the file system.
//!
//! Invariants:
//! - every recorded activity has a factor in the table
//! - recorded quantities are finite and never negative
//! - a rejected add or a failed load leaves the record untouched

use std::path::Path;

use crate::domain::entities::{ActivityRecord, EmissionLine, Footprint};
use crate::domain::ports::{LedgerRepository, LedgerStoreError};
use crate::domain::value_objects::{self, EmissionFactors, Suggestion};

/// Rejection raised by ledger mutations.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum LedgerError {
    #[error("Activity '{activity}' is not recognized. Please try a different one.")]
    UnrecognizedActivity { activity: String },

    #[error("invalid amount {amount} for '{activity}': must be a finite, non-negative number")]
    InvalidAmount { activity: String, amount: f64 },
}

/// What a load found at the storage target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Record replaced with the stored one
    Restored { activities: usize },
    /// Nothing stored yet; record left as it was
    Missing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityLedger {
    factors: EmissionFactors,
    record: ActivityRecord,
}

impl ActivityLedger {
    pub fn new(factors: EmissionFactors) -> Self {
        Self {
            factors,
            record: ActivityRecord::new(),
        }
    }

    pub fn factors(&self) -> &EmissionFactors {
        &self.factors
    }

    pub fn record(&self) -> &ActivityRecord {
        &self.record
    }

    pub fn quantity(&self, activity: &str) -> Option<f64> {
        self.record.get(activity)
    }

    /// Add `amount` units of `activity`, returning the new accumulated value.
    pub fn add_activity(&mut self, activity: &str, amount: f64) -> Result<f64, LedgerError> {
        if !self.factors.contains(activity) {
            return Err(LedgerError::UnrecognizedActivity {
                activity: activity.to_string(),
            });
        }
        let current = self.record.get(activity).unwrap_or(0.0);
        if !amount.is_finite() || amount < 0.0 || !(current + amount).is_finite() {
            return Err(LedgerError::InvalidAmount {
                activity: activity.to_string(),
                amount,
            });
        }
        Ok(self.record.accumulate(activity, amount))
    }

    /// Sum `quantity * factor` over the record. Read-only.
    pub fn calculate_footprint(&self) -> Footprint {
        let mut footprint = Footprint::default();
        for (activity, quantity) in self.record.iter() {
            let factor = self.factors.get(activity).unwrap_or(0.0);
            let emissions = quantity * factor;
            footprint.total += emissions;
            footprint.lines.push(EmissionLine {
                activity: activity.to_string(),
                quantity,
                factor,
                emissions,
            });
        }
        footprint
    }

    /// The fixed suggestion list. Independent of the record.
    pub fn suggestions() -> &'static [Suggestion] {
        value_objects::suggestions()
    }

    /// Replace the whole record after checking it against the invariants.
    ///
    /// On error the current record is kept.
    pub fn restore(&mut self, record: ActivityRecord) -> Result<(), LedgerError> {
        for (activity, amount) in record.iter() {
            if !self.factors.contains(activity) {
                return Err(LedgerError::UnrecognizedActivity {
                    activity: activity.to_string(),
                });
            }
            if !amount.is_finite() || amount < 0.0 {
                return Err(LedgerError::InvalidAmount {
                    activity: activity.to_string(),
                    amount,
                });
            }
        }
        self.record = record;
        Ok(())
    }

    /// Replace the record with what `repository` holds at `path`.
    pub fn load_from<R>(&mut self, repository: &R, path: &Path) -> Result<LoadStatus, LedgerStoreError>
    where
        R: LedgerRepository + ?Sized,
    {
        let Some(record) = repository.load(path)? else {
            return Ok(LoadStatus::Missing);
        };
        let activities = record.len();
        self.restore(record)
            .map_err(|e| LedgerStoreError::Malformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(LoadStatus::Restored { activities })
    }

    /// Write the record to `path`, replacing whatever was there.
    pub fn save_to<R>(&self, repository: &R, path: &Path) -> Result<(), LedgerStoreError>
    where
        R: LedgerRepository + ?Sized,
    {
        repository.save(&self.record, path)
    }
}

impl Default for ActivityLedger {
    fn default() -> Self {
        Self::new(EmissionFactors::standard())
    }
}

//! Tracker use case implementation

use std::path::{Path, PathBuf};

use crate::domain::entities::{ActivityLedger, Footprint, LedgerError, LoadStatus};
use crate::domain::ports::{LedgerRepository, LedgerStoreError};
use crate::domain::value_objects::Suggestion;

use super::result::{AddOutcome, LoadOutcome, SaveOutcome};

/// One tracking session: a ledger bound to its data file.
pub struct Tracker<R: LedgerRepository> {
    ledger: ActivityLedger,
    repository: R,
    data_path: PathBuf,
}

impl<R: LedgerRepository> Tracker<R> {
    pub fn new(ledger: ActivityLedger, repository: R, data_path: PathBuf) -> Self {
        Self {
            ledger,
            repository,
            data_path,
        }
    }

    pub fn ledger(&self) -> &ActivityLedger {
        &self.ledger
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Replace the ledger with the stored record, if there is a usable one.
    pub fn load(&mut self) -> LoadOutcome {
        let path = self.data_path.clone();
        match self.ledger.load_from(&self.repository, &path) {
            Ok(LoadStatus::Restored { activities }) => {
                tracing::info!(path = %path.display(), activities, "loaded activity data");
                LoadOutcome::Loaded { path, activities }
            }
            Ok(LoadStatus::Missing) => {
                tracing::info!(path = %path.display(), "no saved data, starting fresh");
                LoadOutcome::StartingFresh { path }
            }
            Err(LedgerStoreError::Malformed { message, .. }) => {
                tracing::warn!(path = %path.display(), %message, "data file malformed");
                LoadOutcome::Malformed { path, message }
            }
            Err(LedgerStoreError::Io { message, .. }) => {
                tracing::warn!(path = %path.display(), %message, "failed to read data");
                LoadOutcome::Failed { path, message }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load data");
                LoadOutcome::Failed {
                    path,
                    message: e.to_string(),
                }
            }
        }
    }

    pub fn add(&mut self, activity: &str, amount: f64) -> AddOutcome {
        match self.ledger.add_activity(activity, amount) {
            Ok(total) => {
                tracing::debug!(activity, amount, total, "recorded activity");
                AddOutcome::Added {
                    activity: activity.to_string(),
                    amount,
                    total,
                }
            }
            Err(LedgerError::UnrecognizedActivity { activity }) => {
                tracing::warn!(%activity, "unrecognized activity");
                AddOutcome::Unrecognized { activity }
            }
            Err(LedgerError::InvalidAmount { activity, amount }) => {
                tracing::warn!(%activity, amount, "invalid amount");
                AddOutcome::InvalidAmount { activity, amount }
            }
        }
    }

    pub fn footprint(&self) -> Footprint {
        let footprint = self.ledger.calculate_footprint();
        tracing::debug!(
            activities = footprint.lines.len(),
            total = footprint.total,
            "computed footprint"
        );
        footprint
    }

    pub fn suggestions(&self) -> &'static [Suggestion] {
        ActivityLedger::suggestions()
    }

    /// Write the ledger to the data file. The ledger is unchanged either way.
    pub fn save(&self) -> SaveOutcome {
        let path = self.data_path.clone();
        match self.ledger.save_to(&self.repository, &path) {
            Ok(()) => {
                let activities = self.ledger.record().len();
                tracing::info!(path = %path.display(), activities, "saved activity data");
                SaveOutcome::Saved { path, activities }
            }
            Err(LedgerStoreError::Io { message, .. }) => {
                tracing::warn!(path = %path.display(), %message, "failed to write data");
                SaveOutcome::Failed { path, message }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to save data");
                SaveOutcome::Failed {
                    path,
                    message: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ActivityRecord;
    use crate::domain::value_objects::{BEEF_KG, CAR_MILES, ELECTRICITY_KWH};
    use std::sync::Mutex;

    struct InMemoryLedgerRepo {
        stored: Mutex<Option<ActivityRecord>>,
    }

    impl InMemoryLedgerRepo {
        fn new(stored: Option<ActivityRecord>) -> Self {
            Self {
                stored: Mutex::new(stored),
            }
        }
    }

    impl LedgerRepository for InMemoryLedgerRepo {
        fn load(&self, _path: &Path) -> Result<Option<ActivityRecord>, LedgerStoreError> {
            Ok(self.stored.lock().unwrap().clone())
        }

        fn save(&self, record: &ActivityRecord, _path: &Path) -> Result<(), LedgerStoreError> {
            *self.stored.lock().unwrap() = Some(record.clone());
            Ok(())
        }
    }

    struct BrokenRepo;

    impl LedgerRepository for BrokenRepo {
        fn load(&self, path: &Path) -> Result<Option<ActivityRecord>, LedgerStoreError> {
            Err(LedgerStoreError::io(path, "permission denied"))
        }

        fn save(&self, _record: &ActivityRecord, path: &Path) -> Result<(), LedgerStoreError> {
            Err(LedgerStoreError::io(path, "read-only file system"))
        }
    }

    fn tracker_with<R: LedgerRepository>(repo: R) -> Tracker<R> {
        Tracker::new(
            ActivityLedger::default(),
            repo,
            PathBuf::from("user_data.json"),
        )
    }

    #[test]
    fn load_without_data_starts_fresh() {
        let mut tracker = tracker_with(InMemoryLedgerRepo::new(None));
        assert_eq!(
            tracker.load(),
            LoadOutcome::StartingFresh {
                path: PathBuf::from("user_data.json")
            }
        );
        assert!(tracker.ledger().record().is_empty());
    }

    #[test]
    fn load_restores_saved_record() {
        let stored: ActivityRecord = [(CAR_MILES, 40.0)].into_iter().collect();
        let mut tracker = tracker_with(InMemoryLedgerRepo::new(Some(stored)));

        let outcome = tracker.load();

        assert!(matches!(outcome, LoadOutcome::Loaded { activities: 1, .. }));
        assert_eq!(tracker.ledger().quantity(CAR_MILES), Some(40.0));
    }

    #[test]
    fn load_with_unknown_activity_is_malformed() {
        let stored: ActivityRecord = [("hovercraft_km", 1.0)].into_iter().collect();
        let mut tracker = tracker_with(InMemoryLedgerRepo::new(Some(stored)));
        tracker.add(BEEF_KG, 1.0);

        let outcome = tracker.load();

        assert!(matches!(outcome, LoadOutcome::Malformed { .. }));
        assert!(outcome.is_failure());
        assert_eq!(tracker.ledger().quantity(BEEF_KG), Some(1.0));
    }

    #[test]
    fn load_io_failure_is_reported() {
        let mut tracker = tracker_with(BrokenRepo);
        let outcome = tracker.load();
        match outcome {
            LoadOutcome::Failed { message, .. } => assert!(message.contains("permission denied")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn add_reports_each_outcome() {
        let mut tracker = tracker_with(InMemoryLedgerRepo::new(None));

        assert_eq!(
            tracker.add(CAR_MILES, 100.0),
            AddOutcome::Added {
                activity: CAR_MILES.to_string(),
                amount: 100.0,
                total: 100.0
            }
        );
        assert_eq!(
            tracker.add("scooter_km", 1.0),
            AddOutcome::Unrecognized {
                activity: "scooter_km".to_string()
            }
        );
        assert_eq!(
            tracker.add(CAR_MILES, -1.0),
            AddOutcome::InvalidAmount {
                activity: CAR_MILES.to_string(),
                amount: -1.0
            }
        );
        assert_eq!(tracker.ledger().quantity(CAR_MILES), Some(100.0));
    }

    #[test]
    fn save_failure_keeps_ledger() {
        let mut tracker = tracker_with(BrokenRepo);
        tracker.add(ELECTRICITY_KWH, 5.0);

        let outcome = tracker.save();

        assert!(outcome.is_failure());
        assert_eq!(tracker.ledger().quantity(ELECTRICITY_KWH), Some(5.0));
    }

    #[test]
    fn save_then_load_in_new_session() {
        let mut first = tracker_with(InMemoryLedgerRepo::new(None));
        first.add(CAR_MILES, 100.0);
        first.add(ELECTRICITY_KWH, 50.0);
        assert!(matches!(
            first.save(),
            SaveOutcome::Saved { activities: 2, .. }
        ));

        let stored = first.repository.stored.lock().unwrap().clone();
        let mut second = tracker_with(InMemoryLedgerRepo::new(stored));
        second.load();
        second.add(CAR_MILES, 100.0);

        assert_eq!(second.ledger().quantity(CAR_MILES), Some(200.0));
        assert_eq!(second.ledger().quantity(ELECTRICITY_KWH), Some(50.0));
    }

    #[test]
    fn suggestions_are_static() {
        let tracker = tracker_with(InMemoryLedgerRepo::new(None));
        assert_eq!(tracker.suggestions().len(), 3);
    }
}

//! Property tests for the JSON data file.

use proptest::prelude::*;

use green_habits::domain::value_objects::{BEEF_KG, CAR_MILES, ELECTRICITY_KWH};
use green_habits::{ActivityLedger, JsonLedgerRepository, LoadStatus};

fn entries() -> impl Strategy<Value = Vec<(&'static str, f64)>> {
    let activity = prop_oneof![Just(CAR_MILES), Just(ELECTRICITY_KWH), Just(BEEF_KG)];
    proptest::collection::vec((activity, 0.0f64..1e9), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: save then load into a fresh ledger reproduces the record exactly.
    #[test]
    fn property_save_load_round_trips(entries in entries()) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_data.json");
        let repo = JsonLedgerRepository::new();

        let mut ledger = ActivityLedger::default();
        for (activity, amount) in &entries {
            ledger.add_activity(activity, *amount).unwrap();
        }
        ledger.save_to(&repo, &path).unwrap();

        let mut restored = ActivityLedger::default();
        let status = restored.load_from(&repo, &path).unwrap();

        prop_assert_eq!(
            status,
            LoadStatus::Restored { activities: ledger.record().len() }
        );
        prop_assert_eq!(restored.record(), ledger.record());
    }
}

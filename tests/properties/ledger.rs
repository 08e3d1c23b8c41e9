//! Property tests for ledger mutation and footprint calculation.

use proptest::prelude::*;

use green_habits::domain::value_objects::{BEEF_KG, CAR_MILES, ELECTRICITY_KWH};
use green_habits::ActivityLedger;

fn known_activity() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(CAR_MILES), Just(ELECTRICITY_KWH), Just(BEEF_KG)]
}

fn amount() -> impl Strategy<Value = f64> {
    0.0f64..10_000.0
}

fn entries() -> impl Strategy<Value = Vec<(&'static str, f64)>> {
    proptest::collection::vec((known_activity(), amount()), 0..12)
}

fn ledger_from(entries: &[(&str, f64)]) -> ActivityLedger {
    let mut ledger = ActivityLedger::default();
    for (activity, amount) in entries {
        ledger.add_activity(activity, *amount).unwrap();
    }
    ledger
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: adding `a` then `b` for the same activity stores `a + b`.
    #[test]
    fn property_amounts_accumulate(activity in known_activity(), a in amount(), b in amount()) {
        let mut ledger = ActivityLedger::default();
        ledger.add_activity(activity, a).unwrap();
        let total = ledger.add_activity(activity, b).unwrap();

        prop_assert_eq!(total, a + b);
        prop_assert_eq!(ledger.quantity(activity), Some(a + b));
    }

    /// PROPERTY: unknown identifiers never change the ledger.
    #[test]
    fn property_unknown_activity_is_noop(
        seed in entries(),
        activity in "[a-z_]{1,12}",
        a in amount(),
    ) {
        prop_assume!(![CAR_MILES, ELECTRICITY_KWH, BEEF_KG].contains(&activity.as_str()));
        let mut ledger = ledger_from(&seed);
        let before = ledger.record().clone();

        prop_assert!(ledger.add_activity(&activity, a).is_err());
        prop_assert_eq!(ledger.record(), &before);
    }

    /// PROPERTY: negative amounts never change the ledger.
    #[test]
    fn property_negative_amount_is_noop(
        seed in entries(),
        activity in known_activity(),
        a in -10_000.0f64..-f64::MIN_POSITIVE,
    ) {
        let mut ledger = ledger_from(&seed);
        let before = ledger.record().clone();

        prop_assert!(ledger.add_activity(activity, a).is_err());
        prop_assert_eq!(ledger.record(), &before);
    }

    /// PROPERTY: the footprint is a pure read and totals its lines.
    #[test]
    fn property_footprint_is_pure(seed in entries()) {
        let ledger = ledger_from(&seed);
        let before = ledger.record().clone();

        let first = ledger.calculate_footprint();
        let second = ledger.calculate_footprint();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(ledger.record(), &before);
        prop_assert!(first.total >= 0.0);

        let summed: f64 = first.lines.iter().map(|line| line.emissions).sum();
        prop_assert!((summed - first.total).abs() <= 1e-9 * first.total.max(1.0));
    }
}

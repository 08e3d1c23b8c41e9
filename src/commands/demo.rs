//! Demo command: record a sample week and report it.

use green_habits::domain::value_objects::{BEEF_KG, CAR_MILES, ELECTRICITY_KWH};

use super::Session;

const SAMPLE_WEEK: [(&str, f64); 3] = [(CAR_MILES, 100.0), (ELECTRICITY_KWH, 50.0), (BEEF_KG, 2.0)];

/// Load prior data, add the sample week, print footprint and suggestions, save.
///
/// A failed load is reported and the run continues from an empty ledger.
pub fn cmd_demo(session: &mut Session) {
    let load = session.tracker.load();
    session.reporter().load(&load);

    for (activity, amount) in SAMPLE_WEEK {
        let outcome = session.tracker.add(activity, amount);
        session
            .reporter()
            .add(&outcome, session.tracker.ledger().factors());
    }

    let footprint = session.tracker.footprint();
    let reporter = session.reporter();
    reporter.footprint(&footprint);
    reporter.suggestions(session.tracker.suggestions());
    reporter.save(&session.tracker.save());
}

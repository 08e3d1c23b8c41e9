//! Add command handler

use super::Session;

pub fn cmd_add(session: &mut Session, activity: &str, amount: f64) {
    let load = session.tracker.load();
    session.reporter().load(&load);

    let outcome = session.tracker.add(activity, amount);
    session
        .reporter()
        .add(&outcome, session.tracker.ledger().factors());

    if !outcome.is_added() {
        return;
    }

    let footprint = session.tracker.footprint();
    let reporter = session.reporter();
    reporter.footprint(&footprint);
    reporter.save(&session.tracker.save());
}

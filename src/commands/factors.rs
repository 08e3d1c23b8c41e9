use super::Session;

pub fn cmd_factors(session: &Session) {
    session.reporter().factors(session.tracker.ledger().factors());
}

//! Report command handler

use super::Session;

/// Print the footprint of whatever is on disk. Nothing is written back.
pub fn cmd_report(session: &mut Session) {
    let load = session.tracker.load();
    session.reporter().load(&load);
    session.reporter().footprint(&session.tracker.footprint());
}

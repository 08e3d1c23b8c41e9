use super::Session;

pub fn cmd_suggest(session: &Session) {
    session
        .reporter()
        .suggestions(session.tracker.suggestions());
}

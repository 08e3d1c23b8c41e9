//! Routes outcomes to text views or JSON events.

use serde_json::Value;

use green_habits::config::ConfigWarning;
use green_habits::{AddOutcome, EmissionFactors, Footprint, LoadOutcome, SaveOutcome, Suggestion};

use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::views::{factors, footprint, session, suggestions};

pub struct Reporter<'a> {
    ui: &'a UiContext,
}

impl<'a> Reporter<'a> {
    pub fn new(ui: &'a UiContext) -> Self {
        Self { ui }
    }

    pub fn load(&self, outcome: &LoadOutcome) {
        if self.ui.json {
            emit(json::load_event(outcome));
        } else {
            print!("{}", session::render_load(outcome, self.ui.color, self.ui.unicode));
        }
    }

    pub fn add(&self, outcome: &AddOutcome, factors: &EmissionFactors) {
        if self.ui.json {
            emit(json::add_event(outcome));
        } else {
            print!(
                "{}",
                session::render_add(outcome, factors, self.ui.color, self.ui.unicode)
            );
        }
    }

    pub fn footprint(&self, value: &Footprint) {
        if self.ui.json {
            emit(json::footprint_event(value));
        } else {
            print!(
                "{}",
                footprint::render_footprint(value, self.ui.color, self.ui.unicode)
            );
        }
    }

    pub fn suggestions(&self, list: &[Suggestion]) {
        if self.ui.json {
            emit(json::suggestions_event(list));
        } else {
            print!(
                "{}",
                suggestions::render_suggestions(list, self.ui.color, self.ui.unicode)
            );
        }
    }

    pub fn save(&self, outcome: &SaveOutcome) {
        if self.ui.json {
            emit(json::save_event(outcome));
        } else {
            print!("{}", session::render_save(outcome, self.ui.color, self.ui.unicode));
        }
    }

    pub fn factors(&self, table: &EmissionFactors) {
        if self.ui.json {
            emit(json::factors_event(table));
        } else {
            print!("{}", factors::render_factors(table));
        }
    }

    /// Config warnings go to stderr in text mode so they never mix with reports.
    pub fn config_warnings(&self, warnings: &[ConfigWarning]) {
        for warning in warnings {
            if self.ui.json {
                emit(json::config_warning_event(warning));
            } else {
                eprint!(
                    "{}",
                    session::render_config_warning(warning, self.ui.color, self.ui.unicode)
                );
            }
        }
    }
}

fn emit(event: Value) {
    println!("{}", event);
}

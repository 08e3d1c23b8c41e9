//! One-line reports for load, add and save outcomes.

use green_habits::config::ConfigWarning;
use green_habits::{AddOutcome, EmissionFactors, LoadOutcome, SaveOutcome};

use crate::ui::primitives::icon::Icon;

pub fn render_load(outcome: &LoadOutcome, supports_color: bool, supports_unicode: bool) -> String {
    let ok = Icon::Success.colored(supports_color, supports_unicode);
    let info = Icon::Info.colored(supports_color, supports_unicode);
    let err = Icon::Error.colored(supports_color, supports_unicode);
    let arrow = Icon::Arrow.colored(supports_color, supports_unicode);

    match outcome {
        LoadOutcome::Loaded { path, activities } => format!(
            "{} User data loaded successfully ({} activities from {}).\n",
            ok,
            activities,
            path.display()
        ),
        LoadOutcome::StartingFresh { .. } => {
            format!("{} No saved data found. Starting fresh.\n", info)
        }
        LoadOutcome::Malformed { path, message } => format!(
            "{} Error loading data from {}: {}\n  {} Fix: repair or delete the file to start fresh; saving replaces it\n",
            err,
            path.display(),
            message,
            arrow
        ),
        LoadOutcome::Failed { path, message } => format!(
            "{} Error loading data from {}: {}\n",
            err,
            path.display(),
            message
        ),
    }
}

pub fn render_add(
    outcome: &AddOutcome,
    factors: &EmissionFactors,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let warn = Icon::Warning.colored(supports_color, supports_unicode);

    match outcome {
        AddOutcome::Added {
            activity, amount, ..
        } => format!(
            "{} Added {} units of {}.\n",
            Icon::Success.colored(supports_color, supports_unicode),
            amount,
            activity
        ),
        AddOutcome::Unrecognized { activity } => {
            let known: Vec<&str> = factors.iter().map(|(id, _)| id).collect();
            format!(
                "{} Activity '{}' is not recognized. Please try a different one.\n  {} Known activities: {}\n",
                warn,
                activity,
                Icon::Arrow.colored(supports_color, supports_unicode),
                known.join(", ")
            )
        }
        AddOutcome::InvalidAmount { activity, amount } => format!(
            "{} Amount {} for '{}' must be a finite, non-negative number. Nothing recorded.\n",
            warn, amount, activity
        ),
    }
}

pub fn render_save(outcome: &SaveOutcome, supports_color: bool, supports_unicode: bool) -> String {
    match outcome {
        SaveOutcome::Saved { path, .. } => format!(
            "{} User data saved successfully to {}.\n",
            Icon::Success.colored(supports_color, supports_unicode),
            path.display()
        ),
        SaveOutcome::Failed { path, message } => format!(
            "{} Error saving data to {}: {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            path.display(),
            message
        ),
    }
}

pub fn render_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        warning
    )
}

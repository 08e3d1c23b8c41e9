//! JSON event payloads for `--json` mode. One object per line on stdout.

use serde_json::{json, Value};

use green_habits::config::ConfigWarning;
use green_habits::{AddOutcome, EmissionFactors, Footprint, LoadOutcome, SaveOutcome, Suggestion};

pub fn load_event(outcome: &LoadOutcome) -> Value {
    match outcome {
        LoadOutcome::Loaded { path, activities } => json!({
            "event": "load",
            "status": "loaded",
            "path": path.display().to_string(),
            "activities": activities,
        }),
        LoadOutcome::StartingFresh { path } => json!({
            "event": "load",
            "status": "starting_fresh",
            "path": path.display().to_string(),
        }),
        LoadOutcome::Malformed { path, message } => json!({
            "event": "load",
            "status": "malformed",
            "path": path.display().to_string(),
            "message": message,
        }),
        LoadOutcome::Failed { path, message } => json!({
            "event": "load",
            "status": "failed",
            "path": path.display().to_string(),
            "message": message,
        }),
    }
}

pub fn add_event(outcome: &AddOutcome) -> Value {
    match outcome {
        AddOutcome::Added {
            activity,
            amount,
            total,
        } => json!({
            "event": "add",
            "status": "added",
            "activity": activity,
            "amount": amount,
            "total": total,
        }),
        AddOutcome::Unrecognized { activity } => json!({
            "event": "add",
            "status": "unrecognized",
            "activity": activity,
        }),
        AddOutcome::InvalidAmount { activity, amount } => json!({
            "event": "add",
            "status": "invalid_amount",
            "activity": activity,
            "amount": amount,
        }),
    }
}

pub fn footprint_event(footprint: &Footprint) -> Value {
    let activities: Vec<Value> = footprint
        .lines
        .iter()
        .map(|line| {
            json!({
                "activity": line.activity,
                "quantity": line.quantity,
                "factor": line.factor,
                "emissions": line.emissions,
            })
        })
        .collect();

    json!({
        "event": "footprint",
        "activities": activities,
        "total": footprint.total,
    })
}

pub fn suggestions_event(suggestions: &[Suggestion]) -> Value {
    let items: Vec<Value> = suggestions
        .iter()
        .map(|s| json!({ "activity": s.activity, "benefit": s.benefit }))
        .collect();
    json!({ "event": "suggestions", "suggestions": items })
}

pub fn save_event(outcome: &SaveOutcome) -> Value {
    match outcome {
        SaveOutcome::Saved { path, activities } => json!({
            "event": "save",
            "status": "saved",
            "path": path.display().to_string(),
            "activities": activities,
        }),
        SaveOutcome::Failed { path, message } => json!({
            "event": "save",
            "status": "failed",
            "path": path.display().to_string(),
            "message": message,
        }),
    }
}

pub fn factors_event(factors: &EmissionFactors) -> Value {
    let table: serde_json::Map<String, Value> = factors
        .iter()
        .map(|(id, factor)| (id.to_string(), json!(factor)))
        .collect();
    json!({ "event": "factors", "factors": table })
}

pub fn config_warning_event(warning: &ConfigWarning) -> Value {
    json!({
        "event": "config_warning",
        "key": warning.key,
        "file": warning.file.display().to_string(),
        "line": warning.line,
        "message": warning.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn footprint_event_carries_total_and_lines() {
        let mut ledger = green_habits::ActivityLedger::default();
        ledger.add_activity("beef_kg", 2.0).unwrap();

        let event = footprint_event(&ledger.calculate_footprint());

        assert_eq!(event["event"], "footprint");
        assert_eq!(event["total"], json!(54.0));
        assert_eq!(event["activities"][0]["activity"], "beef_kg");
        assert_eq!(event["activities"][0]["factor"], json!(27.0));
    }

    #[test]
    fn load_event_status_names() {
        let fresh = load_event(&LoadOutcome::StartingFresh {
            path: PathBuf::from("user_data.json"),
        });
        assert_eq!(fresh["status"], "starting_fresh");

        let malformed = load_event(&LoadOutcome::Malformed {
            path: PathBuf::from("user_data.json"),
            message: "EOF".to_string(),
        });
        assert_eq!(malformed["status"], "malformed");
        assert_eq!(malformed["message"], "EOF");
    }

    #[test]
    fn add_event_for_unrecognized_activity() {
        let event = add_event(&AddOutcome::Unrecognized {
            activity: "bus_miles".to_string(),
        });
        assert_eq!(event["status"], "unrecognized");
        assert_eq!(event["activity"], "bus_miles");
    }

    #[test]
    fn factors_event_is_a_flat_map() {
        let event = factors_event(&EmissionFactors::standard());
        assert_eq!(event["factors"]["car_miles"], json!(0.411));
        assert_eq!(event["factors"].as_object().unwrap().len(), 3);
    }
}

//! Emission factor table
//!
//! Maps an activity identifier to the kg of CO2 emitted per unit of that
//! activity. The built-in factors are a fixed public contract; extra factors
//! may be layered on at startup but never replace a built-in one.

use std::collections::BTreeMap;

/// Miles driven in an average passenger car.
pub const CAR_MILES: &str = "car_miles";
/// Kilowatt-hours of grid electricity.
pub const ELECTRICITY_KWH: &str = "electricity_kwh";
/// Kilograms of beef consumed.
pub const BEEF_KG: &str = "beef_kg";

const BUILTIN_FACTORS: [(&str, f64); 3] = [
    (CAR_MILES, 0.411),
    (ELECTRICITY_KWH, 0.233),
    (BEEF_KG, 27.0),
];

/// Returns true if `activity` is one of the built-in identifiers.
pub fn is_builtin(activity: &str) -> bool {
    BUILTIN_FACTORS.iter().any(|(id, _)| *id == activity)
}

/// Immutable activity -> factor lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionFactors {
    factors: BTreeMap<String, f64>,
}

impl EmissionFactors {
    /// The built-in table: car miles, electricity kWh, beef kg.
    pub fn standard() -> Self {
        Self {
            factors: BUILTIN_FACTORS
                .iter()
                .map(|(id, factor)| (id.to_string(), *factor))
                .collect(),
        }
    }

    /// Extend the table with additional activities.
    ///
    /// Entries naming a built-in activity, or carrying a negative or
    /// non-finite factor, are skipped.
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        for (activity, factor) in extra {
            let activity = activity.into();
            if is_builtin(&activity) || !factor.is_finite() || factor < 0.0 {
                continue;
            }
            self.factors.insert(activity, factor);
        }
        self
    }

    pub fn get(&self, activity: &str) -> Option<f64> {
        self.factors.get(activity).copied()
    }

    pub fn contains(&self, activity: &str) -> bool {
        self.factors.contains_key(activity)
    }

    /// Iterate in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.factors.iter().map(|(id, factor)| (id.as_str(), *factor))
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self::standard()
    }
}

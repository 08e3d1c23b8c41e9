//! Accumulated activity quantities
//!
//! A flat activity -> quantity map. Ordering is by identifier so that
//! breakdowns and the persisted document are deterministic.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityRecord {
    quantities: BTreeMap<String, f64>,
}

impl ActivityRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, activity: &str) -> Option<f64> {
        self.quantities.get(activity).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.quantities
            .iter()
            .map(|(activity, amount)| (activity.as_str(), *amount))
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Add `amount` to `activity`, starting from zero. Returns the new total.
    pub(crate) fn accumulate(&mut self, activity: &str, amount: f64) -> f64 {
        let entry = self.quantities.entry(activity.to_string()).or_insert(0.0);
        *entry += amount;
        *entry
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ActivityRecord {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        Self {
            quantities: iter
                .into_iter()
                .map(|(activity, amount)| (activity.into(), amount))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulate_initializes_then_adds() {
        let mut record = ActivityRecord::new();
        assert_eq!(record.accumulate("car_miles", 10.0), 10.0);
        assert_eq!(record.accumulate("car_miles", 5.5), 15.5);
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn from_iter_keeps_last_duplicate() {
        let record: ActivityRecord = [("beef_kg", 1.0), ("beef_kg", 3.0)].into_iter().collect();
        assert_eq!(record.get("beef_kg"), Some(3.0));
    }

    #[test]
    fn iter_is_sorted() {
        let record: ActivityRecord = [("electricity_kwh", 1.0), ("beef_kg", 2.0)]
            .into_iter()
            .collect();
        let ids: Vec<_> = record.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["beef_kg", "electricity_kwh"]);
    }
}

//! Footprint breakdown produced by the ledger.

/// Emissions attributed to one activity.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionLine {
    pub activity: String,
    pub quantity: f64,
    /// kg CO2 per unit
    pub factor: f64,
    /// kg CO2
    pub emissions: f64,
}

/// Per-activity breakdown plus the running total in kg CO2.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Footprint {
    pub lines: Vec<EmissionLine>,
    pub total: f64,
}

impl Footprint {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

//! Static reduction suggestions.

/// One actionable way to reduce a footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub activity: &'static str,
    pub benefit: &'static str,
}

const SUGGESTIONS: [Suggestion; 3] = [
    Suggestion {
        activity: "Drive less",
        benefit: "Reduce transportation emissions",
    },
    Suggestion {
        activity: "Eat less meat",
        benefit: "Reduce agricultural emissions",
    },
    Suggestion {
        activity: "Use energy-efficient appliances",
        benefit: "Reduce home energy use",
    },
];

/// The fixed suggestion list, in display order.
pub fn suggestions() -> &'static [Suggestion] {
    &SUGGESTIONS
}

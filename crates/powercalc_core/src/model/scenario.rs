use serde::Serialize;

use crate::format::format_percentage;

/// One power target plotted on a sensitivity curve
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerScenario {
    /// Percentage label, e.g. "80.00%"
    pub label: String,
    pub power: f64,
    /// Display color as a hex string
    pub color: &'static str,
}

impl PowerScenario {
    #[must_use]
    pub fn new(power: f64, color: &'static str) -> Self {
        Self {
            label: format_percentage(power),
            power,
            color,
        }
    }
}

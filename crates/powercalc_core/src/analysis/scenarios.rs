//! Power targets plotted together on one curve.

use crate::model::PowerScenario;

/// Defaults filling the slots after the requested power, in priority order
pub const DEFAULT_POWERS: [f64; 2] = [0.90, 0.70];

pub const MAX_SCENARIOS: usize = 3;

/// Series colors, assigned by position
pub const PALETTE: [&str; 3] = ["#8884d8", "#82ca9d", "#ffc658"];

/// Up to three power targets: the requested one first when it lies in
/// (0, 1), then the defaults, skipping exact duplicates.
#[must_use]
pub fn select_scenarios(requested: Option<f64>) -> Vec<PowerScenario> {
    let requested = requested.filter(|p| p.is_finite() && *p > 0.0 && *p < 1.0);

    let mut powers: Vec<f64> = Vec::with_capacity(MAX_SCENARIOS);
    for power in requested.into_iter().chain(DEFAULT_POWERS) {
        if powers.len() == MAX_SCENARIOS {
            break;
        }
        if !powers.contains(&power) {
            powers.push(power);
        }
    }

    powers
        .into_iter()
        .enumerate()
        .map(|(i, power)| PowerScenario::new(power, PALETTE[i % PALETTE.len()]))
        .collect()
}

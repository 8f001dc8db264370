//! Display formatting shared by scenario labels and front ends.

/// Format a fraction as a percentage with two decimals (0.8 -> "80.00%")
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Power rounded to the 4-decimal display precision.
///
/// Display only: solver results keep full precision.
#[must_use]
pub fn round_power(power: f64) -> f64 {
    (power * 10_000.0).round() / 10_000.0
}

/// Format a power value with 4 decimals
#[must_use]
pub fn format_power(power: f64) -> String {
    format!("{:.4}", power)
}

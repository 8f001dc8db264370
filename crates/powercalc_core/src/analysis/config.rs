//! Configuration types for parameter sweeps.

use serde::{Deserialize, Serialize};

use crate::error::CurveError;
use crate::model::{Design, Domain, Param};

/// Number of points on every curve
pub const CURVE_POINTS: usize = 100;

/// Closest a proposed probability range gets to 0 or 1
const PROBABILITY_EDGE: f64 = 0.01;

/// Quantity plotted against the swept parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurveMetric {
    /// Solved sample size at each scenario's target power
    #[default]
    SampleSize,
    /// Power reached with each scenario's base-parameter sample size
    Power,
}

impl CurveMetric {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SampleSize => "Sample Size",
            Self::Power => "Power",
        }
    }
}

/// One parameter swept over a closed range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepParameter {
    pub parameter: Param,
    #[serde(rename = "min")]
    pub min_value: f64,
    #[serde(rename = "max")]
    pub max_value: f64,
}

impl SweepParameter {
    #[must_use]
    pub fn new(parameter: Param, min_value: f64, max_value: f64) -> Self {
        Self {
            parameter,
            min_value,
            max_value,
        }
    }

    /// Default range around a base value: ±50%, kept inside the parameter's
    /// domain. A zero center sweeps ±1.
    ///
    /// Probabilities stay at least [`PROBABILITY_EDGE`] away from 0 and 1,
    /// unless the center itself is closer; then the range stops halfway
    /// between the center and the boundary. The result always satisfies
    /// `min <= max`.
    #[must_use]
    pub fn around(parameter: Param, center: f64) -> Self {
        let half = if center == 0.0 { 1.0 } else { center.abs() * 0.5 };
        let (mut min, mut max) = (center - half, center + half);
        match parameter.domain() {
            Domain::Probability => {
                let floor = PROBABILITY_EDGE.min(center * 0.5).max(0.0);
                let ceiling = (1.0 - PROBABILITY_EDGE).max(center + (1.0 - center) * 0.5);
                min = min.max(floor);
                max = max.min(ceiling.min(1.0));
            }
            Domain::Positive if center <= 0.0 => {
                min = 0.0;
                max = max.max(1.0);
            }
            Domain::Count => {
                min = min.max(1.0).floor();
                max = max.max(1.0).ceil();
            }
            Domain::Positive | Domain::Real => {}
        }
        Self::new(parameter, min, max.max(min))
    }

    /// Reject non-finite or reversed bounds
    pub fn validate(&self) -> Result<(), CurveError> {
        let (min, max) = (self.min_value, self.max_value);
        if !(min.is_finite() && max.is_finite()) {
            return Err(CurveError::NonFiniteBound { min, max });
        }
        if min > max {
            return Err(CurveError::ReversedRange { min, max });
        }
        Ok(())
    }

    /// The [`CURVE_POINTS`] swept values, `min + (max - min) * i / 99`
    #[must_use]
    pub fn sweep_values(&self) -> Vec<f64> {
        let span = self.max_value - self.min_value;
        let last = (CURVE_POINTS - 1) as f64;
        (0..CURVE_POINTS)
            .map(|i| self.min_value + span * i as f64 / last)
            .collect()
    }

    /// Axis label for display
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{} ({} to {})",
            self.parameter, self.min_value, self.max_value
        )
    }
}

/// A complete curve request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    pub design: Design,
    #[serde(flatten)]
    pub sweep: SweepParameter,
    #[serde(default)]
    pub metric: CurveMetric,
}

//! Study files: a design, its parameters and an optional curve request,
//! stored as YAML.
//!
//! ```yaml
//! design: two-means-1-sided
//! solve_for: sample-size
//! parameters:
//!   alpha: 0.05
//!   power: 0.8
//!   meanA: 132.86
//! curve:
//!   parameter: meanA
//!   min: 120
//!   max: 140
//!   metric: sample-size
//! ```

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr, eyre};
use powercalc_core::analysis::{CurveMetric, SweepParameter};
use powercalc_core::model::{Design, Param, ParameterSet, SolveDirection};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Study {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design: Option<Design>,
    #[serde(default)]
    pub solve_for: SolveDirection,
    #[serde(default)]
    pub parameters: ParameterSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<CurveSpec>,
}

/// Curve request as written in a study file; missing bounds default to a
/// range around the parameter's base value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSpec {
    pub parameter: Param,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default)]
    pub metric: CurveMetric,
}

impl CurveSpec {
    /// Concrete sweep range, filling missing bounds from `base`
    pub fn sweep(&self, base: &ParameterSet) -> Result<SweepParameter> {
        let (min, max) = match (self.min, self.max) {
            (Some(min), Some(max)) => (min, max),
            (min, max) => {
                let center = base.get(self.parameter).ok_or_else(|| {
                    eyre!(
                        "No range given for '{}' and it has no base value to center one on",
                        self.parameter
                    )
                })?;
                let around = SweepParameter::around(self.parameter, center);
                (
                    min.unwrap_or(around.min_value),
                    max.unwrap_or(around.max_value),
                )
            }
        };
        Ok(SweepParameter::new(self.parameter, min, max))
    }
}

impl Study {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read study file {}", path.display()))?;
        let study = Self::from_yaml(&content)
            .map_err(|e| eyre!("Failed to parse study file {}: {e}", path.display()))?;
        tracing::debug!(
            "Loaded study {} ({} parameters)",
            path.display(),
            study.parameters.len()
        );
        Ok(study)
    }

    /// Layer `name=value` overrides on top of the stored parameters
    pub fn apply_overrides(&mut self, overrides: &[(Param, f64)]) {
        for &(param, value) in overrides {
            self.parameters.insert(param, value);
        }
    }

    pub fn design(&self) -> Result<Design> {
        self.design
            .ok_or_else(|| eyre!("No design given; pass --design or set `design` in the study file"))
    }
}

/// Parse one `name=value` assignment, e.g. `meanA=132.86`
pub fn parse_assignment(input: &str) -> Result<(Param, f64)> {
    let (name, value) = input
        .split_once('=')
        .ok_or_else(|| eyre!("Expected name=value, got '{input}'"))?;
    let param: Param = name.trim().parse()?;
    let value: f64 = value
        .trim()
        .parse()
        .wrap_err_with(|| format!("Invalid number for {param}: '{}'", value.trim()))?;
    Ok((param, value))
}

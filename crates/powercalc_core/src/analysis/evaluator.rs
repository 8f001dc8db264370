//! Curve evaluation: solve the design at every swept value for every
//! scenario.
//!
//! Scenarios never share state; each series is computed from the base
//! parameters alone, so evaluation order cannot change a result.

use serde::Serialize;

use crate::designs::{formula, solve_power, solve_sample_size};
use crate::error::CurveError;
use crate::model::{Design, Param, ParameterSet, PlotPoint, PowerScenario};

use super::{CurveConfig, CurveMetric, SweepParameter};

/// A generated curve together with what produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve {
    pub design: Design,
    pub parameter: Param,
    pub metric: CurveMetric,
    pub scenarios: Vec<PowerScenario>,
    pub points: Vec<PlotPoint>,
}

impl Curve {
    /// Values of one scenario's series in sweep order
    #[must_use]
    pub fn series(&self, label: &str) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.get(label)).collect()
    }

    /// Number of points where some scenario is undefined
    #[must_use]
    pub fn break_count(&self) -> usize {
        self.points.iter().filter(|p| !p.is_complete()).count()
    }
}

/// Sample-size curve of `design` while `sweep_var` moves from `min` to `max`.
///
/// Each scenario substitutes its target power, then the swept value, into
/// `params`. Fails on a malformed range or a parameter the design ignores.
pub fn generate_curve(
    design: Design,
    params: &ParameterSet,
    sweep_var: Param,
    min: f64,
    max: f64,
    scenarios: &[PowerScenario],
) -> Result<Vec<PlotPoint>, CurveError> {
    let sweep = SweepParameter::new(sweep_var, min, max);
    sweep.validate()?;
    check_sweep_parameter(design, sweep_var, CurveMetric::SampleSize)?;
    Ok(sweep_points(&sweep, scenarios, |i, x| {
        let mut point_params = params.clone();
        point_params.insert(Param::Power, scenarios[i].power);
        point_params.insert(sweep_var, x);
        solve_sample_size(design, &point_params)
    }))
}

/// Power curve of `design`.
///
/// Each scenario's sample size is solved once at the base parameters, then
/// held fixed (unless it is the swept parameter) while power is evaluated
/// across the sweep. A scenario with no base sample size is undefined at
/// every point.
pub fn generate_power_curve(
    design: Design,
    params: &ParameterSet,
    sweep_var: Param,
    min: f64,
    max: f64,
    scenarios: &[PowerScenario],
) -> Result<Vec<PlotPoint>, CurveError> {
    let sweep = SweepParameter::new(sweep_var, min, max);
    sweep.validate()?;
    check_sweep_parameter(design, sweep_var, CurveMetric::Power)?;

    let sizes: Vec<Option<f64>> = scenarios
        .iter()
        .map(|scenario| {
            let base = params.clone().with(Param::Power, scenario.power);
            solve_sample_size(design, &base)
        })
        .collect();

    Ok(sweep_points(&sweep, scenarios, |i, x| {
        let n = if sweep_var == Param::SampleSize {
            x
        } else {
            sizes[i]?
        };
        let point_params = params.clone().with(sweep_var, x);
        solve_power(design, n, &point_params)
    }))
}

/// Evaluate a full curve request with the metric it names
pub fn evaluate_curve(
    config: &CurveConfig,
    params: &ParameterSet,
    scenarios: &[PowerScenario],
) -> Result<Curve, CurveError> {
    let SweepParameter {
        parameter,
        min_value,
        max_value,
    } = config.sweep;
    let points = match config.metric {
        CurveMetric::SampleSize => {
            generate_curve(config.design, params, parameter, min_value, max_value, scenarios)?
        }
        CurveMetric::Power => {
            generate_power_curve(config.design, params, parameter, min_value, max_value, scenarios)?
        }
    };
    Ok(Curve {
        design: config.design,
        parameter,
        metric: config.metric,
        scenarios: scenarios.to_vec(),
        points,
    })
}

/// Reject a sweep over a parameter that cannot move the plotted metric
fn check_sweep_parameter(
    design: Design,
    parameter: Param,
    metric: CurveMetric,
) -> Result<(), CurveError> {
    let used = match parameter {
        Param::Alpha | Param::Power => true,
        Param::SampleSize => metric == CurveMetric::Power,
        _ => formula(design).parameters().contains(&parameter),
    };
    if used {
        Ok(())
    } else {
        Err(CurveError::UnusedParameter { design, parameter })
    }
}

/// One point per swept value; `solve(i, x)` answers for `scenarios[i]`
fn sweep_points<F>(sweep: &SweepParameter, scenarios: &[PowerScenario], solve: F) -> Vec<PlotPoint>
where
    F: Fn(usize, f64) -> Option<f64>,
{
    sweep
        .sweep_values()
        .into_iter()
        .map(|x| {
            let mut point = PlotPoint::new(sweep.parameter, x);
            point.series = scenarios
                .iter()
                .enumerate()
                .map(|(i, scenario)| {
                    let value = solve(i, x).filter(|v| v.is_finite() && *v > 0.0);
                    (scenario.label.clone(), value)
                })
                .collect();
            point
        })
        .collect()
}

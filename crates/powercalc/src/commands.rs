//! Subcommand implementations. Each returns the text to print.

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr, eyre};
use powercalc_core::analysis::{CurveConfig, evaluate_curve, select_scenarios};
use powercalc_core::error::SolveError;
use powercalc_core::model::{Param, SolveDirection};
use powercalc_core::solve::{group_sizes, solve_checked};

use crate::report::{SolveReport, design_listing, render_curve, render_designs, render_solve};
use crate::study::{CurveSpec, Study};
use crate::util::io::atomic_write;

pub fn designs(json: bool) -> Result<String> {
    let listing = design_listing();
    if json {
        Ok(serde_json::to_string_pretty(&listing)?)
    } else {
        Ok(render_designs(&listing))
    }
}

/// Solve the study's design in `direction`
pub fn solve(study: &Study, direction: SolveDirection, json: bool) -> Result<String> {
    let design = study.design()?;
    let params = &study.parameters;
    tracing::info!("Solving {design} for {direction:?}");

    let value = solve_checked(design, direction, params).map_err(|err| match err {
        SolveError::Invalid(errors) => {
            tracing::warn!("Rejected parameters for {design}: {errors}");
            eyre!("Invalid parameters for {design}: {errors}")
        }
        SolveError::Undefined => eyre!("{design} has no finite solution for these parameters"),
    })?;

    let groups = match direction {
        SolveDirection::SampleSize => group_sizes(design, value, params),
        SolveDirection::Power => None,
    };
    let report = SolveReport {
        design,
        solve_for: direction,
        value,
        groups,
    };
    tracing::info!("Solved {design}: {value}");

    if json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(render_solve(&report))
    }
}

/// Generate the study's curve; writes JSON to `output` when given
pub fn curve(study: &Study, spec: &CurveSpec, output: Option<&Path>, json: bool) -> Result<String> {
    let design = study.design()?;
    let params = &study.parameters;
    let config = CurveConfig {
        design,
        sweep: spec.sweep(params)?,
        metric: spec.metric,
    };
    let scenarios = select_scenarios(params.get(Param::Power));
    tracing::debug!(
        "Generating {:?} curve for {design} over {} with {} scenarios",
        config.metric,
        config.sweep.label(),
        scenarios.len()
    );

    let curve = evaluate_curve(&config, params, &scenarios)?;
    if curve.break_count() > 0 {
        tracing::debug!("Curve has {} undefined points", curve.break_count());
    }

    let curve_json = serde_json::to_string_pretty(&curve)?;
    if let Some(path) = output {
        atomic_write(path, &curve_json)
            .wrap_err_with(|| format!("Failed to write curve to {}", path.display()))?;
        tracing::info!("Wrote curve to {}", path.display());
    }

    if json {
        Ok(curve_json)
    } else {
        Ok(render_curve(&curve))
    }
}

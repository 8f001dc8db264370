//! Text and JSON renderings of solver and curve results.

use std::fmt::Write;

use powercalc_core::analysis::{Curve, CurveMetric};
use powercalc_core::designs::formula;
use powercalc_core::format::format_power;
use powercalc_core::model::{Design, SolveDirection};
use powercalc_core::solve::GroupSizes;
use serde::Serialize;

/// Placeholder printed where a curve has no value
const GAP: &str = "-";

/// One row of the design listing
#[derive(Debug, Clone, Serialize)]
pub struct DesignInfo {
    pub id: &'static str,
    pub name: String,
    pub parameters: Vec<&'static str>,
}

impl DesignInfo {
    #[must_use]
    pub fn new(design: Design) -> Self {
        Self {
            id: design.id(),
            name: design.name(),
            parameters: formula(design).parameters().iter().map(|p| p.name()).collect(),
        }
    }
}

#[must_use]
pub fn design_listing() -> Vec<DesignInfo> {
    Design::ALL.into_iter().map(DesignInfo::new).collect()
}

#[must_use]
pub fn render_designs(designs: &[DesignInfo]) -> String {
    let width = designs.iter().map(|d| d.id.len()).max().unwrap_or(0);
    let mut out = String::new();
    for design in designs {
        let _ = writeln!(
            out,
            "{:<width$}  {}  [{}]",
            design.id,
            design.name,
            design.parameters.join(", ")
        );
    }
    out
}

/// Result of one solve
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub design: Design,
    pub solve_for: SolveDirection,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<GroupSizes>,
}

#[must_use]
pub fn render_solve(report: &SolveReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", report.design.name(), report.design);
    match report.solve_for {
        SolveDirection::SampleSize => {
            let _ = writeln!(out, "Sample size: {}", report.value);
        }
        SolveDirection::Power => {
            let _ = writeln!(out, "Power: {}", format_power(report.value));
        }
    }
    if let Some(groups) = report.groups {
        let _ = writeln!(
            out,
            "Group A: {}, Group B: {} (total {})",
            groups.group_a,
            groups.group_b,
            groups.total()
        );
    }
    out
}

fn format_value(metric: CurveMetric, value: Option<f64>) -> String {
    match (metric, value) {
        (_, None) => GAP.to_string(),
        (CurveMetric::SampleSize, Some(n)) => format!("{n}"),
        (CurveMetric::Power, Some(p)) => format_power(p),
    }
}

/// Curve as a fixed-width table, one row per swept value
#[must_use]
pub fn render_curve(curve: &Curve) -> String {
    let labels: Vec<&str> = curve.scenarios.iter().map(|s| s.label.as_str()).collect();
    let first = curve.parameter.name().len().max(12);
    let column = labels.iter().map(|l| l.len()).max().unwrap_or(0).max(8);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} vs {} ({})",
        curve.metric.label(),
        curve.parameter,
        curve.design
    );
    let _ = write!(out, "{:>first$}", curve.parameter.name());
    for label in &labels {
        let _ = write!(out, "  {label:>column$}");
    }
    out.push('\n');

    for point in &curve.points {
        let _ = write!(out, "{:>first$.4}", point.value);
        for label in &labels {
            let cell = format_value(curve.metric, point.get(label));
            let _ = write!(out, "  {cell:>column$}");
        }
        out.push('\n');
    }
    out
}

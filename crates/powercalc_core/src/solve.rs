//! Bidirectional solver: sample size from power, or power from sample size.

use serde::Serialize;

use crate::designs::{solve_power, solve_sample_size};
use crate::error::SolveError;
use crate::model::{Design, Param, ParameterSet, SolveDirection};
use crate::validation::validate;

/// Solve `design` in `direction`.
///
/// Reads `power` when solving for a sample size and `sampleSize` when solving
/// for power. `None` covers invalid input, degenerate algebra and non-finite
/// results alike.
#[must_use]
pub fn solve(design: Design, direction: SolveDirection, params: &ParameterSet) -> Option<f64> {
    match direction {
        SolveDirection::SampleSize => solve_sample_size(design, params),
        SolveDirection::Power => solve_power(design, params.get(Param::SampleSize)?, params),
    }
}

/// Like [`solve`], but separates rejected input from an undefined answer
pub fn solve_checked(
    design: Design,
    direction: SolveDirection,
    params: &ParameterSet,
) -> Result<f64, SolveError> {
    validate(design, direction, params)?;
    solve(design, direction, params).ok_or(SolveError::Undefined)
}

/// Per-group sample sizes of a solved two-group design
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupSizes {
    pub group_a: f64,
    pub group_b: f64,
}

impl GroupSizes {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.group_a + self.group_b
    }
}

/// Split a solved n_A into both groups with n_B = ⌈κ·n_A⌉.
///
/// `None` for designs without an allocation ratio, or without a valid κ.
#[must_use]
pub fn group_sizes(design: Design, n_a: f64, params: &ParameterSet) -> Option<GroupSizes> {
    if !design.has_allocation_ratio() || !(n_a.is_finite() && n_a > 0.0) {
        return None;
    }
    let kappa = params.valid(Param::Kappa)?;
    Some(GroupSizes {
        group_a: n_a,
        group_b: (kappa * n_a).ceil(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_means() -> ParameterSet {
        ParameterSet::from([
            (Param::Alpha, 0.05),
            (Param::Power, 0.8),
            (Param::MeanA, 132.86),
            (Param::MeanB, 127.44),
            (Param::StdDevA, 15.34),
            (Param::StdDevB, 18.23),
            (Param::Kappa, 2.0),
        ])
    }

    #[test]
    fn test_solve_both_directions() {
        let n = solve(Design::TwoMeansOneSided, SolveDirection::SampleSize, &two_means());
        assert_eq!(n, Some(85.0));

        let params = two_means().with(Param::SampleSize, 85.0);
        let power = solve(Design::TwoMeansOneSided, SolveDirection::Power, &params).unwrap();
        assert!(power >= 0.8 && power < 0.81);
    }

    #[test]
    fn test_power_without_sample_size() {
        assert!(solve(Design::TwoMeansOneSided, SolveDirection::Power, &two_means()).is_none());
    }

    #[test]
    fn test_solve_checked_reports_invalid_input() {
        let params = two_means().with(Param::StdDevB, 0.0);
        let err = solve_checked(Design::TwoMeansOneSided, SolveDirection::SampleSize, &params)
            .unwrap_err();
        match err {
            SolveError::Invalid(errors) => assert!(errors.contains(Param::StdDevB)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_solve_checked_ok() {
        let n = solve_checked(
            Design::TwoMeansOneSided,
            SolveDirection::SampleSize,
            &two_means(),
        );
        assert_eq!(n, Ok(85.0));
    }

    #[test]
    fn test_group_sizes() {
        let sizes = group_sizes(Design::TwoMeansOneSided, 85.0, &two_means()).unwrap();
        assert_eq!(sizes.group_a, 85.0);
        assert_eq!(sizes.group_b, 170.0);
        assert_eq!(sizes.total(), 255.0);

        let params = two_means().with(Param::Kappa, 0.5);
        let sizes = group_sizes(Design::TwoMeansOneSided, 85.0, &params).unwrap();
        assert_eq!(sizes.group_b, 43.0);

        assert!(group_sizes(Design::OneMeanTwoSided, 85.0, &two_means()).is_none());
    }
}

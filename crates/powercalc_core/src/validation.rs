//! Input validation for a design and solve direction.
//!
//! The formula layer already answers `None` for anything it cannot solve;
//! validation explains *why*, one message per offending parameter.

use crate::designs::check_parameters;
use crate::error::ValidationErrors;
use crate::model::{Design, Param, ParameterSet, SolveDirection};

/// The fixed input consumed by a direction: `power` when solving for a sample
/// size, `sampleSize` when solving for power
#[must_use]
pub fn direction_input(direction: SolveDirection) -> Param {
    match direction {
        SolveDirection::SampleSize => Param::Power,
        SolveDirection::Power => Param::SampleSize,
    }
}

/// Check every parameter `design` needs to solve in `direction`
pub fn validate(
    design: Design,
    direction: SolveDirection,
    params: &ParameterSet,
) -> Result<(), ValidationErrors> {
    check_parameters(design, direction_input(direction), params).into_result()
}

#[must_use]
pub fn is_valid(design: Design, direction: SolveDirection, params: &ParameterSet) -> bool {
    validate(design, direction, params).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn one_proportion() -> ParameterSet {
        ParameterSet::from([
            (Param::Alpha, 0.05),
            (Param::Power, 0.8),
            (Param::Proportion, 0.5),
            (Param::NullProportion, 0.3),
        ])
    }

    #[test]
    fn test_valid_inputs() {
        assert!(is_valid(
            Design::OneProportionTwoSided,
            SolveDirection::SampleSize,
            &one_proportion()
        ));
    }

    #[test]
    fn test_power_direction_needs_sample_size() {
        let errors = validate(
            Design::OneProportionTwoSided,
            SolveDirection::Power,
            &one_proportion(),
        )
        .unwrap_err();
        assert_eq!(errors.get(Param::SampleSize), Some(ValidationError::Missing));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_probability_bounds_are_exclusive() {
        for p in [0.0, 1.0] {
            let params = one_proportion().with(Param::Proportion, p);
            let errors = validate(
                Design::OneProportionOneSided,
                SolveDirection::SampleSize,
                &params,
            )
            .unwrap_err();
            assert_eq!(
                errors.messages()["proportion"],
                "must be between 0 and 1 (exclusive)"
            );
        }
    }

    #[test]
    fn test_zero_effect_is_reported() {
        let params = one_proportion().with(Param::NullProportion, 0.5);
        let errors = validate(
            Design::OneProportionTwoSided,
            SolveDirection::SampleSize,
            &params,
        )
        .unwrap_err();
        assert_eq!(errors.get(Param::Proportion), Some(ValidationError::ZeroEffect));
    }

    #[test]
    fn test_discordant_sum() {
        let params = ParameterSet::from([
            (Param::Alpha, 0.05),
            (Param::SampleSize, 40.0),
            (Param::P10, 0.7),
            (Param::P01, 0.4),
        ]);
        let errors = validate(Design::McNemarOneSided, SolveDirection::Power, &params).unwrap_err();
        assert_eq!(
            errors.get(Param::P01),
            Some(ValidationError::DiscordantSumAboveOne)
        );
    }
}

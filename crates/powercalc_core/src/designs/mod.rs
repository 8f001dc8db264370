//! Design formula modules.
//!
//! Each [`Design`] owns exactly one [`Formula`]: a sample-size solver, a power
//! solver and a validity predicate over its parameters. Formulas are
//! stateless `const` values looked up through [`formula`]; the table is
//! read-only.
//!
//! ```ignore
//! use powercalc_core::designs::{solve_sample_size, solve_power};
//! use powercalc_core::model::{Design, Param, ParameterSet};
//!
//! let params = ParameterSet::from([
//!     (Param::Alpha, 0.05),
//!     (Param::Power, 0.8),
//!     (Param::P10, 0.05),
//!     (Param::P01, 0.45),
//! ]);
//! assert_eq!(solve_sample_size(Design::McNemarTwoSided, &params), Some(23.0));
//! ```
//!
//! Both solvers normalize every NaN, infinite, zero or negative outcome to
//! `None` before returning.

mod case_series;
mod cox;
mod kernel;
mod mcnemar;
mod means;
mod odds_ratio;
mod proportions;

pub use case_series::CaseSeries;
pub use cox::CoxPh;
pub use mcnemar::McNemar;
pub use means::{KMeans, OneMean, TwoMeans};
pub use odds_ratio::OddsRatio;
pub use proportions::{KProportions, OneProportion, TwoProportions};

use crate::error::{ValidationError, ValidationErrors};
use crate::model::{Design, Hypothesis, Param, ParameterSet};

use kernel::{finalize_power, finalize_sample_size};

/// Closed-form solver pair for one design.
///
/// Methods return raw (unrounded) values; use the free functions in this
/// module to get normalized results.
pub trait Formula: Sync {
    /// Design-specific parameters, excluding `alpha`, `power` and `sampleSize`
    fn parameters(&self) -> &'static [Param];

    /// Hypothesis-adjusted effect size; `None` when it is zero or undefined
    fn effect(&self, params: &ParameterSet) -> Option<f64>;

    /// Unrounded sample size reaching `power` at level `alpha`
    fn sample_size(&self, params: &ParameterSet) -> Option<f64>;

    /// Power reached with sample size `n`
    fn power(&self, n: f64, params: &ParameterSet) -> Option<f64>;

    /// Cross-parameter constraints beyond each parameter's own domain
    fn check(&self, _params: &ParameterSet, _errors: &mut ValidationErrors) {}

    /// Parameter blamed when the effect size vanishes
    fn effect_param(&self) -> Param {
        self.parameters()[0]
    }
}

/// Look up the formula owned by `design`
#[must_use]
pub fn formula(design: Design) -> &'static dyn Formula {
    match design {
        Design::OneMeanTwoSided => &OneMean::TWO_SIDED,
        Design::OneMeanOneSided => &OneMean::ONE_SIDED,
        Design::OneMeanNonInferiority => &OneMean::NON_INFERIORITY,
        Design::OneMeanEquivalence => &OneMean::EQUIVALENCE,
        Design::TwoMeansTwoSided => &TwoMeans::TWO_SIDED,
        Design::TwoMeansOneSided => &TwoMeans::ONE_SIDED,
        Design::TwoMeansNonInferiority => &TwoMeans::NON_INFERIORITY,
        Design::TwoMeansEquivalence => &TwoMeans::EQUIVALENCE,
        Design::KMeansTwoSided => &KMeans::TWO_SIDED,
        Design::KMeansOneSided => &KMeans::ONE_SIDED,
        Design::OneProportionTwoSided => &OneProportion::TWO_SIDED,
        Design::OneProportionOneSided => &OneProportion::ONE_SIDED,
        Design::OneProportionNonInferiority => &OneProportion::NON_INFERIORITY,
        Design::OneProportionEquivalence => &OneProportion::EQUIVALENCE,
        Design::TwoProportionsTwoSided => &TwoProportions::TWO_SIDED,
        Design::TwoProportionsOneSided => &TwoProportions::ONE_SIDED,
        Design::TwoProportionsNonInferiority => &TwoProportions::NON_INFERIORITY,
        Design::TwoProportionsEquivalence => &TwoProportions::EQUIVALENCE,
        Design::KProportionsTwoSided => &KProportions::TWO_SIDED,
        Design::KProportionsOneSided => &KProportions::ONE_SIDED,
        Design::OddsRatioTwoSided => &OddsRatio::TWO_SIDED,
        Design::OddsRatioOneSided => &OddsRatio::ONE_SIDED,
        Design::OddsRatioNonInferiority => &OddsRatio::NON_INFERIORITY,
        Design::OddsRatioEquivalence => &OddsRatio::EQUIVALENCE,
        Design::McNemarTwoSided => &McNemar::TWO_SIDED,
        Design::McNemarOneSided => &McNemar::ONE_SIDED,
        Design::CoxTwoSided => &CoxPh::TWO_SIDED,
        Design::CoxOneSided => &CoxPh::ONE_SIDED,
        Design::CoxNonInferiority => &CoxPh::NON_INFERIORITY,
        Design::CoxEquivalence => &CoxPh::EQUIVALENCE,
        Design::CaseSeries => &CaseSeries::TWO_SIDED,
    }
}

/// Solve for the sample size, rounded up.
///
/// `None` means no sample size exists under these inputs; it never means zero.
#[must_use]
pub fn solve_sample_size(design: Design, params: &ParameterSet) -> Option<f64> {
    formula(design)
        .sample_size(params)
        .and_then(finalize_sample_size)
}

/// Solve for the power reached with sample size `n`, at full precision
#[must_use]
pub fn solve_power(design: Design, n: f64, params: &ParameterSet) -> Option<f64> {
    if !(n.is_finite() && n > 0.0) {
        return None;
    }
    formula(design).power(n, params).and_then(finalize_power)
}

/// Check every parameter `design` needs, plus its cross-field constraints.
///
/// `extra` lists the direction-specific inputs (`power` or `sampleSize`).
pub(crate) fn check_parameters(
    design: Design,
    extra: Param,
    params: &ParameterSet,
) -> ValidationErrors {
    let formula = formula(design);
    let mut errors = ValidationErrors::new();

    let required = [Param::Alpha, extra];
    for &param in required.iter().chain(formula.parameters()) {
        if let Some(error) = check_domain(param, params) {
            errors.insert(param, error);
        }
    }

    if design.hypothesis() == Hypothesis::Equivalence
        && params.get(Param::Delta).is_some_and(|delta| delta <= 0.0)
    {
        errors.insert(Param::Delta, ValidationError::MarginNotPositive);
    }
    if errors.is_empty() {
        formula.check(params, &mut errors);
    }
    if errors.is_empty() && formula.effect(params).is_none() {
        errors.insert(formula.effect_param(), ValidationError::ZeroEffect);
    }
    errors
}

fn check_domain(param: Param, params: &ParameterSet) -> Option<ValidationError> {
    use crate::model::Domain;

    let value = match params.entry(param) {
        None | Some(None) => return Some(ValidationError::Missing),
        Some(Some(v)) => v,
    };
    if !value.is_finite() {
        return Some(ValidationError::NotFinite);
    }
    let domain = param.domain();
    if domain.contains(value) {
        return None;
    }
    Some(match domain {
        Domain::Probability => ValidationError::OutsideUnitInterval,
        Domain::Positive => ValidationError::NotPositive,
        Domain::Count => ValidationError::BelowOne,
        Domain::Real => ValidationError::NotFinite,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_design_has_parameters() {
        for design in Design::ALL {
            let params = formula(design).parameters();
            assert!(!params.is_empty(), "{design}");
            assert_eq!(
                params.contains(&Param::Delta),
                design.hypothesis().uses_margin(),
                "{design}"
            );
        }
    }

    #[test]
    fn test_empty_parameters_solve_to_none() {
        let empty = ParameterSet::new();
        for design in Design::ALL {
            assert!(solve_sample_size(design, &empty).is_none(), "{design}");
            assert!(solve_power(design, 50.0, &empty).is_none(), "{design}");
        }
    }

    #[test]
    fn test_check_reports_missing_and_domain_errors() {
        let params = ParameterSet::from([
            (Param::Alpha, 1.5),
            (Param::MeanA, 1.0),
            (Param::StdDevA, -1.0),
        ]);
        let errors = check_parameters(Design::TwoMeansOneSided, Param::Power, &params);
        assert_eq!(
            errors.get(Param::Alpha),
            Some(ValidationError::OutsideUnitInterval)
        );
        assert_eq!(errors.get(Param::Power), Some(ValidationError::Missing));
        assert_eq!(errors.get(Param::StdDevA), Some(ValidationError::NotPositive));
        assert_eq!(errors.get(Param::MeanB), Some(ValidationError::Missing));
        assert!(!errors.contains(Param::MeanA));
    }

    #[test]
    fn test_check_equivalence_margin() {
        let params = ParameterSet::from([
            (Param::Alpha, 0.05),
            (Param::Power, 0.8),
            (Param::HazardRatio, 1.0),
            (Param::AllocationA, 0.5),
            (Param::EventProbability, 0.6),
            (Param::Delta, -0.5),
        ]);
        let errors = check_parameters(Design::CoxEquivalence, Param::Power, &params);
        assert_eq!(
            errors.get(Param::Delta),
            Some(ValidationError::MarginNotPositive)
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_check_zero_effect_blames_first_parameter() {
        let params = ParameterSet::from([
            (Param::Alpha, 0.05),
            (Param::Power, 0.8),
            (Param::P10, 0.2),
            (Param::P01, 0.2),
        ]);
        let errors = check_parameters(Design::McNemarTwoSided, Param::Power, &params);
        assert_eq!(errors.get(Param::P10), Some(ValidationError::ZeroEffect));
    }
}

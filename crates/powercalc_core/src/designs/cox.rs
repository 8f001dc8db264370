//! Time-to-event comparison under the Cox proportional hazards model.

use crate::model::{Hypothesis, Param, ParameterSet};

use super::Formula;
use super::kernel::{Difference, Terms, ZTest};

/// Log hazard ratio test; solves for the total number of subjects.
///
/// Equality hypotheses compare `hazardRatio` with `nullHazardRatio`; margin
/// hypotheses take `delta` on the log hazard ratio scale instead.
#[derive(Debug, Clone, Copy)]
pub struct CoxPh {
    test: ZTest,
}

impl CoxPh {
    pub const TWO_SIDED: Self = Self::new(Hypothesis::TwoSided);
    pub const ONE_SIDED: Self = Self::new(Hypothesis::OneSided);
    pub const NON_INFERIORITY: Self = Self::new(Hypothesis::NonInferiority);
    pub const EQUIVALENCE: Self = Self::new(Hypothesis::Equivalence);

    const fn new(hypothesis: Hypothesis) -> Self {
        Self {
            test: ZTest::new(hypothesis),
        }
    }

    fn terms(&self, params: &ParameterSet) -> Option<Terms> {
        let hr = params.valid(Param::HazardRatio)?;
        let p_a = params.valid(Param::AllocationA)?;
        let p_event = params.valid(Param::EventProbability)?;
        let margin = self.test.margin(params)?;
        let log_hr = if self.test.hypothesis.uses_margin() {
            Difference::between(hr.ln(), 0.0)
        } else {
            let hr0 = params.valid(Param::NullHazardRatio)?;
            Difference::between(hr.ln(), hr0.ln())
        };
        let effect = self.test.effect(log_hr, margin)?;
        Some(Terms {
            variance: 1.0 / (p_a * (1.0 - p_a) * p_event),
            effect,
        })
    }
}

impl Formula for CoxPh {
    fn parameters(&self) -> &'static [Param] {
        if self.test.hypothesis.uses_margin() {
            &[
                Param::HazardRatio,
                Param::AllocationA,
                Param::EventProbability,
                Param::Delta,
            ]
        } else {
            &[
                Param::HazardRatio,
                Param::NullHazardRatio,
                Param::AllocationA,
                Param::EventProbability,
            ]
        }
    }

    fn effect(&self, params: &ParameterSet) -> Option<f64> {
        self.terms(params).map(|t| t.effect)
    }

    fn sample_size(&self, params: &ParameterSet) -> Option<f64> {
        self.test.sample_size(params, self.terms(params)?)
    }

    fn power(&self, n: f64, params: &ParameterSet) -> Option<f64> {
        self.test.power(n, params, self.terms(params)?)
    }
}

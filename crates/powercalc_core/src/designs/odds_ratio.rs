//! Two proportions compared through the log odds ratio.

use crate::model::{Hypothesis, Param, ParameterSet};

use super::Formula;
use super::kernel::{Difference, Terms, ZTest};

fn logit(p: f64) -> f64 {
    (p / (1.0 - p)).ln()
}

/// Log odds ratio between groups A and B with allocation κ = nB/nA.
///
/// The margin `delta` is on the log odds ratio scale.
#[derive(Debug, Clone, Copy)]
pub struct OddsRatio {
    test: ZTest,
}

impl OddsRatio {
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
        let p_a = params.valid(Param::ProportionA)?;
        let p_b = params.valid(Param::ProportionB)?;
        let kappa = params.valid(Param::Kappa)?;
        let margin = self.test.margin(params)?;
        let log_or = Difference::between(logit(p_a), logit(p_b));
        let effect = self.test.effect(log_or, margin)?;
        Some(Terms {
            variance: 1.0 / (p_a * (1.0 - p_a)) + 1.0 / (kappa * p_b * (1.0 - p_b)),
            effect,
        })
    }
}

impl Formula for OddsRatio {
    fn parameters(&self) -> &'static [Param] {
        if self.test.hypothesis.uses_margin() {
            &[
                Param::ProportionA,
                Param::ProportionB,
                Param::Kappa,
                Param::Delta,
            ]
        } else {
            &[Param::ProportionA, Param::ProportionB, Param::Kappa]
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

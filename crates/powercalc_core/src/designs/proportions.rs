//! Designs comparing proportions with the normal approximation.

use crate::model::{Hypothesis, Param, ParameterSet};

use super::Formula;
use super::kernel::{Difference, Terms, ZTest};

fn bernoulli_variance(p: f64) -> f64 {
    p * (1.0 - p)
}

/// One proportion against a null value, variance p(1 − p)
#[derive(Debug, Clone, Copy)]
pub struct OneProportion {
    test: ZTest,
}

impl OneProportion {
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
        let p = params.valid(Param::Proportion)?;
        let p0 = params.valid(Param::NullProportion)?;
        let margin = self.test.margin(params)?;
        let effect = self.test.effect(Difference::between(p, p0), margin)?;
        Some(Terms {
            variance: bernoulli_variance(p),
            effect,
        })
    }
}

impl Formula for OneProportion {
    fn parameters(&self) -> &'static [Param] {
        if self.test.hypothesis.uses_margin() {
            &[Param::Proportion, Param::NullProportion, Param::Delta]
        } else {
            &[Param::Proportion, Param::NullProportion]
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

/// Two independent proportions with allocation κ = nB/nA; solves for nA
#[derive(Debug, Clone, Copy)]
pub struct TwoProportions {
    test: ZTest,
}

impl TwoProportions {
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
        let effect = self.test.effect(Difference::between(p_a, p_b), margin)?;
        Some(Terms {
            variance: bernoulli_variance(p_a) + bernoulli_variance(p_b) / kappa,
            effect,
        })
    }
}

impl Formula for TwoProportions {
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

/// Pairwise comparison of two proportions among τ comparisons, equal group
/// sizes, Bonferroni-split alpha
#[derive(Debug, Clone, Copy)]
pub struct KProportions {
    hypothesis: Hypothesis,
}

impl KProportions {
    pub const TWO_SIDED: Self = Self {
        hypothesis: Hypothesis::TwoSided,
    };
    pub const ONE_SIDED: Self = Self {
        hypothesis: Hypothesis::OneSided,
    };

    fn setup(&self, params: &ParameterSet) -> Option<(ZTest, Terms)> {
        let p_a = params.valid(Param::ProportionA)?;
        let p_b = params.valid(Param::ProportionB)?;
        let tau = params.valid(Param::Tau)?;
        let test = ZTest::new(self.hypothesis).with_comparisons(tau);
        let effect = test.effect(Difference::between(p_a, p_b), 0.0)?;
        Some((
            test,
            Terms {
                variance: bernoulli_variance(p_a) + bernoulli_variance(p_b),
                effect,
            },
        ))
    }
}

impl Formula for KProportions {
    fn parameters(&self) -> &'static [Param] {
        &[Param::ProportionA, Param::ProportionB, Param::Tau]
    }

    fn effect(&self, params: &ParameterSet) -> Option<f64> {
        self.setup(params).map(|(_, t)| t.effect)
    }

    fn sample_size(&self, params: &ParameterSet) -> Option<f64> {
        let (test, terms) = self.setup(params)?;
        test.sample_size(params, terms)
    }

    fn power(&self, n: f64, params: &ParameterSet) -> Option<f64> {
        let (test, terms) = self.setup(params)?;
        test.power(n, params, terms)
    }
}

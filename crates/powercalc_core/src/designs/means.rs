//! Designs comparing means: one sample against a reference value, two
//! independent groups, and pairwise comparisons among k groups.

use crate::model::{Hypothesis, Param, ParameterSet};

use super::Formula;
use super::kernel::{Difference, Terms, ZTest};

/// One-sample mean against a null value, variance σ²
#[derive(Debug, Clone, Copy)]
pub struct OneMean {
    test: ZTest,
}

impl OneMean {
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
        let mean = params.valid(Param::Mean)?;
        let null_mean = params.valid(Param::NullMean)?;
        let sd = params.valid(Param::StdDev)?;
        let margin = self.test.margin(params)?;
        let effect = self
            .test
            .effect(Difference::between(mean, null_mean), margin)?;
        Some(Terms {
            variance: sd * sd,
            effect,
        })
    }
}

impl Formula for OneMean {
    fn parameters(&self) -> &'static [Param] {
        if self.test.hypothesis.uses_margin() {
            &[Param::Mean, Param::NullMean, Param::StdDev, Param::Delta]
        } else {
            &[Param::Mean, Param::NullMean, Param::StdDev]
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

/// Two independent groups with allocation κ = nB/nA.
///
/// Solves for nA with variance σA² + σB²/κ.
#[derive(Debug, Clone, Copy)]
pub struct TwoMeans {
    test: ZTest,
}

impl TwoMeans {
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
        let mean_a = params.valid(Param::MeanA)?;
        let mean_b = params.valid(Param::MeanB)?;
        let sd_a = params.valid(Param::StdDevA)?;
        let sd_b = params.valid(Param::StdDevB)?;
        let kappa = params.valid(Param::Kappa)?;
        let margin = self.test.margin(params)?;
        let effect = self
            .test
            .effect(Difference::between(mean_a, mean_b), margin)?;
        Some(Terms {
            variance: sd_a * sd_a + sd_b * sd_b / kappa,
            effect,
        })
    }
}

impl Formula for TwoMeans {
    fn parameters(&self) -> &'static [Param] {
        if self.test.hypothesis.uses_margin() {
            &[
                Param::MeanA,
                Param::MeanB,
                Param::StdDevA,
                Param::StdDevB,
                Param::Kappa,
                Param::Delta,
            ]
        } else {
            &[
                Param::MeanA,
                Param::MeanB,
                Param::StdDevA,
                Param::StdDevB,
                Param::Kappa,
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

/// One-way ANOVA pairwise comparison of groups A and B among τ comparisons,
/// equal group sizes and a common σ. Alpha is Bonferroni-split over τ.
#[derive(Debug, Clone, Copy)]
pub struct KMeans {
    hypothesis: Hypothesis,
}

impl KMeans {
    pub const TWO_SIDED: Self = Self {
        hypothesis: Hypothesis::TwoSided,
    };
    pub const ONE_SIDED: Self = Self {
        hypothesis: Hypothesis::OneSided,
    };

    fn setup(&self, params: &ParameterSet) -> Option<(ZTest, Terms)> {
        let mean_a = params.valid(Param::MeanA)?;
        let mean_b = params.valid(Param::MeanB)?;
        let sd = params.valid(Param::StdDev)?;
        let tau = params.valid(Param::Tau)?;
        let test = ZTest::new(self.hypothesis).with_comparisons(tau);
        let effect = test.effect(Difference::between(mean_a, mean_b), 0.0)?;
        Some((
            test,
            Terms {
                variance: 2.0 * sd * sd,
                effect,
            },
        ))
    }
}

impl Formula for KMeans {
    fn parameters(&self) -> &'static [Param] {
        &[Param::MeanA, Param::MeanB, Param::StdDev, Param::Tau]
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

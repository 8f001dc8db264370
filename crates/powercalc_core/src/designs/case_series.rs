//! Self-controlled case series with a single risk period.
//!
//! Conditional on the number of cases, the count falling in the risk period
//! is binomial with probability π = ρr / (ρr + 1 − r), where r is the risk
//! period's share of the observation period and ρ the relative incidence.
//! Testing ρ = 1 is testing π = r.

use crate::model::{Hypothesis, Param, ParameterSet};

use super::Formula;
use super::kernel::{Difference, ZTest};

/// Number of cases needed to detect relative incidence ρ (2-sided)
#[derive(Debug, Clone, Copy)]
pub struct CaseSeries {
    test: ZTest,
}

struct RiskPeriod {
    null_sd: f64,
    alt_sd: f64,
    effect: f64,
}

impl CaseSeries {
    pub const TWO_SIDED: Self = Self {
        test: ZTest::new(Hypothesis::TwoSided),
    };

    fn risk_period(&self, params: &ParameterSet) -> Option<RiskPeriod> {
        let rho = params.valid(Param::RelativeIncidence)?;
        let r = params.valid(Param::RiskProportion)?;
        let pi = rho * r / (rho * r + 1.0 - r);
        let effect = self.test.effect(Difference::between(pi, r), 0.0)?;
        Some(RiskPeriod {
            null_sd: (r * (1.0 - r)).sqrt(),
            alt_sd: (pi * (1.0 - pi)).sqrt(),
            effect,
        })
    }
}

impl Formula for CaseSeries {
    fn parameters(&self) -> &'static [Param] {
        &[Param::RelativeIncidence, Param::RiskProportion]
    }

    fn effect(&self, params: &ParameterSet) -> Option<f64> {
        self.risk_period(params).map(|r| r.effect)
    }

    fn sample_size(&self, params: &ParameterSet) -> Option<f64> {
        let r = self.risk_period(params)?;
        self.test
            .sample_size_unpooled(params, r.null_sd, r.alt_sd, r.effect)
    }

    fn power(&self, n: f64, params: &ParameterSet) -> Option<f64> {
        let r = self.risk_period(params)?;
        self.test
            .power_unpooled(n, params, r.null_sd, r.alt_sd, r.effect)
    }
}

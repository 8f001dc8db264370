//! Shared z-test algebra.
//!
//! Nearly every design reduces to `n = V * ((z_c + z_b) / effect)^2`, where
//! `V` is the per-subject variance of the estimator, `z_c` the critical value
//! of the hypothesis and `z_b` the power quantile. McNemar and the case series
//! use different variances under the null and the alternative, covered by the
//! `*_unpooled` pair.

use crate::model::{Hypothesis, Param, ParameterSet};
use crate::stats::{cdf, quantile, upper_quantile};

/// A raw difference between two terms, remembered with the magnitude of the
/// terms so cancellation down to rounding noise can be recognised as zero.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Difference {
    value: f64,
    scale: f64,
}

impl Difference {
    pub(crate) fn between(a: f64, b: f64) -> Self {
        Self {
            value: a - b,
            scale: a.abs().max(b.abs()),
        }
    }

    fn shifted(self, margin: f64) -> Self {
        Self {
            value: self.value - margin,
            scale: self.scale.max(margin.abs()),
        }
    }

    fn magnitude(self) -> Self {
        Self {
            value: self.value.abs(),
            scale: self.scale,
        }
    }

    /// The value, or `None` when it is zero up to one ULP of its terms
    fn nonzero(self) -> Option<f64> {
        let tolerance = f64::EPSILON * self.scale;
        (self.value.is_finite() && self.value.abs() > tolerance).then_some(self.value)
    }
}

/// Variance and hypothesis-adjusted effect of one design evaluation
#[derive(Debug, Clone, Copy)]
pub(crate) struct Terms {
    pub variance: f64,
    pub effect: f64,
}

/// Critical-value conventions of one hypothesis kind
#[derive(Debug, Clone, Copy)]
pub(crate) struct ZTest {
    pub hypothesis: Hypothesis,
    /// Number of comparisons sharing alpha (Bonferroni)
    pub comparisons: f64,
}

impl ZTest {
    pub(crate) const fn new(hypothesis: Hypothesis) -> Self {
        Self {
            hypothesis,
            comparisons: 1.0,
        }
    }

    pub(crate) fn with_comparisons(self, comparisons: f64) -> Self {
        Self {
            comparisons,
            ..self
        }
    }

    /// The margin `delta` when the hypothesis takes one, zero otherwise
    pub(crate) fn margin(&self, params: &ParameterSet) -> Option<f64> {
        if self.hypothesis.uses_margin() {
            let delta = params.get(Param::Delta)?;
            if self.hypothesis == Hypothesis::Equivalence && delta <= 0.0 {
                return None;
            }
            Some(delta)
        } else {
            Some(0.0)
        }
    }

    /// Hypothesis-adjusted effect: Δ, Δ − δ, or |Δ| − δ
    pub(crate) fn effect(&self, difference: Difference, margin: f64) -> Option<f64> {
        let adjusted = match self.hypothesis {
            Hypothesis::TwoSided | Hypothesis::OneSided => difference,
            Hypothesis::NonInferiority => difference.shifted(margin),
            Hypothesis::Equivalence => difference.magnitude().shifted(margin),
        };
        adjusted.nonzero()
    }

    /// z_{1-α/(2τ)} for 2-sided tests, z_{1-α/τ} otherwise
    fn critical(&self, alpha: f64) -> Option<f64> {
        if !(alpha > 0.0 && alpha < 1.0) || !(self.comparisons >= 1.0) {
            return None;
        }
        let tail = match self.hypothesis {
            Hypothesis::TwoSided => alpha / (2.0 * self.comparisons),
            _ => alpha / self.comparisons,
        };
        upper_quantile(tail)
    }

    /// z_{1-β}, or z_{1-β/2} for equivalence
    fn power_quantile(&self, power: f64) -> Option<f64> {
        if !(power > 0.0 && power < 1.0) {
            return None;
        }
        match self.hypothesis {
            Hypothesis::Equivalence => quantile(1.0 - (1.0 - power) / 2.0),
            _ => quantile(power),
        }
    }

    /// Unrounded sample size for the equal-variance form
    pub(crate) fn sample_size(&self, params: &ParameterSet, terms: Terms) -> Option<f64> {
        let z_c = self.critical(params.get(Param::Alpha)?)?;
        let z_b = self.power_quantile(params.get(Param::Power)?)?;
        if !(terms.variance > 0.0) || terms.effect == 0.0 {
            return None;
        }
        let ratio = (z_c + z_b) / terms.effect;
        Some(terms.variance * ratio * ratio)
    }

    /// Power of the equal-variance form at a fixed sample size
    pub(crate) fn power(&self, n: f64, params: &ParameterSet, terms: Terms) -> Option<f64> {
        let z_c = self.critical(params.get(Param::Alpha)?)?;
        if !(n > 0.0) || !(terms.variance > 0.0) {
            return None;
        }
        let z = terms.effect * (n / terms.variance).sqrt();
        let power = match self.hypothesis {
            Hypothesis::OneSided => cdf(z.abs() - z_c),
            Hypothesis::TwoSided | Hypothesis::NonInferiority => two_tailed(z, z_c),
            Hypothesis::Equivalence => 2.0 * two_tailed(z, z_c) - 1.0,
        };
        Some(power)
    }

    /// Unrounded sample size when the null and alternative standard
    /// deviations differ
    pub(crate) fn sample_size_unpooled(
        &self,
        params: &ParameterSet,
        null_sd: f64,
        alt_sd: f64,
        effect: f64,
    ) -> Option<f64> {
        let z_c = self.critical(params.get(Param::Alpha)?)?;
        let z_b = self.power_quantile(params.get(Param::Power)?)?;
        if !(null_sd > 0.0 && alt_sd > 0.0) || effect == 0.0 {
            return None;
        }
        let ratio = (z_c * null_sd + z_b * alt_sd) / effect;
        Some(ratio * ratio)
    }

    pub(crate) fn power_unpooled(
        &self,
        n: f64,
        params: &ParameterSet,
        null_sd: f64,
        alt_sd: f64,
        effect: f64,
    ) -> Option<f64> {
        let z_c = self.critical(params.get(Param::Alpha)?)?;
        if !(n > 0.0) || !(null_sd > 0.0 && alt_sd > 0.0) {
            return None;
        }
        let shift = effect.abs() * n.sqrt();
        let upper = cdf((shift - z_c * null_sd) / alt_sd);
        let power = match self.hypothesis {
            Hypothesis::TwoSided => upper + cdf((-shift - z_c * null_sd) / alt_sd),
            _ => upper,
        };
        Some(power)
    }
}

/// Φ(z − c) + Φ(−z − c)
fn two_tailed(z: f64, critical: f64) -> f64 {
    cdf(z - critical) + cdf(-z - critical)
}

/// Round a raw sample size up, or `None` if it is not a positive finite number
pub(crate) fn finalize_sample_size(raw: f64) -> Option<f64> {
    (raw.is_finite() && raw > 0.0).then(|| raw.ceil())
}

/// Keep a power value only when it is finite and inside (0, 1]
pub(crate) fn finalize_power(raw: f64) -> Option<f64> {
    (raw.is_finite() && raw > 0.0 && raw <= 1.0).then_some(raw)
}

//! Paired proportions: McNemar's Z-test on discordant pairs.

use crate::error::{ValidationError, ValidationErrors};
use crate::model::{Hypothesis, Param, ParameterSet};

use super::Formula;
use super::kernel::{Difference, ZTest};

/// Discordant pair probabilities p10 and p01; solves for the number of pairs.
///
/// Null and alternative variances differ, so it uses the unpooled kernel:
/// σ₀ = √p_disc and σ₁ = √(p_disc − p_diff²).
#[derive(Debug, Clone, Copy)]
pub struct McNemar {
    test: ZTest,
}

struct Discordance {
    null_sd: f64,
    alt_sd: f64,
    effect: f64,
}

impl McNemar {
    pub const TWO_SIDED: Self = Self {
        test: ZTest::new(Hypothesis::TwoSided),
    };
    pub const ONE_SIDED: Self = Self {
        test: ZTest::new(Hypothesis::OneSided),
    };

    fn discordance(&self, params: &ParameterSet) -> Option<Discordance> {
        let p10 = params.valid(Param::P10)?;
        let p01 = params.valid(Param::P01)?;
        let p_disc = p10 + p01;
        if p_disc > 1.0 {
            return None;
        }
        let effect = self.test.effect(Difference::between(p10, p01), 0.0)?;
        let alt_var = p_disc - effect * effect;
        if !(alt_var > 0.0) {
            return None;
        }
        Some(Discordance {
            null_sd: p_disc.sqrt(),
            alt_sd: alt_var.sqrt(),
            effect,
        })
    }
}

impl Formula for McNemar {
    fn parameters(&self) -> &'static [Param] {
        &[Param::P10, Param::P01]
    }

    fn effect(&self, params: &ParameterSet) -> Option<f64> {
        self.discordance(params).map(|d| d.effect)
    }

    fn sample_size(&self, params: &ParameterSet) -> Option<f64> {
        let d = self.discordance(params)?;
        self.test
            .sample_size_unpooled(params, d.null_sd, d.alt_sd, d.effect)
    }

    fn power(&self, n: f64, params: &ParameterSet) -> Option<f64> {
        let d = self.discordance(params)?;
        self.test
            .power_unpooled(n, params, d.null_sd, d.alt_sd, d.effect)
    }

    fn check(&self, params: &ParameterSet, errors: &mut ValidationErrors) {
        if let (Some(p10), Some(p01)) = (params.get(Param::P10), params.get(Param::P01))
            && p10 + p01 > 1.0
        {
            errors.insert(Param::P01, ValidationError::DiscordantSumAboveOne);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::designs::kernel::finalize_sample_size;

    fn base() -> ParameterSet {
        ParameterSet::from([
            (Param::Alpha, 0.05),
            (Param::Power, 0.8),
            (Param::P10, 0.05),
            (Param::P01, 0.45),
        ])
    }

    #[test]
    fn test_two_sided_reference() {
        let raw = McNemar::TWO_SIDED.sample_size(&base()).unwrap();
        assert!(raw > 22.0 && raw < 23.0, "raw = {raw}");
        assert_eq!(finalize_sample_size(raw), Some(23.0));
    }

    #[test]
    fn test_one_sided_needs_fewer_pairs() {
        let two = McNemar::TWO_SIDED.sample_size(&base()).unwrap();
        let one = McNemar::ONE_SIDED.sample_size(&base()).unwrap();
        assert!(one < two);
    }

    #[test]
    fn test_power_at_reference_size() {
        let power = McNemar::TWO_SIDED.power(23.0, &base()).unwrap();
        assert!(power >= 0.8 && power < 0.82, "power = {power}");
    }

    #[test]
    fn test_discordant_sum_above_one() {
        let params = base().with(Param::P10, 0.6).with(Param::P01, 0.5);
        assert!(McNemar::TWO_SIDED.sample_size(&params).is_none());
        let mut errors = ValidationErrors::new();
        McNemar::TWO_SIDED.check(&params, &mut errors);
        assert_eq!(
            errors.get(Param::P01),
            Some(ValidationError::DiscordantSumAboveOne)
        );
    }

    #[test]
    fn test_symmetric_discordance_is_degenerate() {
        let params = base().with(Param::P10, 0.25).with(Param::P01, 0.25);
        assert!(McNemar::TWO_SIDED.sample_size(&params).is_none());
    }
}

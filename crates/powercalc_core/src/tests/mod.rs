//! Integration tests for the powercalc engine
//!
//! Tests are organized by topic:
//! - `reference` - Published reference scenarios with known answers
//! - `round_trip` - Sample size and power solved against each other
//! - `null_safety` - Out-of-domain inputs never produce a number
//! - `curves` - Sensitivity curves and scenario selection end to end

mod curves;
mod round_trip;

use crate::model::{Design, Family, Hypothesis, Param, ParameterSet};

/// A solvable parameter set for any design, sized so every sample size lands
/// well above 50
pub(crate) fn fixture(design: Design) -> ParameterSet {
    let family = design.family();
    let params = match family {
        Family::OneMean => ParameterSet::from([
            (Param::Mean, 10.3),
            (Param::NullMean, 10.0),
            (Param::StdDev, 2.0),
        ]),
        Family::TwoMeans => ParameterSet::from([
            (Param::MeanA, 10.3),
            (Param::MeanB, 10.0),
            (Param::StdDevA, 2.0),
            (Param::StdDevB, 2.0),
            (Param::Kappa, 1.0),
        ]),
        Family::KMeans => ParameterSet::from([
            (Param::MeanA, 10.3),
            (Param::MeanB, 10.0),
            (Param::StdDev, 2.0),
            (Param::Tau, 2.0),
        ]),
        Family::OneProportion => {
            ParameterSet::from([(Param::Proportion, 0.45), (Param::NullProportion, 0.35)])
        }
        Family::TwoProportions | Family::OddsRatio => ParameterSet::from([
            (Param::ProportionA, 0.45),
            (Param::ProportionB, 0.35),
            (Param::Kappa, 1.0),
        ]),
        Family::KProportions => ParameterSet::from([
            (Param::ProportionA, 0.45),
            (Param::ProportionB, 0.35),
            (Param::Tau, 2.0),
        ]),
        Family::McNemar => ParameterSet::from([(Param::P10, 0.2), (Param::P01, 0.12)]),
        Family::CoxPh => ParameterSet::from([
            (Param::HazardRatio, 1.3),
            (Param::NullHazardRatio, 1.0),
            (Param::AllocationA, 0.5),
            (Param::EventProbability, 0.6),
        ]),
        Family::CaseSeries => ParameterSet::from([
            (Param::RelativeIncidence, 1.5),
            (Param::RiskProportion, 0.2),
        ]),
    };

    let (non_inferiority, equivalence) = match family {
        Family::OneProportion | Family::TwoProportions => (-0.02, 0.15),
        Family::OddsRatio => (-0.1, 0.6),
        Family::CoxPh => (-0.1, 0.5),
        _ => (-0.05, 0.5),
    };
    let params = match design.hypothesis() {
        Hypothesis::NonInferiority => params.with(Param::Delta, non_inferiority),
        Hypothesis::Equivalence => params.with(Param::Delta, equivalence),
        Hypothesis::TwoSided | Hypothesis::OneSided => params,
    };
    params.with(Param::Alpha, 0.05).with(Param::Power, 0.8)
}

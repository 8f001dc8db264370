//! Parameter names, their domains, and the parameter set passed to designs.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Admissible range of a parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Open unit interval (0, 1)
    Probability,
    /// Strictly positive
    Positive,
    /// At least one (number of comparisons)
    Count,
    /// Any finite real
    Real,
}

impl Domain {
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match self {
            Domain::Probability => value > 0.0 && value < 1.0,
            Domain::Positive => value > 0.0,
            Domain::Count => value >= 1.0,
            Domain::Real => true,
        }
    }
}

/// Every parameter name any design understands.
///
/// Names serialize in camelCase (`meanA`, `stdDevB`, `p10`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Param {
    Alpha,
    Power,
    SampleSize,
    Mean,
    NullMean,
    MeanA,
    MeanB,
    StdDev,
    StdDevA,
    StdDevB,
    Kappa,
    Delta,
    Tau,
    Proportion,
    NullProportion,
    ProportionA,
    ProportionB,
    P10,
    P01,
    HazardRatio,
    NullHazardRatio,
    AllocationA,
    EventProbability,
    RelativeIncidence,
    RiskProportion,
}

impl Param {
    pub const ALL: [Param; 25] = [
        Param::Alpha,
        Param::Power,
        Param::SampleSize,
        Param::Mean,
        Param::NullMean,
        Param::MeanA,
        Param::MeanB,
        Param::StdDev,
        Param::StdDevA,
        Param::StdDevB,
        Param::Kappa,
        Param::Delta,
        Param::Tau,
        Param::Proportion,
        Param::NullProportion,
        Param::ProportionA,
        Param::ProportionB,
        Param::P10,
        Param::P01,
        Param::HazardRatio,
        Param::NullHazardRatio,
        Param::AllocationA,
        Param::EventProbability,
        Param::RelativeIncidence,
        Param::RiskProportion,
    ];

    /// Wire name, identical to the serde representation
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Param::Alpha => "alpha",
            Param::Power => "power",
            Param::SampleSize => "sampleSize",
            Param::Mean => "mean",
            Param::NullMean => "nullMean",
            Param::MeanA => "meanA",
            Param::MeanB => "meanB",
            Param::StdDev => "stdDev",
            Param::StdDevA => "stdDevA",
            Param::StdDevB => "stdDevB",
            Param::Kappa => "kappa",
            Param::Delta => "delta",
            Param::Tau => "tau",
            Param::Proportion => "proportion",
            Param::NullProportion => "nullProportion",
            Param::ProportionA => "proportionA",
            Param::ProportionB => "proportionB",
            Param::P10 => "p10",
            Param::P01 => "p01",
            Param::HazardRatio => "hazardRatio",
            Param::NullHazardRatio => "nullHazardRatio",
            Param::AllocationA => "allocationA",
            Param::EventProbability => "eventProbability",
            Param::RelativeIncidence => "relativeIncidence",
            Param::RiskProportion => "riskProportion",
        }
    }

    /// Human-readable description for listings and error messages
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Param::Alpha => "Type I error rate",
            Param::Power => "Target power (1 - beta)",
            Param::SampleSize => "Sample size",
            Param::Mean => "True mean",
            Param::NullMean => "Mean under the null hypothesis",
            Param::MeanA => "Mean of group A",
            Param::MeanB => "Mean of group B",
            Param::StdDev => "Standard deviation",
            Param::StdDevA => "Standard deviation of group A",
            Param::StdDevB => "Standard deviation of group B",
            Param::Kappa => "Allocation ratio nB / nA",
            Param::Delta => "Non-inferiority, superiority or equivalence margin",
            Param::Tau => "Number of pairwise comparisons",
            Param::Proportion => "True proportion",
            Param::NullProportion => "Proportion under the null hypothesis",
            Param::ProportionA => "Proportion in group A",
            Param::ProportionB => "Proportion in group B",
            Param::P10 => "Probability of a (yes, no) discordant pair",
            Param::P01 => "Probability of a (no, yes) discordant pair",
            Param::HazardRatio => "True hazard ratio",
            Param::NullHazardRatio => "Hazard ratio under the null hypothesis",
            Param::AllocationA => "Fraction of subjects allocated to group A",
            Param::EventProbability => "Overall probability of observing the event",
            Param::RelativeIncidence => "Relative incidence in the risk period",
            Param::RiskProportion => "Risk period as a fraction of the observation period",
        }
    }

    #[must_use]
    pub fn domain(self) -> Domain {
        match self {
            Param::Alpha
            | Param::Power
            | Param::Proportion
            | Param::NullProportion
            | Param::ProportionA
            | Param::ProportionB
            | Param::P10
            | Param::P01
            | Param::AllocationA
            | Param::EventProbability
            | Param::RiskProportion => Domain::Probability,
            Param::SampleSize
            | Param::StdDev
            | Param::StdDevA
            | Param::StdDevB
            | Param::Kappa
            | Param::HazardRatio
            | Param::NullHazardRatio
            | Param::RelativeIncidence => Domain::Positive,
            Param::Tau => Domain::Count,
            Param::Mean | Param::NullMean | Param::MeanA | Param::MeanB | Param::Delta => {
                Domain::Real
            }
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a known parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseParamError(pub String);

impl fmt::Display for ParseParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown parameter '{}'", self.0)
    }
}

impl std::error::Error for ParseParamError {}

impl FromStr for Param {
    type Err = ParseParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Param::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseParamError(s.to_string()))
    }
}

/// Mapping from parameter name to a number or null.
///
/// Owned by the caller; the engine only ever borrows it. A stored non-finite
/// number reads back as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    values: BTreeMap<Param, Option<f64>>,
}

impl ParameterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, param: Param, value: f64) -> Self {
        self.values.insert(param, Some(value));
        self
    }

    /// Set a value, or explicitly null it with `None`
    pub fn set(&mut self, param: Param, value: Option<f64>) {
        self.values.insert(param, value);
    }

    pub fn insert(&mut self, param: Param, value: f64) {
        self.values.insert(param, Some(value));
    }

    pub fn remove(&mut self, param: Param) -> Option<f64> {
        self.values.remove(&param).flatten()
    }

    /// The finite value of `param`, if present
    #[must_use]
    pub fn get(&self, param: Param) -> Option<f64> {
        self.values
            .get(&param)
            .copied()
            .flatten()
            .filter(|v| v.is_finite())
    }

    /// The value of `param` only if it lies inside the parameter's domain
    #[must_use]
    pub fn valid(&self, param: Param) -> Option<f64> {
        self.get(param).filter(|&v| param.domain().contains(v))
    }

    /// Raw entry: `None` when absent, `Some(None)` when explicitly null
    #[must_use]
    pub fn entry(&self, param: Param) -> Option<Option<f64>> {
        self.values.get(&param).copied()
    }

    #[must_use]
    pub fn contains(&self, param: Param) -> bool {
        self.get(param).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Param, Option<f64>)> + '_ {
        self.values.iter().map(|(p, v)| (*p, *v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copy of this set with `other`'s entries layered on top
    #[must_use]
    pub fn merged(&self, other: &ParameterSet) -> ParameterSet {
        let mut merged = self.clone();
        for (param, value) in other.iter() {
            merged.set(param, value);
        }
        merged
    }
}

impl FromIterator<(Param, f64)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (Param, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(p, v)| (p, Some(v))).collect(),
        }
    }
}

impl<const N: usize> From<[(Param, f64); N]> for ParameterSet {
    fn from(entries: [(Param, f64); N]) -> Self {
        entries.into_iter().collect()
    }
}

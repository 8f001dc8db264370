//! Design identifiers.
//!
//! A `Design` names one formula family together with one hypothesis kind. The
//! formulas themselves live in [`crate::designs`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which quantity is being solved for; the other one is a fixed input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolveDirection {
    #[default]
    SampleSize,
    Power,
}

/// Family of test statistics sharing one variance/effect model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    OneMean,
    TwoMeans,
    KMeans,
    OneProportion,
    TwoProportions,
    KProportions,
    OddsRatio,
    McNemar,
    CoxPh,
    CaseSeries,
}

impl Family {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Family::OneMean => "Compare 1 Mean",
            Family::TwoMeans => "Compare 2 Means",
            Family::KMeans => "Compare k Means (ANOVA pairwise)",
            Family::OneProportion => "Compare 1 Proportion",
            Family::TwoProportions => "Compare 2 Proportions",
            Family::KProportions => "Compare k Proportions (pairwise)",
            Family::OddsRatio => "Compare 2 Proportions: Odds Ratio",
            Family::McNemar => "Compare Paired Proportions: McNemar's Z-test",
            Family::CoxPh => "Time-To-Event: Cox Proportional Hazards",
            Family::CaseSeries => "Self-Controlled Case Series",
        }
    }
}

/// Kind of hypothesis being tested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hypothesis {
    TwoSided,
    OneSided,
    NonInferiority,
    Equivalence,
}

impl Hypothesis {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Hypothesis::TwoSided => "2-Sided Equality",
            Hypothesis::OneSided => "1-Sided",
            Hypothesis::NonInferiority => "Non-Inferiority or Superiority",
            Hypothesis::Equivalence => "Equivalence",
        }
    }

    /// Whether the design takes a margin `delta`
    #[must_use]
    pub fn uses_margin(self) -> bool {
        matches!(self, Hypothesis::NonInferiority | Hypothesis::Equivalence)
    }
}

/// Immutable identifier of a hypothesis-test design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Design {
    OneMeanTwoSided,
    OneMeanOneSided,
    OneMeanNonInferiority,
    OneMeanEquivalence,
    TwoMeansTwoSided,
    TwoMeansOneSided,
    TwoMeansNonInferiority,
    TwoMeansEquivalence,
    KMeansTwoSided,
    KMeansOneSided,
    OneProportionTwoSided,
    OneProportionOneSided,
    OneProportionNonInferiority,
    OneProportionEquivalence,
    TwoProportionsTwoSided,
    TwoProportionsOneSided,
    TwoProportionsNonInferiority,
    TwoProportionsEquivalence,
    KProportionsTwoSided,
    KProportionsOneSided,
    OddsRatioTwoSided,
    OddsRatioOneSided,
    OddsRatioNonInferiority,
    OddsRatioEquivalence,
    McNemarTwoSided,
    McNemarOneSided,
    CoxTwoSided,
    CoxOneSided,
    CoxNonInferiority,
    CoxEquivalence,
    CaseSeries,
}

impl Design {
    pub const ALL: [Design; 31] = [
        Design::OneMeanTwoSided,
        Design::OneMeanOneSided,
        Design::OneMeanNonInferiority,
        Design::OneMeanEquivalence,
        Design::TwoMeansTwoSided,
        Design::TwoMeansOneSided,
        Design::TwoMeansNonInferiority,
        Design::TwoMeansEquivalence,
        Design::KMeansTwoSided,
        Design::KMeansOneSided,
        Design::OneProportionTwoSided,
        Design::OneProportionOneSided,
        Design::OneProportionNonInferiority,
        Design::OneProportionEquivalence,
        Design::TwoProportionsTwoSided,
        Design::TwoProportionsOneSided,
        Design::TwoProportionsNonInferiority,
        Design::TwoProportionsEquivalence,
        Design::KProportionsTwoSided,
        Design::KProportionsOneSided,
        Design::OddsRatioTwoSided,
        Design::OddsRatioOneSided,
        Design::OddsRatioNonInferiority,
        Design::OddsRatioEquivalence,
        Design::McNemarTwoSided,
        Design::McNemarOneSided,
        Design::CoxTwoSided,
        Design::CoxOneSided,
        Design::CoxNonInferiority,
        Design::CoxEquivalence,
        Design::CaseSeries,
    ];

    /// Stable kebab-case identifier
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Design::OneMeanTwoSided => "one-mean-2-sided",
            Design::OneMeanOneSided => "one-mean-1-sided",
            Design::OneMeanNonInferiority => "one-mean-non-inferiority",
            Design::OneMeanEquivalence => "one-mean-equivalence",
            Design::TwoMeansTwoSided => "two-means-2-sided",
            Design::TwoMeansOneSided => "two-means-1-sided",
            Design::TwoMeansNonInferiority => "two-means-non-inferiority",
            Design::TwoMeansEquivalence => "two-means-equivalence",
            Design::KMeansTwoSided => "k-means-2-sided",
            Design::KMeansOneSided => "k-means-1-sided",
            Design::OneProportionTwoSided => "one-proportion-2-sided",
            Design::OneProportionOneSided => "one-proportion-1-sided",
            Design::OneProportionNonInferiority => "one-proportion-non-inferiority",
            Design::OneProportionEquivalence => "one-proportion-equivalence",
            Design::TwoProportionsTwoSided => "two-proportions-2-sided",
            Design::TwoProportionsOneSided => "two-proportions-1-sided",
            Design::TwoProportionsNonInferiority => "two-proportions-non-inferiority",
            Design::TwoProportionsEquivalence => "two-proportions-equivalence",
            Design::KProportionsTwoSided => "k-proportions-2-sided",
            Design::KProportionsOneSided => "k-proportions-1-sided",
            Design::OddsRatioTwoSided => "odds-ratio-2-sided",
            Design::OddsRatioOneSided => "odds-ratio-1-sided",
            Design::OddsRatioNonInferiority => "odds-ratio-non-inferiority",
            Design::OddsRatioEquivalence => "odds-ratio-equivalence",
            Design::McNemarTwoSided => "mcnemar-2-sided",
            Design::McNemarOneSided => "mcnemar-1-sided",
            Design::CoxTwoSided => "cox-2-sided",
            Design::CoxOneSided => "cox-1-sided",
            Design::CoxNonInferiority => "cox-non-inferiority",
            Design::CoxEquivalence => "cox-equivalence",
            Design::CaseSeries => "sccs-2-sided",
        }
    }

    #[must_use]
    pub fn family(self) -> Family {
        match self {
            Design::OneMeanTwoSided
            | Design::OneMeanOneSided
            | Design::OneMeanNonInferiority
            | Design::OneMeanEquivalence => Family::OneMean,
            Design::TwoMeansTwoSided
            | Design::TwoMeansOneSided
            | Design::TwoMeansNonInferiority
            | Design::TwoMeansEquivalence => Family::TwoMeans,
            Design::KMeansTwoSided | Design::KMeansOneSided => Family::KMeans,
            Design::OneProportionTwoSided
            | Design::OneProportionOneSided
            | Design::OneProportionNonInferiority
            | Design::OneProportionEquivalence => Family::OneProportion,
            Design::TwoProportionsTwoSided
            | Design::TwoProportionsOneSided
            | Design::TwoProportionsNonInferiority
            | Design::TwoProportionsEquivalence => Family::TwoProportions,
            Design::KProportionsTwoSided | Design::KProportionsOneSided => Family::KProportions,
            Design::OddsRatioTwoSided
            | Design::OddsRatioOneSided
            | Design::OddsRatioNonInferiority
            | Design::OddsRatioEquivalence => Family::OddsRatio,
            Design::McNemarTwoSided | Design::McNemarOneSided => Family::McNemar,
            Design::CoxTwoSided
            | Design::CoxOneSided
            | Design::CoxNonInferiority
            | Design::CoxEquivalence => Family::CoxPh,
            Design::CaseSeries => Family::CaseSeries,
        }
    }

    #[must_use]
    pub fn hypothesis(self) -> Hypothesis {
        match self {
            Design::OneMeanTwoSided
            | Design::TwoMeansTwoSided
            | Design::KMeansTwoSided
            | Design::OneProportionTwoSided
            | Design::TwoProportionsTwoSided
            | Design::KProportionsTwoSided
            | Design::OddsRatioTwoSided
            | Design::McNemarTwoSided
            | Design::CoxTwoSided
            | Design::CaseSeries => Hypothesis::TwoSided,
            Design::OneMeanOneSided
            | Design::TwoMeansOneSided
            | Design::KMeansOneSided
            | Design::OneProportionOneSided
            | Design::TwoProportionsOneSided
            | Design::KProportionsOneSided
            | Design::OddsRatioOneSided
            | Design::McNemarOneSided
            | Design::CoxOneSided => Hypothesis::OneSided,
            Design::OneMeanNonInferiority
            | Design::TwoMeansNonInferiority
            | Design::OneProportionNonInferiority
            | Design::TwoProportionsNonInferiority
            | Design::OddsRatioNonInferiority
            | Design::CoxNonInferiority => Hypothesis::NonInferiority,
            Design::OneMeanEquivalence
            | Design::TwoMeansEquivalence
            | Design::OneProportionEquivalence
            | Design::TwoProportionsEquivalence
            | Design::OddsRatioEquivalence
            | Design::CoxEquivalence => Hypothesis::Equivalence,
        }
    }

    /// Display name, e.g. "Compare 2 Means: 1-Sided"
    #[must_use]
    pub fn name(self) -> String {
        format!("{}: {}", self.family().label(), self.hypothesis().label())
    }

    /// Whether the solved sample size refers to group A of a κ-allocated pair
    #[must_use]
    pub fn has_allocation_ratio(self) -> bool {
        matches!(
            self.family(),
            Family::TwoMeans | Family::TwoProportions | Family::OddsRatio
        )
    }
}

impl fmt::Display for Design {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a string does not name a known design
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDesignError(pub String);

impl fmt::Display for ParseDesignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown design '{}'", self.0)
    }
}

impl std::error::Error for ParseDesignError {}

impl FromStr for Design {
    type Err = ParseDesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Design::ALL
            .iter()
            .copied()
            .find(|d| d.id() == s)
            .ok_or_else(|| ParseDesignError(s.to_string()))
    }
}

impl TryFrom<String> for Design {
    type Error = ParseDesignError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Design> for String {
    fn from(design: Design) -> Self {
        design.id().to_string()
    }
}

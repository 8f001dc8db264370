use std::collections::BTreeMap;
use std::fmt;

use crate::model::{Design, Param};

/// Why a single parameter value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Required but absent or null
    Missing,
    /// Present but NaN or infinite
    NotFinite,
    /// Probability outside the open interval (0, 1)
    OutsideUnitInterval,
    /// Standard deviation, ratio or rate that is not strictly positive
    NotPositive,
    /// Comparison count below one
    BelowOne,
    /// Equivalence margin that is not strictly positive
    MarginNotPositive,
    /// Discordant pair probabilities summing above one
    DiscordantSumAboveOne,
    /// The effect size (formula denominator) is zero
    ZeroEffect,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Missing => write!(f, "is required"),
            ValidationError::NotFinite => write!(f, "must be a finite number"),
            ValidationError::OutsideUnitInterval => {
                write!(f, "must be between 0 and 1 (exclusive)")
            }
            ValidationError::NotPositive => write!(f, "must be greater than 0"),
            ValidationError::BelowOne => write!(f, "must be at least 1"),
            ValidationError::MarginNotPositive => {
                write!(f, "equivalence margin must be greater than 0")
            }
            ValidationError::DiscordantSumAboveOne => {
                write!(f, "p10 + p01 must not exceed 1")
            }
            ValidationError::ZeroEffect => write!(f, "effect size is zero (denominator is zero)"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validation failures keyed by parameter name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Param, ValidationError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; the first error reported for a parameter wins
    pub fn insert(&mut self, param: Param, error: ValidationError) {
        self.errors.entry(param).or_insert(error);
    }

    #[must_use]
    pub fn get(&self, param: Param) -> Option<ValidationError> {
        self.errors.get(&param).copied()
    }

    #[must_use]
    pub fn contains(&self, param: Param) -> bool {
        self.errors.contains_key(&param)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Param, ValidationError)> + '_ {
        self.errors.iter().map(|(p, e)| (*p, *e))
    }

    /// Human-readable messages keyed by parameter wire name
    #[must_use]
    pub fn messages(&self) -> BTreeMap<&'static str, String> {
        self.errors
            .iter()
            .map(|(param, error)| (param.name(), error.to_string()))
            .collect()
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (param, error)) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{param} {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Failure of a checked solve
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// One or more inputs violate their domain
    Invalid(ValidationErrors),
    /// Inputs are valid but no finite answer exists
    Undefined,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Invalid(errors) => write!(f, "invalid parameters: {errors}"),
            SolveError::Undefined => write!(f, "no finite solution exists for these parameters"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolveError::Invalid(e) => Some(e),
            SolveError::Undefined => None,
        }
    }
}

impl From<ValidationErrors> for SolveError {
    fn from(errors: ValidationErrors) -> Self {
        SolveError::Invalid(errors)
    }
}

/// Malformed sweep request
#[derive(Debug, Clone, PartialEq)]
pub enum CurveError {
    /// A bound is NaN or infinite
    NonFiniteBound { min: f64, max: f64 },
    /// `min` lies above `max`
    ReversedRange { min: f64, max: f64 },
    /// The swept parameter has no effect on the design's curve
    UnusedParameter { design: Design, parameter: Param },
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::NonFiniteBound { min, max } => {
                write!(f, "sweep bounds must be finite (min={min}, max={max})")
            }
            CurveError::ReversedRange { min, max } => {
                write!(f, "sweep minimum {min} is greater than maximum {max}")
            }
            CurveError::UnusedParameter { design, parameter } => {
                write!(f, "{design} does not use {parameter}; sweeping it leaves the curve flat")
            }
        }
    }
}

impl std::error::Error for CurveError {}

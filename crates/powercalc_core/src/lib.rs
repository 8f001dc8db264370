//! Statistical power and sample-size engine
//!
//! This crate solves closed-form power/sample-size problems for common
//! hypothesis-test designs and builds sensitivity curves over them.
//! It supports:
//! - Means: one sample, two independent groups, pairwise among k groups
//! - Proportions: one sample, two groups, pairwise among k groups, odds ratio
//! - Paired proportions (McNemar), Cox proportional hazards, self-controlled
//!   case series
//! - 2-sided, 1-sided, non-inferiority/superiority and equivalence hypotheses
//!
//! # Solving
//!
//! ```ignore
//! use powercalc_core::{solve, Design, Param, ParameterSet, SolveDirection};
//!
//! let params = ParameterSet::from([
//!     (Param::Alpha, 0.05),
//!     (Param::Power, 0.8),
//!     (Param::MeanA, 132.86),
//!     (Param::MeanB, 127.44),
//!     (Param::StdDevA, 15.34),
//!     (Param::StdDevB, 18.23),
//!     (Param::Kappa, 2.0),
//! ]);
//! let n = solve(Design::TwoMeansOneSided, SolveDirection::SampleSize, &params);
//! assert_eq!(n, Some(85.0));
//! ```
//!
//! Every operation is a pure function over borrowed inputs. `None` is the
//! single "no value" answer: invalid inputs, a zero effect and non-finite
//! results all end up there. Use [`validate`] or [`solve_checked`] to learn why.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod designs;
pub mod error;
pub mod solve;
pub mod stats;
pub mod validation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod format;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{Curve, CurveConfig, CurveMetric, SweepParameter, generate_curve, select_scenarios};
pub use error::{CurveError, SolveError, ValidationError, ValidationErrors};
pub use model::{Design, Param, ParameterSet, PlotPoint, PowerScenario, SolveDirection};
pub use solve::{GroupSizes, group_sizes, solve, solve_checked};
pub use validation::{is_valid, validate};

//! Sensitivity curves over one swept parameter.
//!
//! A curve is always [`CURVE_POINTS`] points, regenerated in full on every
//! call. Each point carries one value per [`PowerScenario`](crate::model::PowerScenario),
//! or `None` where the design has no answer (a break in the curve).
//!
//! ```ignore
//! use powercalc_core::analysis::{generate_curve, select_scenarios};
//! use powercalc_core::model::{Design, Param};
//!
//! let scenarios = select_scenarios(params.get(Param::Power));
//! let points = generate_curve(
//!     Design::TwoMeansOneSided,
//!     &params,
//!     Param::MeanA,
//!     120.0,
//!     140.0,
//!     &scenarios,
//! )?;
//! assert_eq!(points.len(), 100);
//! ```
//!
//! Power curves ([`CurveMetric::Power`]) hold each scenario's sample size,
//! solved once at the base parameters, fixed across the sweep.

mod config;
mod evaluator;
mod scenarios;

pub use config::*;
pub use evaluator::*;
pub use scenarios::*;

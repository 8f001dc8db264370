//! Command-line front end for the powercalc engine
//!
//! Solves sample size or power for one design, lists the available designs,
//! and prints or saves sensitivity curves. Inputs come from flags and from
//! YAML study files.

// ============================================================================
// Command modules
// ============================================================================

pub mod commands;
pub mod report;
pub mod study;

// ============================================================================
// Infrastructure modules
// ============================================================================

pub mod logging;
pub mod util;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use logging::init_logging;
pub use study::{CurveSpec, Study, parse_assignment};

//! Standard normal primitives shared by every design.

mod normal;

pub use normal::{cdf, pdf, quantile, upper_quantile};

//! Standard normal distribution: density, CDF and quantile function.
//!
//! The CDF and quantile are expressed through `statrs`' complementary error
//! function and its inverse, which keeps full double precision in both tails.

use std::f64::consts::{PI, SQRT_2};

use statrs::function::erf::{erfc, erfc_inv};

/// Standard normal density φ(z).
#[must_use]
pub fn pdf(z: f64) -> f64 {
    (-z * z / 2.0).exp() / (2.0 * PI).sqrt()
}

/// Standard normal CDF Φ(z).
///
/// Total over all finite inputs. `±∞` map to 1 and 0, NaN stays NaN.
#[must_use]
pub fn cdf(z: f64) -> f64 {
    0.5 * erfc(-z / SQRT_2)
}

/// Standard normal quantile Φ⁻¹(p).
///
/// Returns `None` when `p` is not strictly inside (0, 1).
#[must_use]
pub fn quantile(p: f64) -> Option<f64> {
    if !(p > 0.0 && p < 1.0) {
        return None;
    }
    let z = -SQRT_2 * erfc_inv(2.0 * p);
    z.is_finite().then_some(z)
}

/// Upper-tail critical value z_{1-p}, the form every test statistic uses.
#[inline]
#[must_use]
pub fn upper_quantile(p: f64) -> Option<f64> {
    if !(p > 0.0 && p < 1.0) {
        return None;
    }
    quantile(1.0 - p)
}

//! Standard normal CDF and the two-sided p-values built on it.
//!
//! The CDF uses the Abramowitz & Stegun 7.1.26 rational approximation of
//! [`erf`] (`p = 0.3275911`, coefficients `a1..a5`), accurate to ~1.5e-7.

use core::f64::consts::SQRT_2;

/// Two-sided critical value used for every 95% interval in this crate.
pub const Z_95: f64 = 1.96;

/// Error function via Abramowitz & Stegun 7.1.26 (max error ~1.5e-7).
pub fn erf(x: f64) -> f64 {
    const P: f64 = 0.3275911;
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + P * x);
    let poly = t * (A1 + t * (A2 + t * (A3 + t * (A4 + t * A5))));
    sign * (1.0 - poly * (-x * x).exp())
}

/// Standard normal CDF `Φ(z) = (1 + erf(z / √2)) / 2`.
#[inline]
pub fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / SQRT_2))
}

/// Two-sided p-value for a standard normal test statistic:
/// `2 * (1 - Φ(|z|))`.
///
/// Infinite `z` yields 0; NaN propagates.
pub fn two_sided_p(z: f64) -> f64 {
    2.0 * (1.0 - normal_cdf(z.abs()))
}

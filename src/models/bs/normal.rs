//! Standard normal density and cumulative distribution helpers.
//!
//! The cumulative distribution is the classic five-term polynomial
//! approximation (Abramowitz & Stegun 26.2.17) with an absolute error of
//! roughly 7.5e-8. Prices and Greeks are quoted against this approximation,
//! so it stays the default. [`CdfMethod::Erf`] swaps in an erf-based CDF for
//! callers that want more precision and accept different last digits.

use serde::{Deserialize, Serialize};

const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

const K_SCALE: f64 = 0.231_641_9;
const A1: f64 = 0.319_381_530;
const A2: f64 = -0.356_563_782;
const A3: f64 = 1.781_477_937;
const A4: f64 = -1.821_255_978;
const A5: f64 = 1.330_274_429;

/// Standard normal probability density at `x`.
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Polynomial approximation to the standard normal CDF.
///
/// Negative arguments are reflected once onto the positive half-line:
/// `N(x) = 1 - N(-x)`.
pub fn norm_cdf(x: f64) -> f64 {
    if x < 0.0 {
        return 1.0 - norm_cdf_upper(-x);
    }
    norm_cdf_upper(x)
}

// Valid for x >= 0 (and NaN, which falls through untouched).
#[inline]
fn norm_cdf_upper(x: f64) -> f64 {
    let k = 1.0 / (1.0 + K_SCALE * x);
    let k_sum = k * (A1 + k * (A2 + k * (A3 + k * (A4 + A5 * k))));
    1.0 - norm_pdf(x) * k_sum
}

/// Standard normal CDF via the error function: `0.5 * (1 + erf(x / sqrt(2)))`.
#[inline]
pub fn norm_cdf_erf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / std::f64::consts::SQRT_2))
}

/// Which cumulative normal the pricing kernel evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CdfMethod {
    /// Five-term polynomial approximation, the reference behaviour.
    #[default]
    Polynomial,
    /// Error-function based CDF from `libm`.
    Erf,
}

impl CdfMethod {
    #[inline]
    pub fn cdf(self, x: f64) -> f64 {
        match self {
            CdfMethod::Polynomial => norm_cdf(x),
            CdfMethod::Erf => norm_cdf_erf(x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_peak_and_symmetry() {
        assert!((norm_pdf(0.0) - INV_SQRT_2PI).abs() < 1e-15);
        for &x in &[0.1, 0.5, 1.0, 2.5, 7.0] {
            assert_eq!(norm_pdf(x), norm_pdf(-x));
        }
    }

    #[test]
    fn test_cdf_at_zero() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-6);
        assert!((norm_cdf_erf(0.0) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_cdf_reflection() {
        for &x in &[0.01, 0.35, 1.0, 1.96, 3.0, 6.0] {
            assert!((norm_cdf(x) + norm_cdf(-x) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_cdf_known_quantiles() {
        // N(1.96) ~ 0.975, N(-1) ~ 0.158655
        assert!((norm_cdf(1.96) - 0.975_002_1).abs() < 1e-6);
        assert!((norm_cdf(-1.0) - 0.158_655_25).abs() < 1e-6);
    }

    #[test]
    fn test_cdf_tails_saturate() {
        assert!(norm_cdf(40.0) == 1.0);
        assert!(norm_cdf(-40.0).abs() < 1e-300);
        assert!(norm_cdf(f64::NAN).is_nan());
    }

    #[test]
    fn test_methods_agree_closely() {
        for i in -60..=60 {
            let x = i as f64 * 0.1;
            let diff = CdfMethod::Polynomial.cdf(x) - CdfMethod::Erf.cdf(x);
            assert!(diff.abs() < 1e-6, "x={x} diff={diff}");
        }
    }
}

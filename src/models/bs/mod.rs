// Closed-form Black-Scholes pricing for European vanilla options with a
// continuous dividend yield. The free functions evaluate the reference kernel
// (polynomial CDF, reference theta grouping); `BlackScholes` carries the
// configurable variant used by the pricing pipeline.
//
// Nothing here validates inputs. Zero or negative volatility/maturity and
// non-positive spot/strike produce NaN or infinities per IEEE-754.

pub mod greeks;
pub mod normal;

pub use greeks::*;
pub use normal::{norm_cdf, norm_cdf_erf, norm_pdf, CdfMethod};

/// Standardised drift term `d_j` for `j` in `{1, 2}`. Any other `j` is
/// treated by parity only (odd like `d1`, even like `d2`).
///
/// ```text
/// d_j = (ln(S/K) + ((r - div) + (-1)^(j-1) * v²/2) * T) / (v * sqrt(T))
/// ```
#[allow(non_snake_case)]
pub fn d_j(j: i32, S: f64, K: f64, r: f64, v: f64, T: f64, div: f64) -> f64 {
    let sign = if j & 1 == 1 { 1.0 } else { -1.0 };
    ((S / K).ln() + ((r - div) + sign * 0.5 * v * v) * T) / (v * T.sqrt())
}

/// Strike discount factor `e^(-(r - div) T)` shared by prices, theta and rho.
#[inline]
#[allow(non_snake_case)]
pub(crate) fn carry_discount(r: f64, T: f64, div: f64) -> f64 {
    (-(r - div) * T).exp()
}

/// Price of a European call under the reference kernel.
#[allow(non_snake_case)]
pub fn call_price(S: f64, K: f64, r: f64, v: f64, T: f64, div: f64) -> f64 {
    BlackScholes::REFERENCE.call_price(S, K, r, v, T, div)
}

/// Price of a European put under the reference kernel.
#[allow(non_snake_case)]
pub fn put_price(S: f64, K: f64, r: f64, v: f64, T: f64, div: f64) -> f64 {
    BlackScholes::REFERENCE.put_price(S, K, r, v, T, div)
}

/// Pricing kernel: which normal CDF to use and how to group the theta decay
/// term. Greeks live in [`greeks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlackScholes {
    pub cdf: CdfMethod,
    pub theta: ThetaConvention,
}

impl BlackScholes {
    /// Polynomial CDF with the reference theta grouping.
    pub const REFERENCE: Self = Self {
        cdf: CdfMethod::Polynomial,
        theta: ThetaConvention::Reference,
    };

    pub fn new(cdf: CdfMethod, theta: ThetaConvention) -> Self {
        Self { cdf, theta }
    }

    #[inline]
    pub fn n(&self, x: f64) -> f64 {
        self.cdf.cdf(x)
    }

    /// `S·N(d1) − K·e^(−(r−div)T)·N(d2)`
    #[allow(non_snake_case)]
    pub fn call_price(&self, S: f64, K: f64, r: f64, v: f64, T: f64, div: f64) -> f64 {
        let d1 = d_j(1, S, K, r, v, T, div);
        let d2 = d_j(2, S, K, r, v, T, div);
        S * self.n(d1) - K * carry_discount(r, T, div) * self.n(d2)
    }

    /// `−S·N(−d1) + K·e^(−(r−div)T)·N(−d2)`
    #[allow(non_snake_case)]
    pub fn put_price(&self, S: f64, K: f64, r: f64, v: f64, T: f64, div: f64) -> f64 {
        let d1 = d_j(1, S, K, r, v, T, div);
        let d2 = d_j(2, S, K, r, v, T, div);
        -S * self.n(-d1) + K * carry_discount(r, T, div) * self.n(-d2)
    }
}

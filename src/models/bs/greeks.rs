//! First-order Black-Scholes sensitivities.
//!
//! Every Greek is derived from the same `d1`/`d2` terms as the prices. Gamma
//! and vega do not depend on the option type.
//!
//! # Theta grouping
//!
//! The reference decay term is evaluated left to right as
//! `(S·pdf(d1)·v) / 2 · sqrt(T)`, i.e. the division by two happens before the
//! multiplication by `sqrt(T)`. The textbook term is `S·pdf(d1)·v / (2·sqrt(T))`.
//! The two agree only at `T = 1`. Reference outputs use the former, so it is
//! the default; [`ThetaConvention::Textbook`] opts into the latter.

use serde::{Deserialize, Serialize};

use super::{carry_discount, d_j, norm_pdf, BlackScholes};

/// How the volatility-decay part of theta is grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThetaConvention {
    /// `(S·pdf(d1)·v) / 2 · sqrt(T)`
    #[default]
    Reference,
    /// `(S·pdf(d1)·v) / (2 · sqrt(T))`
    Textbook,
}

impl ThetaConvention {
    #[allow(non_snake_case)]
    fn decay(self, S: f64, pdf_d1: f64, v: f64, T: f64) -> f64 {
        match self {
            ThetaConvention::Reference => (S * pdf_d1 * v) / 2.0 * T.sqrt(),
            ThetaConvention::Textbook => (S * pdf_d1 * v) / (2.0 * T.sqrt()),
        }
    }
}

#[allow(non_snake_case)]
impl BlackScholes {
    /// `N(d1)`
    pub fn call_delta(&self, S: f64, K: f64, r: f64, v: f64, T: f64, div: f64) -> f64 {
        self.n(d_j(1, S, K, r, v, T, div))
    }

    /// `N(d1) − 1`
    pub fn put_delta(&self, S: f64, K: f64, r: f64, v: f64, T: f64, div: f64) -> f64 {
        self.n(d_j(1, S, K, r, v, T, div)) - 1.0
    }

    /// `pdf(d1) / (S·v·sqrt(T))`
    pub fn gamma(&self, S: f64, K: f64, r: f64, v: f64, T: f64, div: f64) -> f64 {
        norm_pdf(d_j(1, S, K, r, v, T, div)) / (S * v * T.sqrt())
    }

    /// `S·pdf(d1)·sqrt(T)`
    pub fn vega(&self, S: f64, K: f64, r: f64, v: f64, T: f64, div: f64) -> f64 {
        S * norm_pdf(d_j(1, S, K, r, v, T, div)) * T.sqrt()
    }

    pub fn call_theta(&self, S: f64, K: f64, r: f64, v: f64, T: f64, div: f64) -> f64 {
        let pdf_d1 = norm_pdf(d_j(1, S, K, r, v, T, div));
        let d2 = d_j(2, S, K, r, v, T, div);
        -self.theta.decay(S, pdf_d1, v, T) - (r - div) * K * carry_discount(r, T, div) * self.n(d2)
    }

    pub fn put_theta(&self, S: f64, K: f64, r: f64, v: f64, T: f64, div: f64) -> f64 {
        let pdf_d1 = norm_pdf(d_j(1, S, K, r, v, T, div));
        let d2 = d_j(2, S, K, r, v, T, div);
        -self.theta.decay(S, pdf_d1, v, T) + (r - div) * K * carry_discount(r, T, div) * self.n(-d2)
    }

    /// `K·T·e^(−(r−div)T)·N(d2)`
    pub fn call_rho(&self, S: f64, K: f64, r: f64, v: f64, T: f64, div: f64) -> f64 {
        K * T * carry_discount(r, T, div) * self.n(d_j(2, S, K, r, v, T, div))
    }

    /// `−K·T·e^(−(r−div)T)·N(−d2)`
    pub fn put_rho(&self, S: f64, K: f64, r: f64, v: f64, T: f64, div: f64) -> f64 {
        -K * T * carry_discount(r, T, div) * self.n(-d_j(2, S, K, r, v, T, div))
    }
}

#[allow(non_snake_case)]
pub fn call_delta(S: f64, K: f64, r: f64, v: f64, T: f64, div: f64) -> f64 {
    BlackScholes::REFERENCE.call_delta(S, K, r, v, T, div)
}

#[allow(non_snake_case)]
pub fn put_delta(S: f64, K: f64, r: f64, v: f64, T: f64, div: f64) -> f64 {
    BlackScholes::REFERENCE.put_delta(S, K, r, v, T, div)
}

/// Gamma, identical for calls and puts.
#[allow(non_snake_case)]
pub fn gamma(S: f64, K: f64, r: f64, v: f64, T: f64, div: f64) -> f64 {
    BlackScholes::REFERENCE.gamma(S, K, r, v, T, div)
}

/// Vega per unit of volatility, identical for calls and puts.
#[allow(non_snake_case)]
pub fn vega(S: f64, K: f64, r: f64, v: f64, T: f64, div: f64) -> f64 {
    BlackScholes::REFERENCE.vega(S, K, r, v, T, div)
}

/// Annualised call theta with the reference decay grouping.
#[allow(non_snake_case)]
pub fn call_theta(S: f64, K: f64, r: f64, v: f64, T: f64, div: f64) -> f64 {
    BlackScholes::REFERENCE.call_theta(S, K, r, v, T, div)
}

/// Annualised put theta with the reference decay grouping.
#[allow(non_snake_case)]
pub fn put_theta(S: f64, K: f64, r: f64, v: f64, T: f64, div: f64) -> f64 {
    BlackScholes::REFERENCE.put_theta(S, K, r, v, T, div)
}

#[allow(non_snake_case)]
pub fn call_rho(S: f64, K: f64, r: f64, v: f64, T: f64, div: f64) -> f64 {
    BlackScholes::REFERENCE.call_rho(S, K, r, v, T, div)
}

#[allow(non_snake_case)]
pub fn put_rho(S: f64, K: f64, r: f64, v: f64, T: f64, div: f64) -> f64 {
    BlackScholes::REFERENCE.put_rho(S, K, r, v, T, div)
}

#[cfg(test)]
mod tests {
    use super::*;

    const S: f64 = 100.0;
    const K: f64 = 100.0;
    const R: f64 = 0.05;
    const V: f64 = 0.2;
    const T: f64 = 1.0;
    const DIV: f64 = 0.0;

    #[test]
    fn test_reference_scenario_greeks() {
        assert!((call_delta(S, K, R, V, T, DIV) - 0.6368).abs() < 1e-4);
        assert!((gamma(S, K, R, V, T, DIV) - 0.01876).abs() < 1e-5);
        assert!((vega(S, K, R, V, T, DIV) - 37.52).abs() < 1e-2);
    }

    #[test]
    fn test_delta_spread_is_exactly_one() {
        let spread = call_delta(S, K, R, V, T, DIV) - put_delta(S, K, R, V, T, DIV);
        assert_eq!(spread, 1.0);
    }

    #[test]
    fn test_theta_conventions_agree_at_unit_maturity() {
        let textbook = BlackScholes::new(Default::default(), ThetaConvention::Textbook);
        let a = call_theta(S, K, R, V, T, DIV);
        let b = textbook.call_theta(S, K, R, V, T, DIV);
        assert!((a - b).abs() < 1e-12);
        // Textbook ATM call theta for this scenario is about -6.414
        assert!((a + 6.414).abs() < 1e-3, "theta = {a}");
    }

    #[test]
    fn test_theta_reference_grouping() {
        let t = 0.25;
        let pdf_d1 = norm_pdf(d_j(1, S, K, R, V, t, DIV));
        let reference_decay = (S * pdf_d1 * V) / 2.0 * t.sqrt();
        let textbook_decay = (S * pdf_d1 * V) / (2.0 * t.sqrt());
        assert!((reference_decay - textbook_decay * t).abs() < 1e-12);

        let textbook = BlackScholes::new(Default::default(), ThetaConvention::Textbook);
        let diff = call_theta(S, K, R, V, t, DIV) - textbook.call_theta(S, K, R, V, t, DIV);
        assert!((diff - (textbook_decay - reference_decay)).abs() < 1e-10);
    }

    #[test]
    fn test_rho_signs() {
        assert!(call_rho(S, K, R, V, T, DIV) > 0.0);
        assert!(put_rho(S, K, R, V, T, DIV) < 0.0);
        // ATM call rho for this scenario is about 53.23
        assert!((call_rho(S, K, R, V, T, DIV) - 53.23).abs() < 1e-2);
    }

    #[test]
    fn test_reference_scenario_put_theta_and_rho() {
        // -S·pdf(0.35)·v/2 + r·K·e^(-r)·N(-0.15)
        assert!((put_theta(S, K, R, V, T, DIV) + 1.6579).abs() < 1e-4);
        // -K·e^(-r)·N(-0.15)
        assert!((put_rho(S, K, R, V, T, DIV) + 41.8905).abs() < 1e-4);
    }

    #[test]
    fn test_put_theta_and_rho_short_maturity_with_dividend() {
        let (s, k, r, v, t, div) = (100.0, 110.0, 0.05, 0.3, 0.25, 0.02);
        assert!((put_theta(s, k, r, v, t, div) + 0.184878).abs() < 1e-4);
        assert!((put_rho(s, k, r, v, t, div) + 20.348115).abs() < 1e-4);
        assert!((call_theta(s, k, r, v, t, div) + 3.460220).abs() < 1e-4);
    }
}

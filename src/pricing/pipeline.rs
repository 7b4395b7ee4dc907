//! Request validation and pricing.
//!
//! A request first passes the input guard (and, in strict mode, the domain
//! check), then the configured kernel computes the fair value and Greeks for
//! the requested side. Gamma and vega are evaluated once for either side.

use tracing::{debug, warn};

use crate::error::{PricingError, ALL_ZERO_MESSAGE};
use crate::models::bs::{carry_discount, d_j};
use crate::pricing::config::PricerConfig;
use crate::pricing::types::{MarketParameters, OptionType, PricingRequest, PricingResult};

/// Reject requests the closed form cannot sensibly price.
///
/// Volatility, rate and dividend yield may not all be zero. With
/// `strict_domain` on, spot, strike, volatility and maturity must also be
/// finite and strictly positive, and rate and dividend yield finite.
pub fn validate_request(
    params: &MarketParameters,
    config: &PricerConfig,
) -> Result<(), PricingError> {
    if params.volatility == 0.0 && params.risk_free_rate == 0.0 && params.dividend_yield == 0.0 {
        return Err(PricingError::invalid_input(ALL_ZERO_MESSAGE));
    }

    if config.strict_domain {
        for (field, value) in params.positive_fields() {
            if !value.is_finite() || value <= 0.0 {
                return Err(PricingError::Domain { field, value });
            }
        }
        for (field, value) in [
            ("risk_free_rate", params.risk_free_rate),
            ("dividend_yield", params.dividend_yield),
        ] {
            if !value.is_finite() {
                return Err(PricingError::Domain { field, value });
            }
        }
    }

    Ok(())
}

/// Validate and price one request.
pub fn price_request(
    request: &PricingRequest,
    config: &PricerConfig,
) -> Result<PricingResult, PricingError> {
    let p = &request.params;
    if let Err(err) = validate_request(p, config) {
        warn!(option_type = %request.option_type, error = %err, "pricing request rejected");
        return Err(err);
    }

    let bs = config.kernel();
    let (s, k, r, v, t, div) = (
        p.spot,
        p.strike,
        p.risk_free_rate,
        p.volatility,
        p.time_to_maturity,
        p.dividend_yield,
    );

    log_breakdown(request, config);

    let gamma = bs.gamma(s, k, r, v, t, div);
    let vega = bs.vega(s, k, r, v, t, div);

    let result = match request.option_type {
        OptionType::Call => PricingResult {
            option_type: OptionType::Call,
            fair_value: bs.call_price(s, k, r, v, t, div),
            delta: bs.call_delta(s, k, r, v, t, div),
            gamma,
            vega,
            theta: bs.call_theta(s, k, r, v, t, div),
            rho: bs.call_rho(s, k, r, v, t, div),
        },
        OptionType::Put => PricingResult {
            option_type: OptionType::Put,
            fair_value: bs.put_price(s, k, r, v, t, div),
            delta: bs.put_delta(s, k, r, v, t, div),
            gamma,
            vega,
            theta: bs.put_theta(s, k, r, v, t, div),
            rho: bs.put_rho(s, k, r, v, t, div),
        },
    };

    debug!(
        status = result.status(),
        fair_value = result.fair_value,
        delta = result.delta,
        gamma = result.gamma,
        vega = result.vega,
        theta = result.theta,
        rho = result.rho,
        "priced"
    );
    if !result.fair_value.is_finite() {
        warn!(fair_value = result.fair_value, "non-finite fair value");
    }

    Ok(result)
}

// Inputs and the intermediate terms of the price formula.
fn log_breakdown(request: &PricingRequest, config: &PricerConfig) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    let p = &request.params;
    let bs = config.kernel();
    let d1 = d_j(
        1,
        p.spot,
        p.strike,
        p.risk_free_rate,
        p.volatility,
        p.time_to_maturity,
        p.dividend_yield,
    );
    let d2 = d_j(
        2,
        p.spot,
        p.strike,
        p.risk_free_rate,
        p.volatility,
        p.time_to_maturity,
        p.dividend_yield,
    );
    let discounted_strike =
        p.strike * carry_discount(p.risk_free_rate, p.time_to_maturity, p.dividend_yield);

    debug!(
        option_type = %request.option_type,
        s = p.spot,
        k = p.strike,
        r = p.risk_free_rate,
        v = p.volatility,
        t = p.time_to_maturity,
        div = p.dividend_yield,
        "inputs"
    );
    match request.option_type {
        OptionType::Call => debug!(
            d1,
            n_d1 = bs.n(d1),
            discounted_strike,
            d2,
            n_d2 = bs.n(d2),
            "call breakdown"
        ),
        OptionType::Put => debug!(
            d1,
            n_minus_d1 = bs.n(-d1),
            discounted_strike,
            d2,
            n_minus_d2 = bs.n(-d2),
            "put breakdown"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atm() -> MarketParameters {
        MarketParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 0.0)
    }

    #[test]
    fn test_all_zero_guard() {
        let p = MarketParameters::new(100.0, 100.0, 0.0, 0.0, 1.0, 0.0);
        let err = price_request(&PricingRequest::call(p), &PricerConfig::reference()).unwrap_err();
        assert_eq!(err, PricingError::invalid_input(ALL_ZERO_MESSAGE));
    }

    #[test]
    fn test_single_nonzero_passes_guard() {
        let p = MarketParameters::new(100.0, 100.0, 0.0, 0.0, 1.0, 0.01);
        assert!(validate_request(&p, &PricerConfig::reference()).is_ok());
    }

    #[test]
    fn test_strict_rejects_zero_vol() {
        let p = MarketParameters::new(100.0, 100.0, 0.05, 0.0, 1.0, 0.0);
        assert!(validate_request(&p, &PricerConfig::reference()).is_ok());
        let err = validate_request(&p, &PricerConfig::strict()).unwrap_err();
        assert_eq!(
            err,
            PricingError::Domain {
                field: "volatility",
                value: 0.0
            }
        );
    }

    #[test]
    fn test_strict_rejects_non_finite_rate() {
        let p = MarketParameters::new(100.0, 100.0, f64::NAN, 0.2, 1.0, 0.0);
        let err = validate_request(&p, &PricerConfig::strict()).unwrap_err();
        assert!(matches!(
            err,
            PricingError::Domain {
                field: "risk_free_rate",
                ..
            }
        ));
    }

    #[test]
    fn test_lenient_mode_propagates_nan() {
        let p = MarketParameters::new(100.0, 100.0, 0.05, 0.2, 0.0, 0.0);
        let result = price_request(&PricingRequest::put(p), &PricerConfig::reference()).unwrap();
        assert!(result.fair_value.is_nan());
    }

    #[test]
    fn test_call_and_put_share_gamma_vega() {
        let config = PricerConfig::reference();
        let call = price_request(&PricingRequest::call(atm()), &config).unwrap();
        let put = price_request(&PricingRequest::put(atm()), &config).unwrap();
        assert_eq!(call.gamma, put.gamma);
        assert_eq!(call.vega, put.vega);
        assert_eq!(call.status(), "Call Calculated");
        assert_eq!(put.status(), "Put Calculated");
    }
}

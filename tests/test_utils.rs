#![allow(dead_code)]

use bs_pricer::{MarketParameters, OptionType, PricingRequest};

/// S=100, K=100, r=5%, v=20%, T=1y, no dividend
pub fn reference_params() -> MarketParameters {
    MarketParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 0.0)
}

/// A spread of strikes, maturities and carry around a spot of 100
pub fn scenario_grid() -> Vec<MarketParameters> {
    let mut grid = Vec::new();
    for &strike in &[70.0, 90.0, 100.0, 110.0, 140.0] {
        for &t in &[0.05, 0.5, 1.0, 3.0] {
            for &(r, div) in &[(0.05, 0.0), (0.02, 0.03), (-0.005, 0.0)] {
                for &v in &[0.1, 0.35] {
                    grid.push(MarketParameters::new(100.0, strike, r, v, t, div));
                }
            }
        }
    }
    grid
}

pub fn request(params: MarketParameters, option_type: OptionType) -> PricingRequest {
    PricingRequest::new(params, option_type)
}

/// Unpack into the positional argument order of the formula functions
pub fn args(p: &MarketParameters) -> (f64, f64, f64, f64, f64, f64) {
    (
        p.spot,
        p.strike,
        p.risk_free_rate,
        p.volatility,
        p.time_to_maturity,
        p.dividend_yield,
    )
}

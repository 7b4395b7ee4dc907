//! # bs-pricer: Black-Scholes Pricing and Greeks for European Vanilla Options
//!
//! `bs-pricer` computes the closed-form Black-Scholes fair value and the
//! first-order sensitivities (delta, gamma, vega, theta, rho) of European
//! calls and puts on an underlying paying a continuous dividend yield.
//!
//! ## Core Features
//!
//! - **Reference formulas**: free functions such as [`call_price`] and
//!   [`gamma`] taking `(S, K, r, v, T, div)`
//! - **Configurable kernel**: [`BlackScholes`] selects the normal CDF and the
//!   theta grouping
//! - **Request boundary**: [`price_option`] validates a [`PricingRequest`] and
//!   returns a [`PricingResult`] with a status line
//! - **Display conventions**: [`PricingResult::displayed`] rescales Greeks into
//!   the units traders usually quote
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_pricer::{default_configs, price_option, MarketParameters, PricingRequest};
//!
//! // S=100, K=100, r=5%, v=20%, T=1y, no dividend
//! let params = MarketParameters::from_percent(100.0, 100.0, 5.0, 20.0, 1.0, 0.0);
//! let result = price_option(&PricingRequest::call(params), &default_configs::reference())?;
//!
//! assert!((result.fair_value - 10.4506).abs() < 1e-4);
//! assert_eq!(result.status(), "Call Calculated");
//! # Ok::<(), bs_pricer::PricingError>(())
//! ```
//!
//! ## Numerical Notes
//!
//! The normal CDF is the five-term polynomial approximation (error ~1e-7).
//! Theta keeps the reference left-to-right grouping `(S·pdf(d1)·v)/2·√T` by
//! default; see [`ThetaConvention`]. Inputs outside the formula's domain yield
//! NaN or infinities unless strict validation is switched on in
//! [`PricerConfig`].

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod models;
pub mod pricing;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::PricingError;

// Reference formulas and the configurable kernel
pub use models::bs::{
    call_delta, call_price, call_rho, call_theta, d_j, gamma, norm_cdf, norm_cdf_erf, norm_pdf,
    put_delta, put_price, put_rho, put_theta, vega, BlackScholes, CdfMethod, ThetaConvention,
};

// Request/response types and configuration
pub use pricing::{
    config::{DisplayConventions, PricerConfig},
    pipeline::validate_request,
    types::{DisplayedResult, MarketParameters, OptionType, PricingRequest, PricingResult},
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured pricer settings.
///
/// - [`reference()`]: reference formulas, NaN propagates for degenerate inputs
/// - [`strict()`]: reference formulas, degenerate inputs are rejected
/// - [`textbook()`]: erf-based CDF and textbook theta, strict validation
pub mod default_configs {
    use crate::pricing::config::PricerConfig;

    /// Reference outputs.
    ///
    /// **Characteristics:**
    /// - Polynomial normal CDF
    /// - Theta decay grouped as `(S·pdf(d1)·v)/2·√T`
    /// - No domain checks beyond the all-zero guard
    ///
    /// # Example
    ///
    /// ```rust
    /// use bs_pricer::default_configs;
    ///
    /// let config = default_configs::reference();
    /// assert!(!config.strict_domain);
    /// ```
    pub fn reference() -> PricerConfig {
        PricerConfig::reference()
    }

    /// Reference formulas with domain validation, for callers that would
    /// rather see an error than a NaN.
    pub fn strict() -> PricerConfig {
        PricerConfig::strict()
    }

    /// Erf-based CDF with the textbook theta term. Outputs differ from the
    /// reference in the last digits (CDF) and in theta whenever `T != 1`.
    pub fn textbook() -> PricerConfig {
        PricerConfig::textbook()
    }
}

/// Price one European option request.
///
/// The request is rejected with [`PricingError::InvalidInput`] when
/// volatility, risk-free rate and dividend yield are all zero. When
/// `config.strict_domain` is set, non-positive or non-finite spot, strike,
/// volatility or maturity yield [`PricingError::Domain`]; otherwise such
/// inputs produce non-finite outputs.
///
/// # Example
///
/// ```rust
/// use bs_pricer::{price_option, MarketParameters, OptionType, PricerConfig, PricingRequest};
///
/// let params = MarketParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 0.0);
/// let request = PricingRequest::new(params, "put".parse::<OptionType>()?);
/// let result = price_option(&request, &PricerConfig::default())?;
///
/// assert!((result.fair_value - 5.5735).abs() < 1e-4);
/// println!("{}", result.displayed(&PricerConfig::default().display));
/// # Ok::<(), bs_pricer::PricingError>(())
/// ```
pub fn price_option(
    request: &PricingRequest,
    config: &PricerConfig,
) -> Result<PricingResult, PricingError> {
    pricing::pipeline::price_request(request, config)
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PricingError;
use crate::pricing::config::DisplayConventions;

/// Option type: call or put
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Status line reported once a request of this type has been priced.
    pub fn status(self) -> &'static str {
        match self {
            OptionType::Call => "Call Calculated",
            OptionType::Put => "Put Calculated",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => f.write_str("Call"),
            OptionType::Put => f.write_str("Put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(PricingError::invalid_input(format!(
                "Invalid option type: {other}"
            ))),
        }
    }
}

/// Market inputs for one pricing request. Rates and volatility are decimals
/// (0.05 for 5%), maturity is in years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketParameters {
    /// Underlying price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Continuously compounded risk-free rate (r)
    pub risk_free_rate: f64,
    /// Annualised volatility (v)
    pub volatility: f64,
    /// Time to maturity in years (T)
    pub time_to_maturity: f64,
    /// Continuous dividend yield (div)
    #[serde(default)]
    pub dividend_yield: f64,
}

impl MarketParameters {
    pub fn new(
        spot: f64,
        strike: f64,
        risk_free_rate: f64,
        volatility: f64,
        time_to_maturity: f64,
        dividend_yield: f64,
    ) -> Self {
        Self {
            spot,
            strike,
            risk_free_rate,
            volatility,
            time_to_maturity,
            dividend_yield,
        }
    }

    /// Build from percentage-quoted rate, volatility and dividend yield
    /// (5.0 for 5%), the way they are typically entered by hand.
    pub fn from_percent(
        spot: f64,
        strike: f64,
        rate_pct: f64,
        vol_pct: f64,
        time_to_maturity: f64,
        div_pct: f64,
    ) -> Self {
        Self::new(
            spot,
            strike,
            rate_pct / 100.0,
            vol_pct / 100.0,
            time_to_maturity,
            div_pct / 100.0,
        )
    }

    /// Fields that must be strictly positive for the closed form to be defined.
    pub(crate) fn positive_fields(&self) -> [(&'static str, f64); 4] {
        [
            ("spot", self.spot),
            ("strike", self.strike),
            ("volatility", self.volatility),
            ("time_to_maturity", self.time_to_maturity),
        ]
    }
}

/// A single pricing request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingRequest {
    pub params: MarketParameters,
    pub option_type: OptionType,
}

impl PricingRequest {
    pub fn new(params: MarketParameters, option_type: OptionType) -> Self {
        Self {
            params,
            option_type,
        }
    }

    pub fn call(params: MarketParameters) -> Self {
        Self::new(params, OptionType::Call)
    }

    pub fn put(params: MarketParameters) -> Self {
        Self::new(params, OptionType::Put)
    }
}

/// Raw fair value and Greeks for one request.
///
/// Theta is per year, vega per unit of volatility and rho per unit of rate.
/// See [`PricingResult::displayed`] for quoting conventions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub option_type: OptionType,
    pub fair_value: f64,
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
    pub rho: f64,
}

impl PricingResult {
    /// `"Call Calculated"` or `"Put Calculated"`
    pub fn status(&self) -> &'static str {
        self.option_type.status()
    }

    /// Rescale the Greeks into display units.
    pub fn displayed(&self, conventions: &DisplayConventions) -> DisplayedResult {
        DisplayedResult {
            fair_value: self.fair_value,
            delta: self.delta * conventions.delta_multiplier,
            gamma: self.gamma * conventions.gamma_multiplier,
            vega: self.vega / conventions.vega_divisor,
            theta: self.theta / conventions.theta_days_per_year,
            rho: self.rho / conventions.rho_divisor,
            status: self.status().to_string(),
        }
    }
}

/// Fair value and Greeks in presentation units, plus the status line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayedResult {
    pub fair_value: f64,
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
    pub rho: f64,
    pub status: String,
}

impl fmt::Display for DisplayedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fair:   {}", self.fair_value)?;
        writeln!(f, "Delta:  {}", self.delta)?;
        writeln!(f, "Gamma:  {}", self.gamma)?;
        writeln!(f, "Vega:   {}", self.vega)?;
        writeln!(f, "Theta:  {}", self.theta)?;
        writeln!(f, "Rho:    {}", self.rho)?;
        write!(f, "Status: {}", self.status)
    }
}

use serde::Deserialize;
use std::path::Path;

use crate::error::PricingError;
use crate::models::bs::{BlackScholes, CdfMethod, ThetaConvention};

/// Unit conventions applied when Greeks are shown to a user.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DisplayConventions {
    /// Delta is shown per 100 units of underlying
    #[serde(default = "default_hundred")]
    pub delta_multiplier: f64,
    /// Gamma is shown per 100 units of underlying
    #[serde(default = "default_hundred")]
    pub gamma_multiplier: f64,
    /// Vega per one volatility point
    #[serde(default = "default_hundred")]
    pub vega_divisor: f64,
    /// Theta per calendar day
    #[serde(default = "default_days_per_year")]
    pub theta_days_per_year: f64,
    /// Rho per one rate point
    #[serde(default = "default_hundred")]
    pub rho_divisor: f64,
}

impl Default for DisplayConventions {
    fn default() -> Self {
        Self {
            delta_multiplier: default_hundred(),
            gamma_multiplier: default_hundred(),
            vega_divisor: default_hundred(),
            theta_days_per_year: default_days_per_year(),
            rho_divisor: default_hundred(),
        }
    }
}

impl DisplayConventions {
    /// No rescaling at all.
    pub fn raw() -> Self {
        Self {
            delta_multiplier: 1.0,
            gamma_multiplier: 1.0,
            vega_divisor: 1.0,
            theta_days_per_year: 1.0,
            rho_divisor: 1.0,
        }
    }
}

/// Main configuration struct for request pricing
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PricerConfig {
    /// Cumulative normal used by the kernel
    #[serde(default)]
    pub cdf: CdfMethod,

    /// Grouping of the theta decay term
    #[serde(default)]
    pub theta: ThetaConvention,

    /// Reject non-positive or non-finite spot, strike, volatility and maturity
    /// instead of letting NaN propagate
    #[serde(default)]
    pub strict_domain: bool,

    #[serde(default)]
    pub display: DisplayConventions,
}

impl Default for PricerConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl PricerConfig {
    /// Polynomial CDF, reference theta grouping, silent NaN propagation.
    pub fn reference() -> Self {
        Self {
            cdf: CdfMethod::Polynomial,
            theta: ThetaConvention::Reference,
            strict_domain: false,
            display: DisplayConventions::default(),
        }
    }

    /// Reference formulas with strict domain validation.
    pub fn strict() -> Self {
        Self {
            strict_domain: true,
            ..Self::reference()
        }
    }

    /// Erf-based CDF and textbook theta, with strict validation.
    pub fn textbook() -> Self {
        Self {
            cdf: CdfMethod::Erf,
            theta: ThetaConvention::Textbook,
            strict_domain: true,
            display: DisplayConventions::default(),
        }
    }

    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, PricingError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PricingError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// The kernel this configuration selects.
    pub fn kernel(&self) -> BlackScholes {
        BlackScholes::new(self.cdf, self.theta)
    }
}

fn default_hundred() -> f64 {
    100.0
}

fn default_days_per_year() -> f64 {
    365.0
}

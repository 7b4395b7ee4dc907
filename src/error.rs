//! Error types for request-level pricing.
//!
//! The formula functions never fail; errors only come from the pipeline that
//! validates a request before handing it to the kernel, and from loading
//! configuration.

use thiserror::Error;

/// Message shown when volatility, rate and dividend yield are all zero.
pub const ALL_ZERO_MESSAGE: &str =
    "Must specify at least one non-zero parameter for volatility, dividend or interest rate!";

/// Pricing request errors.
///
/// # Examples
/// ```
/// use bs_pricer::PricingError;
///
/// let err = PricingError::Domain { field: "volatility", value: -0.2 };
/// assert!(err.to_string().contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// The request was rejected before reaching the pricing kernel.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A parameter lies outside the domain where the closed form is defined.
    /// Only raised when strict domain checking is enabled.
    #[error("Domain error: {field} = {value} (must be finite and > 0)")]
    Domain { field: &'static str, value: f64 },

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl PricingError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        PricingError::InvalidInput {
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for PricingError {
    fn from(err: toml::de::Error) -> Self {
        PricingError::Config {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for PricingError {
    fn from(err: std::io::Error) -> Self {
        PricingError::Config {
            message: err.to_string(),
        }
    }
}

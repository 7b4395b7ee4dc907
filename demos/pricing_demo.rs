// demos/pricing_demo.rs

//! Demonstration of request pricing and display conventions
//!
//! This example shows how to:
//! 1. Build requests from percentage-quoted inputs
//! 2. Price calls and puts with the reference configuration
//! 3. Rescale Greeks into display units
//! 4. Handle a rejected request
//!
//! Run with `RUST_LOG=debug` to see the per-request formula breakdown.

use anyhow::Result;
use bs_pricer::{
    default_configs, price_option, MarketParameters, OptionType, PricerConfig, PricingRequest,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let config = match std::env::args().nth(1) {
        Some(path) => PricerConfig::from_file(path)?,
        None => default_configs::reference(),
    };

    // Spot 100, 5% rate, 20% vol, 1y, 1% dividend yield
    let strikes = [80.0, 90.0, 100.0, 110.0, 120.0];

    println!(
        "\n{:<6} {:<8} {:<10} {:<10} {:<10} {:<10} {:<10} {:<10}",
        "Type", "Strike", "Fair", "Delta", "Gamma", "Vega", "Theta", "Rho"
    );
    println!("{}", "-".repeat(82));

    for option_type in [OptionType::Call, OptionType::Put] {
        for &strike in &strikes {
            let params = MarketParameters::from_percent(100.0, strike, 5.0, 20.0, 1.0, 1.0);
            let result = price_option(&PricingRequest::new(params, option_type), &config)?;
            let shown = result.displayed(&config.display);
            println!(
                "{:<6} {:<8.0} {:<10.4} {:<10.4} {:<10.4} {:<10.4} {:<10.4} {:<10.4}",
                option_type.to_string(),
                strike,
                shown.fair_value,
                shown.delta,
                shown.gamma,
                shown.vega,
                shown.theta,
                shown.rho
            );
        }
    }

    println!("\nSingle request:");
    let params = MarketParameters::from_percent(100.0, 100.0, 5.0, 20.0, 1.0, 0.0);
    let result = price_option(&PricingRequest::call(params), &config)?;
    println!("{}", result.displayed(&config.display));

    println!("\nRejected request:");
    let zeros = MarketParameters::from_percent(100.0, 100.0, 0.0, 0.0, 1.0, 0.0);
    match price_option(&PricingRequest::put(zeros), &config) {
        Ok(result) => println!("unexpectedly priced: {:?}", result),
        Err(e) => println!("  {}", e),
    }

    Ok(())
}

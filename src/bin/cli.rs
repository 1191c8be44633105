//! BS Options CLI
//!
//! Command-line walkthrough of the Black-Scholes pricing system.

use bs_options::models::{black_scholes, time, volatility};
use bs_options::prelude::*;
use chrono::{Duration, NaiveDate, Utc};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("Black-Scholes Options Pricing");
    println!("=============================\n");

    // Example: textbook pricing with fixed inputs
    let spot = 100.0;
    let strike = 100.0; // ATM
    let time_to_expiry = 1.0;
    let rate = 0.05;
    let vol = 0.20;

    println!("Pricing Example:");
    println!("  Spot: ${:.2}", spot);
    println!("  Strike: ${:.2}", strike);
    println!("  Time: {:.2} years", time_to_expiry);
    println!("  Rate: {:.1}%", rate * 100.0);
    println!("  Vol: {:.1}%\n", vol * 100.0);

    let call = OptionContract::new(spot, strike, time_to_expiry, rate, vol, OptionType::Call);
    let put = OptionContract::new(spot, strike, time_to_expiry, rate, vol, OptionType::Put);

    match (black_scholes::price(&call), black_scholes::price(&put)) {
        (Ok(c), Ok(p)) => {
            println!("Option Prices:");
            println!("  Call: ${:.2}", c);
            println!("  Put: ${:.2}", p);
        }
        (Err(e), _) | (_, Err(e)) => println!("Pricing failed: {}", e),
    }

    // Derived inputs: volatility from a small sample series, time from a date
    let start = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
    let closes = [100.0, 101.5, 100.8, 102.3, 101.9, 103.4];
    let points: Vec<_> = closes
        .iter()
        .enumerate()
        .map(|(i, &c)| (start + Duration::days(i as i64), c))
        .collect();

    match PriceSeries::new("DEMO", points).and_then(|s| volatility::annualized_volatility(&s)) {
        Ok(v) => println!("\nSample annualized vol: {:.2}%", v * 100.0),
        Err(e) => println!("\nVol estimation failed: {}", e),
    }

    let expiry = Utc::now().date_naive() + Duration::days(180);
    println!(
        "Year fraction to {}: {:.4}",
        expiry,
        time::year_fraction_from_today(expiry)
    );

    // Try pricing from live data
    println!("\n--- Live Data ---");
    println!("Attempting to price an AAPL call from Yahoo Finance + FRED...\n");

    let market = match YahooClient::new() {
        Ok(c) => c,
        Err(e) => {
            println!("Could not create Yahoo client: {}", e);
            return;
        }
    };

    let rates = match FredClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            println!("Skipping live pricing: {}", e);
            return;
        }
    };

    let pricer = Pricer::new(&market, &rates);
    let request = PricingRequest::new("AAPL", 180.0, expiry, OptionType::Call)
        .with_rate_series(RateSeries::Dgs10);

    match pricer.quote(&request) {
        Ok(quote) => {
            println!("AAPL Call Quote:");
            println!("  Spot: ${:.2}", quote.contract.spot);
            println!("  Strike: ${:.2}", quote.contract.strike);
            println!("  Time: {:.4} years", quote.contract.time_to_expiry);
            println!("  Rate: {:.2}%", quote.contract.risk_free_rate * 100.0);
            println!("  Vol: {:.2}%", quote.contract.volatility * 100.0);
            println!("  Value: ${:.2}", quote.value);
        }
        Err(e) => {
            println!("Could not price AAPL: {}", e);
            println!("(This is expected if you're offline or the APIs are unavailable)");
        }
    }

    println!("\n--- Done ---");
}

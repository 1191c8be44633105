//! Black-Scholes Model
//!
//! Closed-form European option pricing, no dividends:
//!
//! - d1/d2 parameters
//! - standard normal CDF
//! - call/put values and the validated, rounded [`price`] entry point
//!
//! Everything here is a pure function of its scalar inputs; no state is
//! retained between calls.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::core::{BsResult, OptionContract, OptionType};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Black-Scholes d1 parameter
pub fn d1(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    d1(spot, strike, rate, vol, time) - vol * time.sqrt()
}

/// Unrounded European call value: N(d1)·S - N(d2)·K·e^(-rT)
pub fn call_value(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    let d1 = d1(spot, strike, rate, vol, time);
    let d2 = d2(spot, strike, rate, vol, time);
    norm_cdf(d1) * spot - norm_cdf(d2) * strike * (-rate * time).exp()
}

/// Unrounded European put value: K·e^(-rT)·N(-d2) - S·N(-d1)
pub fn put_value(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    let d1 = d1(spot, strike, rate, vol, time);
    let d2 = d2(spot, strike, rate, vol, time);
    strike * (-rate * time).exp() * norm_cdf(-d2) - spot * norm_cdf(-d1)
}

/// Price a contract, rounded to cents.
///
/// Validates the preconditions first (positive spot/strike/time/vol,
/// finite rate) so a zero volatility or zero time never reaches the
/// division in d1. Rounding is `f64::round` at 2 decimals, i.e.
/// half-away-from-zero.
pub fn price(contract: &OptionContract) -> BsResult<f64> {
    contract.validate()?;

    let value = match contract.option_type {
        OptionType::Call => call_value(
            contract.spot,
            contract.strike,
            contract.risk_free_rate,
            contract.volatility,
            contract.time_to_expiry,
        ),
        OptionType::Put => put_value(
            contract.spot,
            contract.strike,
            contract.risk_free_rate,
            contract.volatility,
            contract.time_to_expiry,
        ),
    };

    Ok(round_cents(value))
}

/// Round a monetary value to 2 decimal places
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

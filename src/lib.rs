//! # BS Options - Black-Scholes Option Pricer
//!
//! A small options pricing library built around the closed-form
//! Black-Scholes model for European options.
//!
//! ## Overview
//!
//! Given already-resolved scalar inputs (spot, strike, time to expiry,
//! risk-free rate, volatility), the pricer evaluates the closed-form
//! call/put value. The library also derives two of those scalars from
//! market data:
//!
//! - **Historical volatility**: annualized sample standard deviation of
//!   daily simple returns over a lookback window
//! - **Time to expiry**: calendar-day year fraction from today to the
//!   expiration date
//!
//! ## Key Components
//!
//! - **Data Fetching**: Yahoo Finance (spot + close history) and FRED
//!   (Treasury/breakeven/fed-funds rate series)
//! - **Black-Scholes**: d1/d2, normal CDF, call/put values
//! - **Pricing Workflow**: resolves inputs via injected providers and
//!   produces a single quoted value per request
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bs_options::prelude::*;
//! use chrono::NaiveDate;
//!
//! let market = YahooClient::new().unwrap();
//! let rates = FredClient::from_env().unwrap();
//! let pricer = Pricer::new(&market, &rates);
//!
//! let expiry = NaiveDate::from_ymd_opt(2028, 1, 1).unwrap();
//! let request = PricingRequest::new("AAPL", 180.0, expiry, OptionType::Call)
//!     .with_rate_series(RateSeries::Dgs10);
//!
//! let quote = pricer.quote(&request).unwrap();
//! println!("Option value: ${:.2}", quote.value);
//! ```
//!
//! ## What This Library Does NOT Do
//!
//! - Solve for implied volatility or compute Greeks
//! - Price American or exotic options
//! - Run PDE or Monte Carlo methods
//! - Persist historical queries or manage portfolios

pub mod core;
pub mod data;
pub mod models;
pub mod pricing;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        BsError, BsResult, OptionContract, OptionType, PriceSeries, ReturnSeries,
    };

    // Data fetching
    pub use crate::data::{
        FredClient, MarketDataProvider, RateDataProvider, RateSeries, YahooClient,
        DEFAULT_LOOKBACK_DAYS,
    };

    // Models
    pub use crate::models::{
        annualized_volatility,
        norm_cdf,

        // Black-Scholes
        price as bs_price,
        year_fraction,
        year_fraction_from_today,
        DAYS_PER_YEAR,
        TRADING_DAYS_PER_YEAR,
    };

    // Workflow
    pub use crate::pricing::{Pricer, PricingRequest, Quote};
}

// Re-export main types at crate root
pub use crate::core::{BsError, BsResult};
pub use crate::pricing::{Pricer, PricingRequest, Quote};

//! Core data types for the Black-Scholes pricer
//!
//! Defines fundamental types:
//! - OptionContract: spot, strike, time, rate, vol, type (call/put)
//! - PriceSeries / ReturnSeries: historical closes and derived returns
//! - BsError: the crate-wide error taxonomy

pub mod contract;
pub mod error;
pub mod series;

pub use contract::*;
pub use error::*;
pub use series::*;

//! Data-provider traits
//!
//! The pricing workflow depends on these narrow capabilities rather than
//! on concrete clients, so providers are injected per request handler
//! instead of living in a process-wide singleton.

use crate::core::{BsResult, PriceSeries};
use crate::data::RateSeries;

/// Supplies the current spot price and historical closes for a symbol.
///
/// Implementations must fail with `DataUnavailable` for unknown symbols
/// or empty payloads; the pricing core treats that as fatal for the
/// request and never retries.
pub trait MarketDataProvider {
    /// Current spot price for a symbol
    fn spot_price(&self, symbol: &str) -> BsResult<f64>;

    /// Daily closing prices over the given lookback window
    fn price_history(&self, symbol: &str, lookback_days: u32) -> BsResult<PriceSeries>;
}

/// Supplies the most recent observation of a named rate series.
pub trait RateDataProvider {
    /// Latest rate as a decimal fraction (a 4.25% observation returns 0.0425)
    fn latest_rate(&self, series: RateSeries) -> BsResult<f64>;
}

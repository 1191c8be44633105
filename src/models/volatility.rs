//! Historical volatility estimation
//!
//! Annualizes the sample standard deviation of daily simple returns by
//! sqrt(252), the assumed number of trading days per year.

use crate::core::{BsError, BsResult, PriceSeries};

/// Assumed trading days per year used for annualization
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Annualized volatility of a daily closing-price series.
///
/// Computes the simple return series, takes its unbiased (n-1) sample
/// standard deviation and scales by sqrt(252). Fails with
/// `InsufficientData` when fewer than 3 closes are supplied: two closes
/// yield a single return, for which the n-1 divisor leaves the standard
/// deviation undefined.
pub fn annualized_volatility(series: &PriceSeries) -> BsResult<f64> {
    let returns = series.returns()?;
    let std_dev = returns.sample_std_dev().ok_or_else(|| {
        BsError::insufficient_data(format!(
            "need at least 3 closes to estimate volatility for {}, got {}",
            series.symbol,
            series.len()
        ))
    })?;
    Ok(std_dev * TRADING_DAYS_PER_YEAR.sqrt())
}

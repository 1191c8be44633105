//! Historical price series
//!
//! A chronological sequence of daily closing prices for one symbol, and
//! the simple return series derived from it. Both are transient value
//! types: built once per pricing request, never cached or mutated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{BsError, BsResult};

/// Ordered sequence of (date, close) pairs for a single symbol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: String,
    points: Vec<(NaiveDate, f64)>,
}

impl PriceSeries {
    /// Build a series from chronological (date, close) pairs.
    ///
    /// Closes must be positive and finite; a zero or NaN close would
    /// poison the return series downstream, so it is rejected here.
    pub fn new(symbol: impl Into<String>, points: Vec<(NaiveDate, f64)>) -> BsResult<Self> {
        for (date, close) in &points {
            if !(close.is_finite() && *close > 0.0) {
                return Err(BsError::invalid_input(format!(
                    "close for {} must be positive and finite, got {}",
                    date, close
                )));
            }
        }
        Ok(Self {
            symbol: symbol.into(),
            points,
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closing prices in chronological order
    pub fn closes(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(_, c)| *c)
    }

    /// Derive the simple return series: (p[i] - p[i-1]) / p[i-1].
    ///
    /// Needs at least 2 closes; length is always len() - 1.
    pub fn returns(&self) -> BsResult<ReturnSeries> {
        if self.points.len() < 2 {
            return Err(BsError::insufficient_data(format!(
                "need at least 2 closes to compute returns for {}, got {}",
                self.symbol,
                self.points.len()
            )));
        }

        let returns = self
            .points
            .windows(2)
            .map(|w| (w[1].1 - w[0].1) / w[0].1)
            .collect();

        Ok(ReturnSeries(returns))
    }
}

/// Per-period fractional returns derived from a [`PriceSeries`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnSeries(Vec<f64>);

impl ReturnSeries {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Unbiased (n-1 divisor) sample standard deviation.
    ///
    /// Undefined for fewer than 2 returns (the divisor would be zero),
    /// so that case is `None` and callers decide how to surface it.
    pub fn sample_std_dev(&self) -> Option<f64> {
        let n = self.0.len();
        if n < 2 {
            return None;
        }

        let mean = self.0.iter().sum::<f64>() / n as f64;
        let var = self
            .0
            .iter()
            .map(|r| (r - mean) * (r - mean))
            .sum::<f64>()
            / (n - 1) as f64;

        Some(var.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated(closes: &[f64]) -> Vec<(NaiveDate, f64)> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let d = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
                    + chrono::Duration::days(i as i64);
                (d, c)
            })
            .collect()
    }

    #[test]
    fn test_returns() {
        let series = PriceSeries::new("TEST", dated(&[100.0, 110.0, 99.0])).unwrap();
        let returns = series.returns().unwrap();

        assert_eq!(returns.len(), 2);
        assert!((returns.values()[0] - 0.1).abs() < 1e-12);
        assert!((returns.values()[1] - (-0.1)).abs() < 1e-12);
    }

    #[test]
    fn test_too_few_points() {
        let series = PriceSeries::new("TEST", dated(&[100.0])).unwrap();
        let err = series.returns().unwrap_err();
        assert!(matches!(err, BsError::InsufficientData(_)));
    }

    #[test]
    fn test_rejects_bad_close() {
        assert!(PriceSeries::new("TEST", dated(&[100.0, 0.0])).is_err());
        assert!(PriceSeries::new("TEST", dated(&[100.0, f64::NAN])).is_err());
        assert!(PriceSeries::new("TEST", dated(&[100.0, -5.0])).is_err());
    }

    #[test]
    fn test_sample_std_dev() {
        let series = PriceSeries::new("TEST", dated(&[100.0, 110.0, 99.0, 108.9])).unwrap();
        let returns = series.returns().unwrap();

        // Returns are 0.1, -0.1, 0.1; unbiased std dev is
        // sqrt((2*(1/15)^2 + (2/15)^2) / 2) = 0.11547...
        let std_dev = returns.sample_std_dev().unwrap();
        assert!((std_dev - 0.115470053837925).abs() < 1e-9);
    }

    #[test]
    fn test_constant_series_has_zero_std_dev() {
        let series = PriceSeries::new("TEST", dated(&[50.0, 50.0, 50.0, 50.0])).unwrap();
        assert_eq!(series.returns().unwrap().sample_std_dev(), Some(0.0));
    }

    #[test]
    fn test_single_return_has_no_std_dev() {
        // One return leaves a zero divisor in the n-1 variance; that is
        // surfaced as None, never as a silent 0.0.
        let series = PriceSeries::new("TEST", dated(&[100.0, 150.0])).unwrap();
        assert_eq!(series.returns().unwrap().sample_std_dev(), None);
    }
}

//! Yahoo Finance data fetcher
//!
//! Fetches the current spot price and daily closing-price history via
//! Yahoo Finance's unofficial chart API.
//!
//! Note: This is for educational/research purposes. Yahoo Finance
//! data is delayed ~15 minutes and intended for personal use.

use chrono::DateTime;
use serde::Deserialize;

use crate::core::{BsError, BsResult, PriceSeries};
use crate::data::MarketDataProvider;

/// Default historical lookback window (1 calendar year)
pub const DEFAULT_LOOKBACK_DAYS: u32 = 365;

/// Yahoo Finance API client
pub struct YahooClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooClient {
    pub fn new() -> BsResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .map_err(|e| BsError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: "https://query1.finance.yahoo.com/v8/finance".to_string(),
        })
    }

    /// Fetch the chart payload for a symbol over the given range
    fn get_chart(&self, symbol: &str, range: &str) -> BsResult<ChartResult> {
        let url = format!(
            "{}/chart/{}?range={}&interval=1d",
            self.base_url, symbol, range
        );

        let response: YahooChartResponse = self
            .client
            .get(&url)
            .send()
            .map_err(|e| BsError::Network(e.to_string()))?
            .json()
            .map_err(|e| BsError::data(format!("Failed to parse chart for {}: {}", symbol, e)))?;

        if let Some(err) = response.chart.error {
            return Err(BsError::data_unavailable(format!(
                "Yahoo returned error for {}: {}",
                symbol, err.description
            )));
        }

        response
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| {
                BsError::data_unavailable(format!("No chart data returned for {}", symbol))
            })
    }
}

impl MarketDataProvider for YahooClient {
    fn spot_price(&self, symbol: &str) -> BsResult<f64> {
        let chart = self.get_chart(symbol, "1d")?;
        let price = chart.meta.regular_market_price.ok_or_else(|| {
            BsError::data_unavailable(format!("No market price for {}", symbol))
        })?;

        if !(price.is_finite() && price > 0.0) {
            return Err(BsError::data(format!(
                "Bad market price for {}: {}",
                symbol, price
            )));
        }

        Ok(price)
    }

    fn price_history(&self, symbol: &str, lookback_days: u32) -> BsResult<PriceSeries> {
        // Yahoo ranges are coarse; pick the smallest range covering the window
        let range = match lookback_days {
            0..=5 => "5d",
            6..=30 => "1mo",
            31..=90 => "3mo",
            91..=180 => "6mo",
            181..=365 => "1y",
            366..=730 => "2y",
            _ => "5y",
        };

        let chart = self.get_chart(symbol, range)?;

        let quote = chart
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| {
                BsError::data_unavailable(format!("No quote indicators for {}", symbol))
            })?;

        let mut points = Vec::with_capacity(chart.timestamp.len());
        for (ts, close) in chart.timestamp.iter().zip(quote.close.iter()) {
            // Null closes appear on holidays/partial sessions; skip them
            let Some(close) = close else { continue };
            let Some(date) = DateTime::from_timestamp(*ts, 0).map(|dt| dt.date_naive()) else {
                continue;
            };
            points.push((date, *close));
        }

        if points.len() < 2 {
            return Err(BsError::data_unavailable(format!(
                "Not enough history for {} ({} closes)",
                symbol,
                points.len()
            )));
        }

        tracing::debug!("Fetched {} closes for {}", points.len(), symbol);
        PriceSeries::new(symbol, points)
    }
}

// Yahoo Finance chart API response structures

#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Option<Vec<ChartResult>>,
    error: Option<YahooError>,
}

#[derive(Debug, Deserialize)]
struct YahooError {
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore] // Requires network
    fn test_spot_price() {
        let client = YahooClient::new().unwrap();
        let price = client.spot_price("AAPL").unwrap();

        assert!(price > 0.0);
        println!("AAPL price: {}", price);
    }

    #[test]
    #[ignore] // Requires network
    fn test_price_history() {
        let client = YahooClient::new().unwrap();
        let series = client.price_history("AAPL", DEFAULT_LOOKBACK_DAYS).unwrap();

        // ~252 trading days in a year
        assert!(series.len() > 200);
        println!("AAPL closes: {}", series.len());
    }

    #[test]
    #[ignore] // Requires network
    fn test_unknown_symbol() {
        let client = YahooClient::new().unwrap();
        let err = client.spot_price("ZZZZZZNOSUCH").unwrap_err();
        assert!(matches!(err, BsError::DataUnavailable(_) | BsError::Data(_)));
    }
}

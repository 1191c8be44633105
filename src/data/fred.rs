//! FRED data fetcher
//!
//! Fetches the latest observation of a rate series from the St. Louis
//! Fed's FRED API. Observations arrive in percentage points and are
//! converted to decimal fractions before use.

use serde::{Deserialize, Serialize};

use crate::core::{BsError, BsResult};
use crate::data::RateDataProvider;

/// The fixed set of rate series the pricer understands
///
/// Constant-maturity Treasury yields from 1 month to 30 years, the
/// 10-year breakeven inflation rate, and the effective federal funds
/// rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateSeries {
    Dgs1Mo,
    Dgs2Mo,
    Dgs3Mo,
    Dgs6Mo,
    Dgs1,
    Dgs2,
    Dgs3,
    Dgs5,
    Dgs7,
    Dgs10,
    Dgs20,
    Dgs30,
    T10Yie,
    FedFunds,
}

impl RateSeries {
    /// FRED series identifier
    pub fn id(&self) -> &'static str {
        match self {
            RateSeries::Dgs1Mo => "DGS1MO",
            RateSeries::Dgs2Mo => "DGS2MO",
            RateSeries::Dgs3Mo => "DGS3MO",
            RateSeries::Dgs6Mo => "DGS6MO",
            RateSeries::Dgs1 => "DGS1",
            RateSeries::Dgs2 => "DGS2",
            RateSeries::Dgs3 => "DGS3",
            RateSeries::Dgs5 => "DGS5",
            RateSeries::Dgs7 => "DGS7",
            RateSeries::Dgs10 => "DGS10",
            RateSeries::Dgs20 => "DGS20",
            RateSeries::Dgs30 => "DGS30",
            RateSeries::T10Yie => "T10YIE",
            RateSeries::FedFunds => "FEDFUNDS",
        }
    }

    /// All known series, in maturity order
    pub fn all() -> &'static [RateSeries] {
        &[
            RateSeries::Dgs1Mo,
            RateSeries::Dgs2Mo,
            RateSeries::Dgs3Mo,
            RateSeries::Dgs6Mo,
            RateSeries::Dgs1,
            RateSeries::Dgs2,
            RateSeries::Dgs3,
            RateSeries::Dgs5,
            RateSeries::Dgs7,
            RateSeries::Dgs10,
            RateSeries::Dgs20,
            RateSeries::Dgs30,
            RateSeries::T10Yie,
            RateSeries::FedFunds,
        ]
    }
}

/// FRED API client
pub struct FredClient {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl FredClient {
    pub fn new(api_key: impl Into<String>) -> BsResult<Self> {
        let client = reqwest::blocking::Client::new();
        Ok(Self {
            client,
            base_url: "https://api.stlouisfed.org/fred".to_string(),
            api_key: api_key.into(),
        })
    }

    /// Build a client from the FRED_API_KEY environment variable
    pub fn from_env() -> BsResult<Self> {
        let key = std::env::var("FRED_API_KEY")
            .map_err(|_| BsError::invalid_input("FRED_API_KEY is not set"))?;
        Self::new(key)
    }
}

impl RateDataProvider for FredClient {
    fn latest_rate(&self, series: RateSeries) -> BsResult<f64> {
        let url = format!(
            "{}/series/observations?series_id={}&api_key={}&file_type=json&sort_order=desc&limit=10",
            self.base_url,
            series.id(),
            self.api_key
        );

        let response: FredObservationsResponse = self
            .client
            .get(&url)
            .send()
            .map_err(|e| BsError::Network(e.to_string()))?
            .json()
            .map_err(|e| {
                BsError::data(format!("Failed to parse observations for {}: {}", series.id(), e))
            })?;

        // FRED reports missing observations as "." — take the newest
        // numeric one.
        let latest = response
            .observations
            .iter()
            .find_map(|obs| obs.value.parse::<f64>().ok())
            .ok_or_else(|| {
                BsError::data_unavailable(format!(
                    "No recent observation for rate series {}",
                    series.id()
                ))
            })?;

        tracing::debug!("Latest {} observation: {}%", series.id(), latest);

        // Percentage points -> decimal fraction
        Ok(latest / 100.0)
    }
}

// FRED API response structures

#[derive(Debug, Deserialize)]
struct FredObservationsResponse {
    observations: Vec<FredObservation>,
}

#[derive(Debug, Deserialize)]
struct FredObservation {
    value: String,
}

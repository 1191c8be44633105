//! End-to-end pricing workflow
//!
//! Resolves spot, historical volatility, the risk-free rate and the time
//! to expiry from the injected providers, then evaluates the
//! Black-Scholes formula. Provider failures surface before the engine
//! runs; no partial inputs ever reach it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{BsResult, OptionContract, OptionType};
use crate::data::{MarketDataProvider, RateDataProvider, RateSeries, DEFAULT_LOOKBACK_DAYS};
use crate::models::{annualized_volatility, black_scholes, year_fraction_from_today};

/// A single pricing request, as collected from the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingRequest {
    /// Underlying ticker symbol (e.g. "AAPL")
    pub symbol: String,
    /// Strike price
    pub strike: f64,
    /// Expiration date
    pub expiry: NaiveDate,
    /// Which FRED series to use as the risk-free rate
    pub rate_series: Option<RateSeries>,
    /// Option type (Call/Put)
    pub option_type: OptionType,
}

impl PricingRequest {
    pub fn new(
        symbol: impl Into<String>,
        strike: f64,
        expiry: NaiveDate,
        option_type: OptionType,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            strike,
            expiry,
            rate_series: None,
            option_type,
        }
    }

    /// Use a specific rate series instead of the 10-year Treasury default
    pub fn with_rate_series(mut self, series: RateSeries) -> Self {
        self.rate_series = Some(series);
        self
    }
}

/// A priced option together with the inputs that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub contract: OptionContract,
    /// Rounded option value in the underlying's currency
    pub value: f64,
}

/// Pricing workflow over injected data providers.
///
/// Constructed once per process and passed by reference into request
/// handlers; holds no state beyond the provider references.
pub struct Pricer<'a> {
    market: &'a dyn MarketDataProvider,
    rates: &'a dyn RateDataProvider,
    lookback_days: u32,
}

impl<'a> Pricer<'a> {
    pub fn new(market: &'a dyn MarketDataProvider, rates: &'a dyn RateDataProvider) -> Self {
        Self {
            market,
            rates,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }

    /// Override the historical lookback window used for volatility
    pub fn with_lookback_days(mut self, days: u32) -> Self {
        self.lookback_days = days;
        self
    }

    /// Resolve all market inputs for a request and price it.
    ///
    /// Any provider failure is terminal for the request; nothing is
    /// retried here.
    pub fn quote(&self, request: &PricingRequest) -> BsResult<Quote> {
        let spot = self.market.spot_price(&request.symbol)?;
        let history = self.market.price_history(&request.symbol, self.lookback_days)?;
        let volatility = annualized_volatility(&history)?;

        let rate_series = request.rate_series.unwrap_or(RateSeries::Dgs10);
        let rate = self.rates.latest_rate(rate_series)?;

        let time_to_expiry = year_fraction_from_today(request.expiry);

        let contract = OptionContract::new(
            spot,
            request.strike,
            time_to_expiry,
            rate,
            volatility,
            request.option_type,
        );

        let value = black_scholes::price(&contract)?;

        tracing::info!(
            "Priced {} {} K={} T={:.4}y: {}",
            request.symbol,
            request.option_type,
            request.strike,
            time_to_expiry,
            value
        );

        Ok(Quote {
            symbol: request.symbol.clone(),
            contract,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BsError, PriceSeries};
    use chrono::{Duration, Utc};

    /// Deterministic in-memory market data for tests
    struct FixedMarket {
        spot: f64,
        closes: Vec<f64>,
    }

    impl MarketDataProvider for FixedMarket {
        fn spot_price(&self, _symbol: &str) -> BsResult<f64> {
            Ok(self.spot)
        }

        fn price_history(&self, symbol: &str, _lookback_days: u32) -> BsResult<PriceSeries> {
            let start = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
            let points = self
                .closes
                .iter()
                .enumerate()
                .map(|(i, &c)| (start + Duration::days(i as i64), c))
                .collect();
            PriceSeries::new(symbol, points)
        }
    }

    struct FixedRate(f64);

    impl RateDataProvider for FixedRate {
        fn latest_rate(&self, _series: RateSeries) -> BsResult<f64> {
            Ok(self.0)
        }
    }

    struct UnavailableMarket;

    impl MarketDataProvider for UnavailableMarket {
        fn spot_price(&self, symbol: &str) -> BsResult<f64> {
            Err(BsError::data_unavailable(format!("no data for {}", symbol)))
        }

        fn price_history(&self, symbol: &str, _lookback_days: u32) -> BsResult<PriceSeries> {
            Err(BsError::data_unavailable(format!("no data for {}", symbol)))
        }
    }

    #[test]
    fn test_quote_end_to_end() {
        let market = FixedMarket {
            spot: 100.0,
            closes: vec![100.0, 101.0, 99.5, 100.5, 102.0, 101.0, 100.0, 103.0],
        };
        let rates = FixedRate(0.05);
        let pricer = Pricer::new(&market, &rates);

        let expiry = Utc::now().date_naive() + Duration::days(365);
        let request = PricingRequest::new("TEST", 100.0, expiry, OptionType::Call);

        let quote = pricer.quote(&request).unwrap();

        assert_eq!(quote.symbol, "TEST");
        assert_eq!(quote.contract.spot, 100.0);
        assert_eq!(quote.contract.risk_free_rate, 0.05);
        assert!((quote.contract.time_to_expiry - 1.0).abs() < 1e-9);
        assert!(quote.contract.volatility > 0.0);
        assert!(quote.value > 0.0);
        // Rounded to cents
        assert_eq!(quote.value, (quote.value * 100.0).round() / 100.0);
    }

    #[test]
    fn test_provider_failure_is_terminal() {
        let rates = FixedRate(0.05);
        let pricer = Pricer::new(&UnavailableMarket, &rates);

        let expiry = Utc::now().date_naive() + Duration::days(90);
        let request = PricingRequest::new("NOPE", 50.0, expiry, OptionType::Put);

        let err = pricer.quote(&request).unwrap_err();
        assert!(matches!(err, BsError::DataUnavailable(_)));
    }

    #[test]
    fn test_flat_history_rejected_by_engine() {
        // A constant price history gives zero volatility, which the
        // engine refuses rather than dividing by zero in d1.
        let market = FixedMarket {
            spot: 100.0,
            closes: vec![100.0; 10],
        };
        let rates = FixedRate(0.04);
        let pricer = Pricer::new(&market, &rates);

        let expiry = Utc::now().date_naive() + Duration::days(180);
        let request = PricingRequest::new("FLAT", 100.0, expiry, OptionType::Call);

        let err = pricer.quote(&request).unwrap_err();
        assert!(matches!(err, BsError::InvalidInput(_)));
    }
}

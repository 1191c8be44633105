//! Option contract definitions
//!
//! Represents a single European option with all pricing inputs resolved
//! to scalars: spot, strike, time to expiry, risk-free rate, volatility.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{BsError, BsResult};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

impl FromStr for OptionType {
    type Err = BsError;

    /// Parse an option-type selector from user input.
    ///
    /// Anything outside "Call"/"Put" (case-insensitive) is rejected with
    /// an explicit error rather than being silently ignored.
    fn from_str(s: &str) -> BsResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            other => Err(BsError::invalid_option_type(format!(
                "expected \"Call\" or \"Put\", got \"{}\"",
                other
            ))),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// A European option with all model inputs resolved
///
/// All fields are plain scalars; resolving spot/volatility/rate/time from
/// market data happens upstream (see [`crate::pricing::Pricer`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    /// Current price of the underlying
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to expiry in years
    pub time_to_expiry: f64,
    /// Annualized risk-free rate as a decimal fraction (0.05 = 5%)
    pub risk_free_rate: f64,
    /// Annualized volatility as a decimal fraction
    pub volatility: f64,
    /// Option type (Call/Put)
    pub option_type: OptionType,
}

impl OptionContract {
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
            option_type,
        }
    }

    /// Check the pricing preconditions.
    ///
    /// Spot, strike, time and volatility must all be strictly positive and
    /// finite; zero volatility or zero time would put a division by zero
    /// into d1, so those are rejected here instead of letting NaN/infinity
    /// propagate. The rate may be negative but must be finite.
    pub fn validate(&self) -> BsResult<()> {
        if !(self.spot.is_finite() && self.spot > 0.0) {
            return Err(BsError::invalid_input(format!(
                "spot must be positive, got {}",
                self.spot
            )));
        }
        if !(self.strike.is_finite() && self.strike > 0.0) {
            return Err(BsError::invalid_input(format!(
                "strike must be positive, got {}",
                self.strike
            )));
        }
        if !(self.time_to_expiry.is_finite() && self.time_to_expiry > 0.0) {
            return Err(BsError::invalid_input(format!(
                "time to expiry must be positive, got {}",
                self.time_to_expiry
            )));
        }
        if !(self.volatility.is_finite() && self.volatility > 0.0) {
            return Err(BsError::invalid_input(format!(
                "volatility must be positive, got {}",
                self.volatility
            )));
        }
        if !self.risk_free_rate.is_finite() {
            return Err(BsError::invalid_input(format!(
                "risk-free rate must be finite, got {}",
                self.risk_free_rate
            )));
        }
        Ok(())
    }

    /// Log-moneyness: ln(S/K)
    pub fn log_moneyness(&self) -> f64 {
        (self.spot / self.strike).ln()
    }

    /// Is this option in the money?
    pub fn is_itm(&self) -> bool {
        match self.option_type {
            OptionType::Call => self.spot > self.strike,
            OptionType::Put => self.spot < self.strike,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_type() {
        assert_eq!(OptionType::Call.phi(), 1.0);
        assert_eq!(OptionType::Put.phi(), -1.0);

        assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.intrinsic(90.0, 100.0), 0.0);
    }

    #[test]
    fn test_parse_option_type() {
        assert_eq!("Call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("put".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!(" PUT ".parse::<OptionType>().unwrap(), OptionType::Put);

        let err = "straddle".parse::<OptionType>().unwrap_err();
        assert!(matches!(err, BsError::InvalidOptionType(_)));
    }

    #[test]
    fn test_validate_accepts_good_contract() {
        let c = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_zero_vol_and_zero_time() {
        // Zero vol or zero time would divide by zero in d1; both are
        // rejected up front rather than propagated as NaN.
        let zero_vol = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.0, OptionType::Call);
        assert!(matches!(
            zero_vol.validate().unwrap_err(),
            BsError::InvalidInput(_)
        ));

        let zero_time = OptionContract::new(100.0, 100.0, 0.0, 0.05, 0.2, OptionType::Put);
        assert!(matches!(
            zero_time.validate().unwrap_err(),
            BsError::InvalidInput(_)
        ));
    }

    #[test]
    fn test_negative_rate_allowed() {
        let c = OptionContract::new(100.0, 100.0, 1.0, -0.01, 0.2, OptionType::Call);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_moneyness() {
        let itm = OptionContract::new(110.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
        assert!(itm.is_itm());
        assert!(itm.log_moneyness() > 0.0);

        let otm = OptionContract::new(90.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
        assert!(!otm.is_itm());
    }
}

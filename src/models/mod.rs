//! Numerical core
//!
//! Implements:
//! - Black-Scholes closed-form pricing (the pricing engine)
//! - Historical volatility estimation (annualized sample std dev)
//! - Calendar-day year fractions for time to expiry

pub mod black_scholes;
pub mod time;
pub mod volatility;

pub use black_scholes::*;
pub use time::*;
pub use volatility::*;

//! External data providers
//!
//! Handles:
//! - Yahoo Finance chart API for spot prices and close history
//! - FRED for risk-free rate series
//! - Provider traits so the pricing workflow stays client-agnostic

pub mod fred;
pub mod provider;
pub mod yahoo;

pub use fred::*;
pub use provider::*;
pub use yahoo::*;

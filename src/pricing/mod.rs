//! Pricing workflow
//!
//! Wires the data providers into the numerical core: one request in,
//! one quoted option value out.

pub mod engine;

pub use engine::*;

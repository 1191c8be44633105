//! Error types for the Black-Scholes pricer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BsError {
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid option type: {0}")]
    InvalidOptionType(String),

    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Data error: {0}")]
    Data(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}

pub type BsResult<T> = Result<T, BsError>;

impl BsError {
    pub fn insufficient_data(msg: impl Into<String>) -> Self {
        Self::InsufficientData(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn invalid_option_type(msg: impl Into<String>) -> Self {
        Self::InvalidOptionType(msg.into())
    }

    pub fn data_unavailable(msg: impl Into<String>) -> Self {
        Self::DataUnavailable(msg.into())
    }

    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }
}

//! Error types for Fraction

use thiserror::Error;

use crate::types::Asset;

/// Top-level errors for Fraction operations
#[derive(Debug, Error)]
pub enum Error {
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Fixed-point arithmetic errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("arithmetic overflow")]
    Overflow,
}

/// Price feed errors
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("Price feed unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Invalid {asset} price: {price}")]
    InvalidPrice { asset: Asset, price: u128 },
}

/// Ledger collaborator errors
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Transfer plan rejected: {reason}")]
    Rejected { reason: String },

    #[error("Ledger unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Protocol-specific errors
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Invalid amount: {message}")]
    InvalidAmount { message: String },

    #[error("Invalid {context} ratio: {ratio}")]
    InvalidRatio { ratio: u128, context: &'static str },

    #[error("Slippage exceeded for {asset}: minimum {minimum}, computed {computed}")]
    SlippageExceeded {
        asset: Asset,
        minimum: u128,
        computed: u128,
    },
}

/// Result type alias for Fraction operations
pub type Result<T> = std::result::Result<T, Error>;

impl ProtocolError {
    /// Get an API-friendly error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount { .. } => "invalid_amount",
            Self::InvalidRatio { .. } => "invalid_ratio",
            Self::SlippageExceeded { .. } => "slippage_exceeded",
        }
    }
}

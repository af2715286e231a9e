//! Domain-specific error types for the crypto-bench tools
//!
//! This module provides structured error types using `thiserror` for
//! precise and ergonomic error handling throughout the application.

use thiserror::Error;

/// Main error type for the crypto-bench application
#[derive(Error, Debug)]
pub enum BenchError {
    /// Configuration-related errors (CLI parsing, validation, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// OpenSSL primitive errors (key generation, signing, verification)
    #[error("Crypto error: {0}")]
    Crypto(#[from] openssl::error::ErrorStack),

    /// Benchmark execution errors (worker setup, invalid results, etc.)
    #[error("Benchmark execution error: {0}")]
    Execution(String),
}

/// Result type using BenchError
pub type Result<T> = std::result::Result<T, BenchError>;

// Convenience constructors
impl BenchError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        BenchError::Config(msg.into())
    }

    pub fn execution<S: Into<String>>(msg: S) -> Self {
        BenchError::Execution(msg.into())
    }
}

//! Error types for SecureVault domain values

use thiserror::Error;

/// Result type for domain value parsing
pub type Result<T> = std::result::Result<T, TypesError>;

/// Errors raised while parsing domain values from untyped input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    /// Unknown scan kind (expected `link` or `message`)
    #[error("Unknown scan kind: {0}")]
    UnknownScanKind(String),

    /// Unknown risk level (expected `Low`, `Medium` or `High`)
    #[error("Unknown risk level: {0}")]
    UnknownRiskLevel(String),

    /// Amount could not be parsed as a decimal
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

//! Authentication error types

use securevault_db::DbError;
use thiserror::Error;

/// Result type alias for session and credential operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Session and credential errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// Input rejected before any remote call
    #[error("{0}")]
    Validation(String),

    /// Account store failure
    #[error(transparent)]
    Store(#[from] DbError),

    /// Local session storage could not be read or written
    #[error("Session storage error: {0}")]
    SessionStorage(String),

    /// Session file exists but does not hold a JSON object of strings
    #[error("Session file is corrupt: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<std::io::Error> for AuthError {
    fn from(e: std::io::Error) -> Self {
        AuthError::SessionStorage(e.to_string())
    }
}

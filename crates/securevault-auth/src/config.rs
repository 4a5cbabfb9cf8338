//! Session configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Key under which the active email is persisted
pub const SESSION_KEY: &str = "securevault_session_email";

/// Local session storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// JSON file holding the persisted session entries
    pub path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let path = std::env::var("SECUREVAULT_SESSION_FILE")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_session_path);

        Self { path }
    }
}

impl SessionConfig {
    /// Create config from environment variables, loading `.env` first
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::default()
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// `<data dir>/securevault/session.json`, falling back to the working directory
fn default_session_path() -> PathBuf {
    dirs_next::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("securevault")
        .join("session.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_ends_in_session_file() {
        let path = default_session_path();
        assert!(path.ends_with("securevault/session.json"));
    }

    #[test]
    fn test_explicit_path() {
        let config = SessionConfig::at("/tmp/vault/session.json");
        assert_eq!(config.path, PathBuf::from("/tmp/vault/session.json"));
    }
}

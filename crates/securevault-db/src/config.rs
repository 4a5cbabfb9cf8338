//! Account store configuration

use serde::{Deserialize, Serialize};

/// Default name of the remote accounts collection
pub const DEFAULT_TABLE: &str = "accounts";

/// Remote store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Project URL of the hosted store, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Public (anon) API key sent with every request
    pub api_key: String,
    /// Name of the accounts collection
    pub table: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: env_any(&["SECUREVAULT_STORE_URL", "SUPABASE_URL"])
                .unwrap_or_else(|| "http://localhost:54321".to_string()),
            api_key: env_any(&["SECUREVAULT_STORE_KEY", "SUPABASE_ANON_KEY"]).unwrap_or_default(),
            table: std::env::var("SECUREVAULT_STORE_TABLE")
                .unwrap_or_else(|_| DEFAULT_TABLE.to_string()),
            timeout_secs: std::env::var("SECUREVAULT_STORE_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl StoreConfig {
    /// Create config from environment variables, loading `.env` first
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::default()
    }

    /// Config pointing at an explicit endpoint
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            table: DEFAULT_TABLE.to_string(),
            timeout_secs: 30,
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// REST endpoint of the accounts collection
    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), self.table)
    }

    /// API key with all but the first four characters masked, for logging
    pub fn api_key_masked(&self) -> String {
        mask_key(&self.api_key)
    }
}

fn env_any(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.is_empty() && value != "undefined")
}

fn mask_key(key: &str) -> String {
    if key.is_empty() {
        return "<unset>".to_string();
    }
    let visible: String = key.chars().take(4).collect();
    format!("{}***", visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url() {
        let config = StoreConfig::new("https://vault.example.co/", "anon").with_table("securevault");
        assert_eq!(config.table_url(), "https://vault.example.co/rest/v1/securevault");
    }

    #[test]
    fn test_mask_key() {
        let config = StoreConfig::new("http://localhost", "sb_publishable_secret");
        let masked = config.api_key_masked();
        assert_eq!(masked, "sb_p***");
        assert!(!masked.contains("secret"));
    }

    #[test]
    fn test_mask_empty_key() {
        assert_eq!(mask_key(""), "<unset>");
    }
}

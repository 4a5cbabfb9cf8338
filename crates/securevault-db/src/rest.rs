//! PostgREST account store
//!
//! Speaks the hosted store's REST dialect: filters go in the query string as
//! `column=eq.value`, writes ask for `Prefer: return=representation` so the
//! affected rows come back in the response body.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use securevault_types::Account;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::config::StoreConfig;
use crate::error::{DbError, DbResult};
use crate::models::AccountUpdate;
use crate::AccountStore;

/// Unique-violation SQLSTATE reported by the store
const UNIQUE_VIOLATION: &str = "23505";

/// Error body returned by PostgREST
#[derive(Debug, Default, Deserialize)]
struct RemoteError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Account store backed by the hosted REST interface
#[derive(Debug, Clone)]
pub struct RestAccountStore {
    config: StoreConfig,
    client: Client,
}

impl RestAccountStore {
    /// Build a store client from configuration
    pub fn new(config: StoreConfig) -> DbResult<Self> {
        if config.url.trim().is_empty() {
            return Err(DbError::Configuration("store URL is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DbError::Configuration(e.to_string()))?;

        debug!(
            url = %config.url,
            table = %config.table,
            key = %config.api_key_masked(),
            "Account store client ready"
        );

        Ok(Self { config, client })
    }

    /// Build a store client from environment variables
    pub fn from_env() -> DbResult<Self> {
        Self::new(StoreConfig::from_env())
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn request(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
    }

    async fn select(&self, filters: &[(&str, String)]) -> DbResult<Option<Account>> {
        let mut query = vec![("select", "*".to_string())];
        query.extend(filters.iter().map(|(k, v)| (*k, v.clone())));

        let response = self
            .request(self.client.get(self.config.table_url()))
            .query(&query)
            .send()
            .await?;

        let rows = decode_rows(response).await?;
        Ok(rows.into_iter().next())
    }
}

#[async_trait]
impl AccountStore for RestAccountStore {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> DbResult<Option<Account>> {
        self.select(&[("email", eq(email))]).await
    }

    #[instrument(skip(self, pin))]
    async fn find_by_credentials(&self, email: &str, pin: &str) -> DbResult<Option<Account>> {
        self.select(&[("email", eq(email)), ("pin", eq(pin))]).await
    }

    #[instrument(skip(self, candidate), fields(email = %candidate.email))]
    async fn insert(&self, candidate: &Account) -> DbResult<Account> {
        let row = candidate.opening();

        let response = self
            .request(self.client.post(self.config.table_url()))
            .header("Prefer", "return=representation")
            .json(&[&row])
            .send()
            .await?;

        let rows = decode_rows(response).await?;
        let created = rows
            .into_iter()
            .next()
            .ok_or_else(|| DbError::Serialization("insert returned no row".to_string()))?;

        debug!("Account row created");
        Ok(created)
    }

    #[instrument(skip(self, update))]
    async fn apply_update(&self, email: &str, update: &AccountUpdate) -> DbResult<Account> {
        if update.is_empty() {
            return Err(DbError::InvalidInput("update changes no columns".to_string()));
        }

        let mut query = vec![("email", eq(email))];
        if let Some(expected) = update.expected_balance {
            query.push(("balance", eq(&expected.normalize().to_string())));
        }

        let response = self
            .request(self.client.patch(self.config.table_url()))
            .header("Prefer", "return=representation")
            .query(&query)
            .json(update)
            .send()
            .await?;

        let rows = decode_rows(response).await?;
        if let Some(updated) = rows.into_iter().next() {
            return Ok(updated);
        }

        // Zero rows matched: tell a missing row apart from a moved balance
        match self.find_by_email(email).await? {
            Some(_) if update.expected_balance.is_some() => Err(DbError::Conflict(format!(
                "balance of {} changed since it was read",
                email
            ))),
            _ => Err(DbError::NotFound(format!("account {}", email))),
        }
    }
}

fn eq(value: &str) -> String {
    format!("eq.{}", value)
}

async fn decode_rows(response: Response) -> DbResult<Vec<Account>> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        return Ok(serde_json::from_str::<Vec<Account>>(&body)?);
    }

    Err(remote_error(status, &body))
}

fn remote_error(status: StatusCode, body: &str) -> DbError {
    let parsed: RemoteError = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .message
        .clone()
        .unwrap_or_else(|| body.trim().to_string());

    if status == StatusCode::CONFLICT || parsed.code.as_deref() == Some(UNIQUE_VIOLATION) {
        return DbError::Duplicate(message);
    }

    DbError::Remote {
        status: status.as_u16(),
        message,
    }
}

//! SecureVault Guard - Phishing Analysis
//!
//! Scores suspicious links and bank messages with an LLM and validates the
//! answer before anyone sees it.
//!
//! # Key Principle
//!
//! **Classifier output is untrusted.** Every answer is parsed into a typed
//! [`RiskVerdict`] and range-checked. Anything that does not survive that,
//! and any transport failure on the way, is replaced by the fixed degraded
//! verdict so the caller always gets something to show.

pub mod analyzer;
pub mod education;
pub mod prompt;

use securevault_types::{RiskLevel, RiskVerdict};
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

pub use analyzer::{degraded_verdict, ThreatAnalyzer};
pub use education::{attacks, AttackType, ATTACKS};
pub use prompt::{build_prompt, verdict_schema};

/// Errors that can occur while validating classifier output
#[derive(Error, Debug)]
pub enum GuardError {
    #[error("Invalid JSON structure: {message}")]
    InvalidJson { message: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Risk percentage {value} outside 0-100")]
    OutOfRange { value: f64 },

    #[error("Unknown risk level: {level}")]
    UnknownLevel { level: String },

    #[error("Classifier unavailable: {0}")]
    Classifier(#[from] securevault_llm::LLMError),
}

pub type Result<T> = std::result::Result<T, GuardError>;

/// Verdict as the classifier sends it, before validation
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVerdict {
    risk_percentage: Option<f64>,
    level: Option<String>,
    analysis: Option<String>,
    vulnerabilities: Option<Vec<String>>,
}

/// Parse and validate a classifier answer
///
/// All four fields must be present, the percentage must lie in `0..=100`
/// and the level must be one of `Low`, `Medium`, `High`.
pub fn parse_verdict(text: &str) -> Result<RiskVerdict> {
    let raw: RawVerdict =
        serde_json::from_str(text.trim()).map_err(|e| GuardError::InvalidJson {
            message: e.to_string(),
        })?;

    let risk_percentage = raw.risk_percentage.ok_or_else(|| missing("riskPercentage"))?;
    if !risk_percentage.is_finite() || !(0.0..=100.0).contains(&risk_percentage) {
        return Err(GuardError::OutOfRange {
            value: risk_percentage,
        });
    }

    let level = raw.level.ok_or_else(|| missing("level"))?;
    let level = RiskLevel::from_str(&level).map_err(|_| GuardError::UnknownLevel { level })?;

    Ok(RiskVerdict {
        risk_percentage,
        level,
        analysis: raw.analysis.ok_or_else(|| missing("analysis"))?,
        vulnerabilities: raw.vulnerabilities.ok_or_else(|| missing("vulnerabilities"))?,
        degraded: false,
    })
}

fn missing(field: &str) -> GuardError {
    GuardError::MissingField {
        field: field.to_string(),
    }
}

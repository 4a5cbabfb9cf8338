//! Threat scan types
//!
//! A [`RiskVerdict`] is produced either by the external classifier or by the
//! degraded-mode fallback; `degraded` tells the two apart. A [`ThreatLog`]
//! pairs one verdict with the input that produced it.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::TypesError;

/// What was submitted for analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanKind {
    /// A URL
    Link,
    /// An SMS or email body
    Message,
}

impl fmt::Display for ScanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Link => write!(f, "link"),
            Self::Message => write!(f, "message"),
        }
    }
}

impl FromStr for ScanKind {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "link" | "url" => Ok(Self::Link),
            "message" | "sms" | "email" => Ok(Self::Message),
            other => Err(TypesError::UnknownScanKind(other.to_string())),
        }
    }
}

/// Coarse risk bucket reported alongside the percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// All values, in the order the classifier schema lists them
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| TypesError::UnknownRiskLevel(s.to_string()))
    }
}

/// Phishing risk assessment for one scanned input
///
/// `level` and `risk_percentage` come from the classifier as-is and are not
/// reconciled with each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskVerdict {
    /// Risk score, 0 to 100 inclusive
    pub risk_percentage: f64,
    pub level: RiskLevel,
    /// Free-text explanation
    pub analysis: String,
    /// Specific red flags found, may be empty
    pub vulnerabilities: Vec<String>,
    /// Set when this verdict is the fallback rather than a classifier answer
    #[serde(default, skip_serializing_if = "is_false")]
    pub degraded: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Record of one analysis invocation, kept in `Account::threat_logs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatLog {
    /// ISO-8601 timestamp of the scan
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: ScanKind,
    /// Raw user-supplied URL or message
    pub input: String,
    pub result: RiskVerdict,
}

impl ThreatLog {
    /// Stamp a verdict with the current time
    pub fn record(kind: ScanKind, input: impl Into<String>, result: RiskVerdict) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            kind,
            input: input.into(),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict() -> RiskVerdict {
        RiskVerdict {
            risk_percentage: 87.0,
            level: RiskLevel::High,
            analysis: "Lookalike domain".to_string(),
            vulnerabilities: vec!["Domain spoofing".to_string()],
            degraded: false,
        }
    }

    #[test]
    fn test_verdict_wire_names() {
        let json = serde_json::to_value(verdict()).unwrap();
        assert_eq!(json["riskPercentage"].as_f64(), Some(87.0));
        assert_eq!(json["level"], "High");
        assert!(json.get("degraded").is_none());

        let decoded: RiskVerdict = serde_json::from_value(serde_json::json!({
            "riskPercentage": 12,
            "level": "Low",
            "analysis": "Official domain",
            "vulnerabilities": []
        }))
        .unwrap();
        assert_eq!(decoded.risk_percentage, 12.0);
        assert!(!decoded.degraded);
    }

    #[test]
    fn test_threat_log_shape() {
        let log = ThreatLog::record(ScanKind::Message, "Your account is locked", verdict());
        let json = serde_json::to_value(&log).unwrap();

        assert_eq!(json["type"], "message");
        assert_eq!(json["input"], "Your account is locked");
        assert!(log.timestamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&log.timestamp).is_ok());
    }

    #[test]
    fn test_fallback_log_keeps_degraded_flag() {
        let fallback = RiskVerdict {
            degraded: true,
            ..verdict()
        };
        let log = ThreatLog::record(ScanKind::Link, "http://x.example", fallback);
        let json = serde_json::to_value(&log).unwrap();

        assert_eq!(json["result"]["degraded"], true);
        let decoded: ThreatLog = serde_json::from_value(json).unwrap();
        assert!(decoded.result.degraded);
    }

    #[test]
    fn test_parse_kinds_and_levels() {
        assert_eq!("link".parse::<ScanKind>().unwrap(), ScanKind::Link);
        assert_eq!("SMS".parse::<ScanKind>().unwrap(), ScanKind::Message);
        assert!("pdf".parse::<ScanKind>().is_err());

        assert_eq!("Medium".parse::<RiskLevel>().unwrap(), RiskLevel::Medium);
        assert!("medium".parse::<RiskLevel>().is_err());
    }
}

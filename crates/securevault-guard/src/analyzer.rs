//! Threat analyzer

use std::sync::Arc;

use securevault_llm::{CompletionRequest, LLMProvider, LLMRouter, Message};
use securevault_types::{RiskLevel, RiskVerdict, ScanKind};
use tracing::{debug, warn};

use crate::prompt::{build_prompt, verdict_schema};
use crate::{parse_verdict, Result};

/// Explanation shown when no classifier answer could be used
pub const DEGRADED_ANALYSIS: &str =
    "Unable to reach the AI engine for real-time analysis. Please exercise caution.";

/// Red flags listed on the degraded verdict
pub const DEGRADED_VULNERABILITIES: [&str; 2] =
    ["AI connection timeout", "Manual verification recommended"];

/// The verdict returned whenever classification fails
pub fn degraded_verdict() -> RiskVerdict {
    RiskVerdict {
        risk_percentage: 50.0,
        level: RiskLevel::Medium,
        analysis: DEGRADED_ANALYSIS.to_string(),
        vulnerabilities: DEGRADED_VULNERABILITIES
            .iter()
            .map(|v| v.to_string())
            .collect(),
        degraded: true,
    }
}

/// Scores links and messages with the configured provider
#[derive(Clone)]
pub struct ThreatAnalyzer {
    provider: Arc<dyn LLMProvider>,
}

impl ThreatAnalyzer {
    pub fn new(provider: Arc<dyn LLMProvider>) -> Self {
        Self { provider }
    }

    /// Analyzer over whatever provider the environment selects
    pub fn from_env() -> Self {
        Self::from_router(&LLMRouter::from_env())
    }

    pub fn from_router(router: &LLMRouter) -> Self {
        Self::new(router.provider().clone())
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Classify `content`; never fails
    ///
    /// Any transport, status, parse or validation failure yields
    /// [`degraded_verdict`].
    pub async fn analyze(&self, kind: ScanKind, content: &str) -> RiskVerdict {
        match self.try_analyze(kind, content).await {
            Ok(verdict) => verdict,
            Err(e) => {
                warn!(
                    kind = %kind,
                    provider = self.provider.name(),
                    error = %e,
                    "Threat analysis degraded"
                );
                degraded_verdict()
            }
        }
    }

    /// Classify `content`, surfacing the reason on failure
    pub async fn try_analyze(&self, kind: ScanKind, content: &str) -> Result<RiskVerdict> {
        let request = CompletionRequest::new(vec![Message::user(build_prompt(kind, content))])
            .with_response_schema(verdict_schema());

        let response = self.provider.complete(request).await?;
        debug!(
            kind = %kind,
            tokens = response.usage.total_tokens,
            "Classifier answered"
        );

        parse_verdict(&response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degraded_verdict_shape() {
        let verdict = degraded_verdict();
        assert_eq!(verdict.risk_percentage, 50.0);
        assert_eq!(verdict.level, RiskLevel::Medium);
        assert_eq!(verdict.analysis, DEGRADED_ANALYSIS);
        assert_eq!(
            verdict.vulnerabilities,
            vec!["AI connection timeout", "Manual verification recommended"]
        );
        assert!(verdict.degraded);
    }
}

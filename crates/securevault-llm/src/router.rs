//! LLM Router - Selects the provider from configuration

use std::sync::Arc;

use crate::providers::*;
use crate::types::*;

/// The LLM Router selects and holds the configured provider
pub struct LLMRouter {
    provider: Arc<dyn LLMProvider>,
    kind: ProviderKind,
}

impl LLMRouter {
    /// Create a router with a specific provider
    pub fn new(provider: Arc<dyn LLMProvider>) -> Self {
        let kind = provider.kind();
        Self { provider, kind }
    }

    /// Create a router from environment variables
    ///
    /// Reads `SECUREVAULT_LLM_PROVIDER` to select the provider:
    /// - `gemini` (default): Google Gemini API, needs `GEMINI_API_KEY`
    /// - `deterministic`: No LLM, every scan gets the degraded verdict
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let provider_name = std::env::var("SECUREVAULT_LLM_PROVIDER")
            .unwrap_or_else(|_| "gemini".to_string());

        let kind = ProviderKind::from_str(&provider_name).unwrap_or_else(|| {
            tracing::warn!(provider = %provider_name, "Unknown LLM provider, using gemini");
            ProviderKind::Gemini
        });

        Self::from_kind(kind)
    }

    /// Create a router for a specific provider kind
    pub fn from_kind(kind: ProviderKind) -> Self {
        let provider: Arc<dyn LLMProvider> = match kind {
            ProviderKind::Gemini => {
                if let Some(p) = GeminiProvider::from_env() {
                    Arc::new(p)
                } else {
                    tracing::warn!("Gemini API key not found, using deterministic fallback");
                    Arc::new(DeterministicProvider::new())
                }
            }
            ProviderKind::Deterministic => Arc::new(DeterministicProvider::new()),
        };

        let kind = provider.kind();
        Self { provider, kind }
    }

    /// Get the current provider
    pub fn provider(&self) -> &Arc<dyn LLMProvider> {
        &self.provider
    }

    /// Get the provider kind actually in use
    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    /// Check if the provider is available
    pub async fn is_available(&self) -> bool {
        self.provider.is_available().await
    }

    /// Complete a request using the current provider
    pub async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        self.provider.complete(request).await
    }
}

impl Default for LLMRouter {
    fn default() -> Self {
        Self::from_env()
    }
}

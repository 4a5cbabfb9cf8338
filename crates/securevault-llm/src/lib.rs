//! SecureVault LLM - Provider Abstraction
//!
//! One interface over the model that classifies suspicious links and
//! messages:
//!
//! - Google Gemini (`generateContent`, JSON mode with a response schema)
//! - Deterministic fallback when no API key is configured
//!
//! ## Key Design Principles
//!
//! 1. The model only scores content, it never acts on an account
//! 2. All outputs are validated by the caller before use
//! 3. No retries: a failed call is reported once and the caller degrades

pub mod providers;
pub mod router;
pub mod types;

pub use providers::*;
pub use router::*;
pub use types::*;

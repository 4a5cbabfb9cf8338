//! Classifier prompts and response schema

use securevault_types::{RiskLevel, ScanKind};
use serde_json::{json, Value};

/// Prompt for one scan: the fixed instruction for `kind` around `content`
pub fn build_prompt(kind: ScanKind, content: &str) -> String {
    match kind {
        ScanKind::Link => format!(
            "Analyze this bank-related URL for phishing vulnerabilities and suspicious patterns: {}. \
             Check for domain spoofing, unusual TLDs, known phishing signatures, and deceptive structures.",
            content
        ),
        ScanKind::Message => format!(
            "Analyze this communication (SMS/Email) purportedly from a bank for phishing attempts: \"{}\". \
             Look for: artificial urgency, threats of account closure, requests for sensitive credentials \
             (PIN, OTP, passwords), unusual sender phrasing, and suspicious calls to action.",
            content
        ),
    }
}

/// Response schema in Gemini's OpenAPI subset
pub fn verdict_schema() -> Value {
    let levels: Vec<&str> = RiskLevel::ALL.iter().map(RiskLevel::as_str).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "riskPercentage": {
                "type": "NUMBER",
                "description": "Risk score from 0 to 100"
            },
            "level": {
                "type": "STRING",
                "enum": levels
            },
            "analysis": {
                "type": "STRING",
                "description": "Detailed AI explanation of the analysis"
            },
            "vulnerabilities": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of specific vulnerabilities or red flags found"
            }
        },
        "required": ["riskPercentage", "level", "analysis", "vulnerabilities"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_prompt_embeds_url() {
        let prompt = build_prompt(ScanKind::Link, "http://sbi-kyc-update.xyz/login");
        assert!(prompt.contains("http://sbi-kyc-update.xyz/login"));
        assert!(prompt.contains("domain spoofing"));
        assert!(prompt.contains("unusual TLDs"));
    }

    #[test]
    fn test_message_prompt_quotes_content() {
        let prompt = build_prompt(ScanKind::Message, "Your account will be blocked today");
        assert!(prompt.contains("\"Your account will be blocked today\""));
        assert!(prompt.contains("artificial urgency"));
        assert!(prompt.contains("(PIN, OTP, passwords)"));
    }

    #[test]
    fn test_schema_lists_levels() {
        let schema = verdict_schema();
        assert_eq!(schema["properties"]["level"]["enum"], json!(["Low", "Medium", "High"]));
        assert_eq!(schema["required"].as_array().map(Vec::len), Some(4));
    }
}

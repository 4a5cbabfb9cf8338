//! Security briefings
//!
//! Static catalogue of the attack types the analyzer looks for, shown to
//! users alongside scan results.

use serde::Serialize;

/// One attack type and how to spot it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttackType {
    pub title: &'static str,
    /// Technical definition
    pub description: &'static str,
    /// Primary vector
    pub cause: &'static str,
    /// Countermeasure
    pub detection: &'static str,
}

pub const ATTACKS: [AttackType; 4] = [
    AttackType {
        title: "Domain Spoofing",
        description: "Malicious entities replicate authentic digital interfaces to harvest high-level credentials.",
        cause: "Exploitation of visual similarity and human pattern recognition.",
        detection: "Verify encryption certificates and character-level domain authenticity.",
    },
    AttackType {
        title: "Smishing Protocol",
        description: "Urgent telecommunication alerts designed to provoke immediate, unverified actions.",
        cause: "Engineered urgency through simulated account emergencies.",
        detection: "SecureVault communicates sensitive updates exclusively through the authorized application.",
    },
    AttackType {
        title: "Precision Phishing",
        description: "Highly targeted data extraction based on harvested social and professional intelligence.",
        cause: "Detailed reconnaissance of target metadata.",
        detection: "Analyze internal communications for uncharacteristic linguistic patterns.",
    },
    AttackType {
        title: "Vishing (Voice Hijacking)",
        description: "Simulated authority figures requesting bypass credentials or transaction overrides.",
        cause: "Social engineering via telephonic pressure.",
        detection: "SecureVault personnel will never request PIN or password credentials via voice link.",
    },
];

pub fn attacks() -> &'static [AttackType] {
    &ATTACKS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue() {
        let titles: Vec<&str> = attacks().iter().map(|a| a.title).collect();
        assert_eq!(
            titles,
            ["Domain Spoofing", "Smishing Protocol", "Precision Phishing", "Vishing (Voice Hijacking)"]
        );
        assert!(attacks()
            .iter()
            .all(|a| !a.description.is_empty() && !a.cause.is_empty() && !a.detection.is_empty()));
    }
}

//! Communication strategy derivation.

use serde::{Deserialize, Serialize};

use crate::profiles::Profile;

/// How to approach a contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub approach: String,
    pub timing: String,
    pub channel: String,
    pub tone: String,
    pub dos: Vec<String>,
    pub donts: Vec<String>,
}

/// Policy that turns a resolved profile into a strategy.
///
/// Implementations must not fail and must not have side effects.
pub trait StrategyPolicy {
    fn name(&self) -> &'static str;
    fn derive(&self, profile: &Profile) -> Strategy;
}

/// Fixed professional-outreach policy. Ignores profile content.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPolicy;

impl StrategyPolicy for StandardPolicy {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn derive(&self, _profile: &Profile) -> Strategy {
        Strategy {
            approach: "Be professional and respectful. Focus on mutual value and clear communication."
                .to_string(),
            timing: "Standard business hours, allow 24-48 hours for response".to_string(),
            channel: "Professional email or LinkedIn message".to_string(),
            tone: "Professional and courteous".to_string(),
            dos: [
                "Be clear about your purpose",
                "Provide value in your outreach",
                "Respect their time and expertise",
                "Follow up appropriately",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            donts: [
                "Don't be overly casual if they prefer formality",
                "Don't be pushy or aggressive",
                "Don't ignore their areas of expertise",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// Derive a strategy with the standard policy.
pub fn derive(profile: &Profile) -> Strategy {
    StandardPolicy.derive(profile)
}

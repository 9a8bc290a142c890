//! Profile resolution: curated lookups with a generic fallback.
//!
//! Lookup is exact on the lowercased name. No trimming, no fuzzy or
//! substring matching; "Satya Nadella " is a different key from
//! "satya nadella".

pub mod curated;

use serde::{Deserialize, Serialize};
use tracing::debug;

use curated::CuratedEntry;

/// Confidence assigned to profiles taken from the curated table.
pub const CURATED_CONFIDENCE: f64 = 0.95;
/// Confidence assigned to synthesized fallback profiles.
pub const GENERIC_CONFIDENCE: f64 = 0.6;
/// Confidence used when a profile does not carry one.
pub const DEFAULT_CONFIDENCE: f64 = 0.7;

pub const CURATED_SOURCE: &str = "Demo Data - High Quality";
pub const GENERIC_SOURCE: &str = "Basic Analysis";

/// Resolved facts about a contact.
///
/// Every field except `name` has a named default, so a partially specified
/// profile (for example one deserialized from an external document) still
/// carries a value for everything the envelope assembler reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default = "defaults::company")]
    pub company: String,
    #[serde(default = "defaults::title")]
    pub title: String,
    #[serde(default = "defaults::location")]
    pub location: String,
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default = "defaults::skills")]
    pub skills: Vec<String>,
    #[serde(default = "defaults::interests")]
    pub interests: Vec<String>,
    #[serde(default = "defaults::communication_style")]
    pub communication_style: String,
    #[serde(default = "defaults::decision_making")]
    pub decision_making: String,
    #[serde(default = "defaults::personality_traits")]
    pub personality_traits: Vec<String>,
    #[serde(default = "defaults::confidence_score")]
    pub confidence_score: f64,
    #[serde(default = "defaults::data_sources")]
    pub data_sources: Vec<String>,
}

impl Profile {
    /// A profile for `name` with every other field at its named default.
    pub fn with_defaults(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            company: defaults::company(),
            title: defaults::title(),
            location: defaults::location(),
            experience: Vec::new(),
            skills: defaults::skills(),
            interests: defaults::interests(),
            communication_style: defaults::communication_style(),
            decision_making: defaults::decision_making(),
            personality_traits: defaults::personality_traits(),
            confidence_score: defaults::confidence_score(),
            data_sources: defaults::data_sources(),
        }
    }

    /// Synthesized fallback for a contact that is not in the curated table.
    /// `name` and `company` are kept exactly as given, blanks included.
    pub fn generic(name: &str, company: &str) -> Self {
        let experience = if company.is_empty() {
            "Professional experience".to_string()
        } else {
            format!("Professional experience at {company}")
        };
        Self {
            name: name.to_string(),
            company: company.to_string(),
            title: "Professional".to_string(),
            location: "Unknown".to_string(),
            experience: vec![experience],
            skills: owned_list(&["Professional Skills", "Industry Knowledge", "Communication"]),
            interests: owned_list(&["Professional Development", "Industry Trends"]),
            communication_style: "Professional and courteous".to_string(),
            decision_making: "Thoughtful and methodical".to_string(),
            personality_traits: owned_list(&["Professional", "Dedicated", "Goal-oriented"]),
            confidence_score: GENERIC_CONFIDENCE,
            data_sources: vec![GENERIC_SOURCE.to_string()],
        }
    }

    pub fn is_curated(&self) -> bool {
        self.data_sources.iter().any(|s| s == CURATED_SOURCE)
    }
}

impl From<&CuratedEntry> for Profile {
    fn from(entry: &CuratedEntry) -> Self {
        Self {
            name: entry.name.to_string(),
            company: entry.company.to_string(),
            title: entry.title.to_string(),
            location: entry.location.to_string(),
            experience: owned_list(entry.experience),
            skills: owned_list(entry.skills),
            interests: owned_list(entry.interests),
            communication_style: entry.communication_style.to_string(),
            decision_making: entry.decision_making.to_string(),
            personality_traits: owned_list(entry.personality_traits),
            confidence_score: CURATED_CONFIDENCE,
            data_sources: vec![CURATED_SOURCE.to_string()],
        }
    }
}

/// Resolve `name` against the curated table, falling back to a generic
/// profile. Never fails; an empty name is just another unknown key.
pub fn resolve(name: &str, company: &str) -> Profile {
    let key = name.to_lowercase();
    match curated::lookup(&key) {
        Some(entry) => {
            debug!("curated profile matched for key '{}'", key);
            Profile::from(entry)
        }
        None => {
            debug!("no curated profile for '{}', using generic profile", key);
            Profile::generic(name, company)
        }
    }
}

fn owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Named defaults for fields a profile may omit.
pub mod defaults {
    pub fn company() -> String {
        "Unknown".to_string()
    }

    pub fn title() -> String {
        "Professional".to_string()
    }

    pub fn location() -> String {
        "Unknown".to_string()
    }

    pub fn skills() -> Vec<String> {
        vec!["Industry expertise".to_string()]
    }

    pub fn interests() -> Vec<String> {
        vec!["Professional development".to_string()]
    }

    pub fn communication_style() -> String {
        "Professional and approachable".to_string()
    }

    pub fn decision_making() -> String {
        "Thoughtful and collaborative".to_string()
    }

    pub fn personality_traits() -> Vec<String> {
        vec!["Professional".to_string(), "Engaged".to_string()]
    }

    pub fn confidence_score() -> f64 {
        super::DEFAULT_CONFIDENCE
    }

    pub fn data_sources() -> Vec<String> {
        vec!["Demo Analysis".to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_match_is_case_insensitive() {
        for name in ["Satya Nadella", "satya nadella", "SATYA NADELLA", "sAtYa NaDeLlA"] {
            let profile = resolve(name, "");
            assert_eq!(profile.name, "Satya Nadella");
            assert_eq!(profile.title, "Chairman and CEO");
            assert_eq!(profile.confidence_score, CURATED_CONFIDENCE);
            assert_eq!(profile.data_sources, vec![CURATED_SOURCE.to_string()]);
        }
    }

    #[test]
    fn test_curated_sequences_are_exact() {
        for entry in curated::entries() {
            let profile = resolve(entry.name, "anything");
            assert_eq!(profile.skills, owned_list(entry.skills));
            assert_eq!(profile.interests, owned_list(entry.interests));
            assert_eq!(profile.personality_traits, owned_list(entry.personality_traits));
            assert!(profile.is_curated());
        }
    }

    #[test]
    fn test_curated_ignores_caller_company() {
        let profile = resolve("Reid Hoffman", "Some Other Co");
        assert_eq!(profile.company, "Greylock Partners");
    }

    #[test]
    fn test_generic_fallback() {
        let profile = resolve("Jane Smith", "TechCorp");
        assert_eq!(profile.name, "Jane Smith");
        assert_eq!(profile.company, "TechCorp");
        assert_eq!(profile.title, "Professional");
        assert_eq!(profile.location, "Unknown");
        assert_eq!(profile.confidence_score, GENERIC_CONFIDENCE);
        assert_eq!(profile.data_sources, vec![GENERIC_SOURCE.to_string()]);
        assert_eq!(
            profile.experience,
            vec!["Professional experience at TechCorp".to_string()]
        );
        assert!(!profile.is_curated());
    }

    #[test]
    fn test_generic_keeps_caller_case_and_blank_company() {
        let profile = resolve("jANE smith", "");
        assert_eq!(profile.name, "jANE smith");
        assert_eq!(profile.company, "");
        assert_eq!(profile.experience, vec!["Professional experience".to_string()]);
    }

    #[test]
    fn test_no_near_miss_matching() {
        for name in ["Satya Nadella ", " satya nadella", "Satya N. Nadella", "Satya"] {
            let profile = resolve(name, "Microsoft");
            assert_eq!(profile.confidence_score, GENERIC_CONFIDENCE, "{name:?}");
        }
    }

    #[test]
    fn test_empty_name_resolves_generic() {
        let profile = resolve("", "");
        assert_eq!(profile.name, "");
        assert_eq!(profile.title, "Professional");
    }

    #[test]
    fn test_partial_profile_deserializes_with_defaults() {
        let profile: Profile = serde_json::from_value(serde_json::json!({"name": "X"})).unwrap();
        assert_eq!(profile, Profile::with_defaults("X"));
        assert_eq!(profile.confidence_score, DEFAULT_CONFIDENCE);
        assert_eq!(profile.data_sources, vec!["Demo Analysis".to_string()]);
    }
}

//! Contact analysis: resolve a profile, derive a strategy, assemble the envelope.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::error::AnalysisFailure;
use crate::profiles::{self, Profile};
use crate::strategy::{StandardPolicy, Strategy, StrategyPolicy};

/// Fixed until motivations are derived from profile data.
const MOTIVATIONS: [&str; 2] = ["Professional growth", "Industry leadership"];

/// Inputs for one analysis.
///
/// `contact_url`, `email` and `context` are accepted and carried but do not
/// influence the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default, alias = "linkedin_url")]
    pub contact_url: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, alias = "additional_context")]
    pub context: String,
}

impl AnalysisRequest {
    pub fn new(name: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            company: company.into(),
            ..Default::default()
        }
    }

    pub fn with_contact_url(mut self, url: impl Into<String>) -> Self {
        self.contact_url = url.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub company: String,
    pub title: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub communication_style: String,
    pub decision_making: String,
    pub personality_traits: Vec<String>,
    pub motivations: Vec<String>,
}

/// The response returned for every successful analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub contact_info: ContactInfo,
    pub personality_profile: PersonalityProfile,
    pub communication_strategy: Strategy,
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    pub confidence_score: f64,
    pub data_sources: Vec<String>,
    pub analysis_timestamp: String,
}

impl Envelope {
    /// Assemble an envelope from a resolved profile and its strategy.
    ///
    /// Rejects profiles whose confidence score is not a number in [0, 1] or
    /// that carry no data source.
    pub fn assemble(
        profile: &Profile,
        strategy: Strategy,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, AnalysisFailure> {
        let score = profile.confidence_score;
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(AnalysisFailure::new(format!(
                "confidence score {score} for '{}' is outside [0, 1]",
                profile.name
            )));
        }
        if profile.data_sources.is_empty() {
            return Err(AnalysisFailure::new(format!(
                "profile for '{}' has no data sources",
                profile.name
            )));
        }

        Ok(Self {
            contact_info: ContactInfo {
                name: profile.name.clone(),
                company: profile.company.clone(),
                title: profile.title.clone(),
                location: profile.location.clone(),
            },
            personality_profile: PersonalityProfile {
                communication_style: profile.communication_style.clone(),
                decision_making: profile.decision_making.clone(),
                personality_traits: profile.personality_traits.clone(),
                motivations: MOTIVATIONS.iter().map(|m| m.to_string()).collect(),
            },
            communication_strategy: strategy,
            interests: profile.interests.clone(),
            skills: profile.skills.clone(),
            confidence_score: score,
            data_sources: profile.data_sources.clone(),
            analysis_timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Micros, true),
        })
    }
}

/// Runs the resolve → derive → assemble pipeline with a pluggable strategy policy.
#[derive(Clone)]
pub struct PersonalityAnalyzer {
    policy: Arc<dyn StrategyPolicy + Send + Sync>,
}

impl Default for PersonalityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonalityAnalyzer {
    pub fn new() -> Self {
        Self::with_policy(Arc::new(StandardPolicy))
    }

    pub fn with_policy(policy: Arc<dyn StrategyPolicy + Send + Sync>) -> Self {
        Self { policy }
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Analyze a contact. All work is synchronous; the async signature lets
    /// event-driven callers await it directly.
    pub async fn analyze_contact(
        &self,
        request: &AnalysisRequest,
    ) -> Result<Envelope, AnalysisFailure> {
        self.analyze_at(request, Utc::now())
    }

    /// Same as [`analyze_contact`](Self::analyze_contact) with an explicit clock.
    pub fn analyze_at(
        &self,
        request: &AnalysisRequest,
        now: DateTime<Utc>,
    ) -> Result<Envelope, AnalysisFailure> {
        info!("Analyzing contact: {}", request.name);

        let profile = profiles::resolve(&request.name, &request.company);
        debug!(
            "resolved '{}' (curated={}, confidence={})",
            profile.name,
            profile.is_curated(),
            profile.confidence_score
        );
        let strategy = self.policy.derive(&profile);

        Envelope::assemble(&profile, strategy, now).inspect_err(|e| {
            error!("Error analyzing contact: {}", e.message);
        })
    }
}

/// Analyze a contact with the standard policy.
pub async fn analyze(
    name: &str,
    company: &str,
    contact_url: &str,
    context: &str,
) -> Result<Envelope, AnalysisFailure> {
    let request = AnalysisRequest::new(name, company)
        .with_contact_url(contact_url)
        .with_context(context);
    PersonalityAnalyzer::new().analyze_contact(&request).await
}

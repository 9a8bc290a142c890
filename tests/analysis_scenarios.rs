//! End-to-end checks of the analysis engine entry point.

use chrono::{TimeZone, Utc};
use contact_profiler::analysis::{AnalysisRequest, PersonalityAnalyzer, analyze};
use contact_profiler::profiles::curated;

#[tokio::test]
async fn test_curated_contact_scenario() {
    let envelope = analyze("Satya Nadella", "Microsoft", "", "").await.unwrap();

    assert_eq!(envelope.contact_info.title, "Chairman and CEO");
    assert_eq!(envelope.contact_info.location, "Redmond, Washington");
    assert_eq!(envelope.confidence_score, 0.95);
    assert_eq!(envelope.data_sources, vec!["Demo Data - High Quality"]);
}

#[tokio::test]
async fn test_generic_contact_scenario() {
    let envelope = analyze("Jane Smith", "TechCorp", "", "VP of Engineering")
        .await
        .unwrap();

    assert_eq!(envelope.contact_info.name, "Jane Smith");
    assert_eq!(envelope.contact_info.company, "TechCorp");
    assert_eq!(envelope.contact_info.title, "Professional");
    assert_eq!(envelope.confidence_score, 0.6);
    assert_eq!(
        envelope.skills,
        vec!["Professional Skills", "Industry Knowledge", "Communication"]
    );
    assert_eq!(envelope.data_sources, vec!["Basic Analysis"]);
}

#[tokio::test]
async fn test_empty_inputs_do_not_fail() {
    // The engine does not validate names; callers reject blanks first.
    let envelope = analyze("", "", "", "").await.unwrap();

    assert_eq!(envelope.contact_info.name, "");
    assert_eq!(envelope.contact_info.company, "");
    assert_eq!(envelope.contact_info.title, "Professional");
    assert_eq!(envelope.confidence_score, 0.6);
}

#[tokio::test]
async fn test_every_curated_name_matches_any_case() {
    for name in curated::names() {
        for variant in [name.to_string(), name.to_uppercase(), name.to_lowercase()] {
            let envelope = analyze(&variant, "", "", "").await.unwrap();
            assert_eq!(envelope.contact_info.name, name);
            assert_eq!(envelope.confidence_score, 0.95);
        }
    }
}

#[tokio::test]
async fn test_strategy_shape_is_constant() {
    for name in ["Satya Nadella", "Reid Hoffman", "Jane Smith", ""] {
        let envelope = analyze(name, "Acme", "", "").await.unwrap();
        assert_eq!(envelope.communication_strategy.dos.len(), 4);
        assert_eq!(envelope.communication_strategy.donts.len(), 3);
    }
}

#[tokio::test]
async fn test_idempotent_apart_from_timestamp() {
    let analyzer = PersonalityAnalyzer::new();
    let request = AnalysisRequest::new("Reid Hoffman", "Greylock")
        .with_contact_url("https://linkedin.com/in/reidhoffman")
        .with_context("met at a conference");

    let first = analyzer.analyze_contact(&request).await.unwrap();
    let mut second = analyzer.analyze_contact(&request).await.unwrap();
    second.analysis_timestamp = first.analysis_timestamp.clone();
    assert_eq!(first, second);

    let now = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    assert_eq!(
        analyzer.analyze_at(&request, now).unwrap(),
        analyzer.analyze_at(&request, now).unwrap()
    );
}

#[tokio::test]
async fn test_inert_inputs_do_not_change_result() {
    let analyzer = PersonalityAnalyzer::new();
    let now = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();

    let bare = AnalysisRequest::new("Jane Smith", "TechCorp");
    let rich = bare
        .clone()
        .with_contact_url("https://linkedin.com/in/janesmith")
        .with_email("jane@techcorp.example")
        .with_context("VP of Engineering");

    assert_eq!(
        analyzer.analyze_at(&bare, now).unwrap(),
        analyzer.analyze_at(&rich, now).unwrap()
    );
}

#[tokio::test]
async fn test_envelope_serializes_every_field() {
    let envelope = analyze("Nobody In Particular", "", "", "").await.unwrap();
    let value = serde_json::to_value(&envelope).unwrap();

    for key in [
        "contact_info",
        "personality_profile",
        "communication_strategy",
        "interests",
        "skills",
        "confidence_score",
        "data_sources",
        "analysis_timestamp",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    for key in ["name", "company", "title", "location"] {
        assert!(value["contact_info"][key].is_string(), "missing contact_info.{key}");
    }
    for key in ["personality_traits", "motivations"] {
        assert!(value["personality_profile"][key].is_array());
    }
    for key in ["approach", "timing", "channel", "tone"] {
        assert!(value["communication_strategy"][key].is_string());
    }
    for key in ["dos", "donts"] {
        assert!(value["communication_strategy"][key].is_array());
    }
}

//! Markdown rendering of analysis results for human readers.

use std::fmt::Write;

use crate::analysis::Envelope;
use crate::error::AnalysisFailure;

pub const MISSING_NAME_MESSAGE: &str = "Please enter a contact name.";

/// Bullet list; an empty list renders as an explicit marker line.
pub fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        return "- None identified".to_string();
    }
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_markdown(envelope: &Envelope) -> String {
    let info = &envelope.contact_info;
    let personality = &envelope.personality_profile;
    let strategy = &envelope.communication_strategy;

    let mut out = String::new();
    let _ = writeln!(out, "# 👤 Contact Analysis: {}", info.name);
    let _ = writeln!(out);
    let _ = writeln!(out, "## 📋 Basic Information");
    let _ = writeln!(out, "- **Company:** {}", info.company);
    let _ = writeln!(out, "- **Title:** {}", info.title);
    let _ = writeln!(out, "- **Location:** {}", info.location);
    let _ = writeln!(
        out,
        "- **Confidence Score:** {:.1}%",
        envelope.confidence_score * 100.0
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "## 🧠 Personality Profile");
    section(&mut out, "### Communication Style", &personality.communication_style);
    section(&mut out, "### Decision Making Approach", &personality.decision_making);
    section(
        &mut out,
        "### Key Personality Traits",
        &format_list(&personality.personality_traits),
    );
    section(
        &mut out,
        "### Professional Motivations",
        &format_list(&personality.motivations),
    );

    let _ = writeln!(out, "## 💬 Communication Strategy");
    section(&mut out, "### Recommended Approach", &strategy.approach);
    section(&mut out, "### Optimal Timing", &strategy.timing);
    section(&mut out, "### Preferred Channel", &strategy.channel);
    section(&mut out, "### Tone Guidance", &strategy.tone);

    section(&mut out, "## 🎯 Interests & Topics", &format_list(&envelope.interests));
    section(&mut out, "## 💼 Skills & Expertise", &format_list(&envelope.skills));
    section(&mut out, "## ✅ Do's", &format_list(&strategy.dos));
    section(&mut out, "## ❌ Don'ts", &format_list(&strategy.donts));

    let _ = writeln!(out, "---");
    let _ = writeln!(
        out,
        "📊 **Data Sources:** {}  ",
        envelope.data_sources.join(", ")
    );
    let _ = write!(out, "⏰ **Analysis Time:** {}", envelope.analysis_timestamp);

    out.trim().to_string()
}

/// Rendering for an engine-side failure.
pub fn render_failure(failure: &AnalysisFailure) -> String {
    format!("❌ Error: {failure}")
}

/// Rendering for a blank name rejected before the engine runs.
pub fn render_missing_name() -> String {
    format!("❌ {MISSING_NAME_MESSAGE}")
}

fn section(out: &mut String, heading: &str, body: &str) {
    let _ = writeln!(out, "{heading}");
    let _ = writeln!(out, "{body}");
    let _ = writeln!(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisRequest, PersonalityAnalyzer};
    use chrono::{TimeZone, Utc};

    fn envelope_for(name: &str, company: &str) -> Envelope {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        PersonalityAnalyzer::new()
            .analyze_at(&AnalysisRequest::new(name, company), now)
            .unwrap()
    }

    #[test]
    fn test_format_list_empty_marker() {
        assert_eq!(format_list(&[]), "- None identified");
        assert_eq!(
            format_list(&["a".to_string(), "b".to_string()]),
            "- a\n- b"
        );
    }

    #[test]
    fn test_curated_report_sections() {
        let md = render_markdown(&envelope_for("Satya Nadella", "Microsoft"));
        assert!(md.starts_with("# 👤 Contact Analysis: Satya Nadella"));
        assert!(md.contains("- **Title:** Chairman and CEO"));
        assert!(md.contains("- **Confidence Score:** 95.0%"));
        assert!(md.contains("### Key Personality Traits\n- Empathetic Leader\n- Visionary"));
        assert!(md.contains("## ❌ Don'ts\n- Don't be overly casual"));
        assert!(md.contains("📊 **Data Sources:** Demo Data - High Quality  "));
        assert!(md.ends_with("⏰ **Analysis Time:** 2024-06-01T09:00:00.000000Z"));
    }

    #[test]
    fn test_empty_lists_render_marker() {
        let mut envelope = envelope_for("Jane Smith", "TechCorp");
        envelope.interests.clear();
        envelope.personality_profile.personality_traits.clear();
        let md = render_markdown(&envelope);
        assert!(md.contains("## 🎯 Interests & Topics\n- None identified"));
        assert!(md.contains("### Key Personality Traits\n- None identified"));
        assert!(md.contains("- **Confidence Score:** 60.0%"));
    }

    #[test]
    fn test_error_renderings_are_distinct() {
        let failure = render_failure(&AnalysisFailure::new("boom"));
        assert_eq!(failure, "❌ Error: Analysis failed: boom");
        assert_eq!(render_missing_name(), "❌ Please enter a contact name.");
        assert_ne!(failure, render_missing_name());
    }
}

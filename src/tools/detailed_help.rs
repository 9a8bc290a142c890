//! detailed_help tool handler to provide structured help for tools

use crate::error::{ProfilerError, Result};
use crate::profiles::curated;
use crate::server::ContactProfilerServer;
use rmcp::model::{CallToolRequestParam, CallToolResult};
use serde_json::json;

impl ContactProfilerServer {
    /// Handle the detailed_help tool call
    pub async fn handle_detailed_help(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        let args = request.arguments.ok_or_else(|| ProfilerError::Mcp {
            message: "Missing parameters".into(),
        })?;

        let tool = args.get("tool").and_then(|v| v.as_str()).ok_or_else(|| {
            ProfilerError::Validation {
                message: "'tool' parameter is required".into(),
            }
        })?;
        let format = args
            .get("format")
            .and_then(|v| v.as_str())
            .unwrap_or("full");

        let help = match tool {
            "analyze_contact" => json!({
                "name": "analyze_contact",
                "description": "Resolve a contact against the curated profile table (case-insensitive exact name match) or synthesize a generic profile, then return contact info, personality profile, communication strategy, interests, skills, confidence and provenance.",
                "arguments": {
                    "name": "string (required) — full name of the contact; blank names are rejected",
                    "company": "string — company; kept as given for generic profiles",
                    "contact_url": "string — profile URL (alias: linkedin_url); accepted, not used",
                    "email": "string — accepted, not used",
                    "context": "string — free-text notes (alias: additional_context); accepted, not used",
                    "format": "string — 'json' (structured envelope) | 'markdown' (rendered report)"
                },
                "returns": {
                    "contact_info": "{name, company, title, location}",
                    "personality_profile": "{communication_style, decision_making, personality_traits[], motivations[]}",
                    "communication_strategy": "{approach, timing, channel, tone, dos[], donts[]}",
                    "interests": "string[]",
                    "skills": "string[]",
                    "confidence_score": "number — 0.95 curated, 0.6 generic",
                    "data_sources": "string[]",
                    "analysis_timestamp": "string — RFC 3339 UTC"
                },
                "curated_contacts": curated::names(),
                "strategy_policy": self.analyzer.policy_name(),
                "examples": [{
                    "request": {"name": "analyze_contact", "arguments": {"name": "Satya Nadella", "company": "Microsoft"}},
                    "response": {"contact_info": {"title": "Chairman and CEO"}, "confidence_score": 0.95, "data_sources": ["Demo Data - High Quality"]}
                }]
            }),
            "detailed_help" => json!({
                "name": "detailed_help",
                "description": "Describe a tool's arguments and return shape.",
                "arguments": {
                    "tool": "string (required) — 'analyze_contact'|'detailed_help'",
                    "format": "string — 'compact'|'full' (default: 'full')"
                },
                "returns": {"name": "string", "description": "string", "arguments": "object", "returns": "object"}
            }),
            _ => {
                return Err(ProfilerError::Validation {
                    message: format!("Unknown tool: {}", tool),
                });
            }
        };

        let output = if format == "compact" {
            json!({
                "name": tool,
                "description": help.get("description").cloned().unwrap_or(json!("")),
                "arguments": help.get("arguments").cloned().unwrap_or(json!({}))
            })
        } else {
            help
        };

        Ok(CallToolResult::structured(output))
    }
}

use serde_json::{Map, Value, json};
use std::sync::Arc;

pub fn analyze_contact_schema() -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "name": {"type": "string", "description": "Full name of the contact"},
            "company": {"type": "string"},
            "contact_url": {"type": "string", "description": "Profile URL, e.g. LinkedIn"},
            "email": {"type": "string"},
            "context": {"type": "string", "description": "Free-text notes about the contact"},
            "format": {"type": "string", "enum": ["json", "markdown"]}
        },
        "required": ["name"]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}

pub fn analyze_contact_output_schema() -> Arc<Map<String, Value>> {
    let string_list = json!({"type": "array", "items": {"type": "string"}});
    let schema = json!({
        "type": "object",
        "properties": {
            "contact_info": {
                "type": "object",
                "properties": {
                    "name": {"type": "string"},
                    "company": {"type": "string"},
                    "title": {"type": "string"},
                    "location": {"type": "string"}
                },
                "required": ["name", "company", "title", "location"]
            },
            "personality_profile": {
                "type": "object",
                "properties": {
                    "communication_style": {"type": "string"},
                    "decision_making": {"type": "string"},
                    "personality_traits": string_list,
                    "motivations": string_list
                },
                "required": ["communication_style", "decision_making", "personality_traits", "motivations"]
            },
            "communication_strategy": {
                "type": "object",
                "properties": {
                    "approach": {"type": "string"},
                    "timing": {"type": "string"},
                    "channel": {"type": "string"},
                    "tone": {"type": "string"},
                    "dos": string_list,
                    "donts": string_list
                },
                "required": ["approach", "timing", "channel", "tone", "dos", "donts"]
            },
            "interests": string_list,
            "skills": string_list,
            "confidence_score": {"type": "number", "minimum": 0.0, "maximum": 1.0},
            "data_sources": string_list,
            "analysis_timestamp": {"type": "string", "format": "date-time"}
        },
        "required": [
            "contact_info", "personality_profile", "communication_strategy", "interests",
            "skills", "confidence_score", "data_sources", "analysis_timestamp"
        ]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}

pub fn detailed_help_schema() -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "tool": {"type": "string", "enum": ["analyze_contact", "detailed_help"]},
            "format": {"type": "string", "enum": ["compact", "full"], "default": "full"}
        }
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}

pub fn detailed_help_output_schema() -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "name": {"type": "string"},
            "description": {"type": "string"},
            "arguments": {"type": "object"},
            "returns": {"type": "object"}
        },
        "required": ["name", "description"]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}

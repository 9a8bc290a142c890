//! Domain-specific error types for contact-profiler

use serde_json::json;
use thiserror::Error;

/// The single failure kind the analysis engine returns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Analysis failed: {message}")]
pub struct AnalysisFailure {
    pub message: String,
}

impl AnalysisFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Main error type for the contact-profiler MCP server and CLI
#[derive(Error, Debug)]
pub enum ProfilerError {
    #[error("MCP protocol error: {message}")]
    Mcp { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid parameters: {message}")]
    InvalidParams { message: String },

    #[error("Analysis failed: {message}")]
    Analysis { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<AnalysisFailure> for ProfilerError {
    fn from(err: AnalysisFailure) -> Self {
        ProfilerError::Analysis {
            message: err.message,
        }
    }
}

impl From<anyhow::Error> for ProfilerError {
    fn from(err: anyhow::Error) -> Self {
        ProfilerError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ProfilerError {
    fn from(err: serde_json::Error) -> Self {
        ProfilerError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<rmcp::ErrorData> for ProfilerError {
    fn from(err: rmcp::ErrorData) -> Self {
        ProfilerError::Mcp {
            message: err.message.to_string(),
        }
    }
}

/// Convert ProfilerError to MCP error
impl From<ProfilerError> for rmcp::ErrorData {
    fn from(err: ProfilerError) -> Self {
        let (code, label, details) = match err {
            ProfilerError::Mcp { message } => (
                rmcp::model::ErrorCode::INVALID_PARAMS,
                "MCP protocol error",
                message,
            ),
            ProfilerError::Serialization { message } => (
                rmcp::model::ErrorCode::INTERNAL_ERROR,
                "Serialization error",
                message,
            ),
            ProfilerError::Validation { message } => (
                rmcp::model::ErrorCode::INVALID_PARAMS,
                "Validation error",
                message,
            ),
            ProfilerError::InvalidParams { message } => (
                rmcp::model::ErrorCode::INVALID_PARAMS,
                "Invalid parameters",
                message,
            ),
            ProfilerError::Analysis { message } => (
                rmcp::model::ErrorCode::INTERNAL_ERROR,
                "Analysis error",
                message,
            ),
            ProfilerError::Internal { message } => (
                rmcp::model::ErrorCode::INTERNAL_ERROR,
                "Internal error",
                message,
            ),
        };

        rmcp::ErrorData {
            code,
            message: format!("{label}: {details}").into(),
            data: Some(json!({ "details": details })),
        }
    }
}

/// Result type alias for contact-profiler operations
pub type Result<T> = std::result::Result<T, ProfilerError>;

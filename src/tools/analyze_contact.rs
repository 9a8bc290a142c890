//! analyze_contact tool handler

use crate::analysis::AnalysisRequest;
use crate::config::OutputFormat;
use crate::error::{ProfilerError, Result};
use crate::render;
use crate::server::ContactProfilerServer;
use rmcp::model::{CallToolRequestParam, CallToolResult, Content};

/// Parameters for the analyze_contact tool
#[derive(Debug, serde::Deserialize)]
pub struct AnalyzeContactParams {
    #[serde(flatten)]
    pub request: AnalysisRequest,
    #[serde(default)]
    pub format: Option<String>,
}

impl ContactProfilerServer {
    /// Handle the analyze_contact tool call
    pub async fn handle_analyze_contact(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        let args = request.arguments.ok_or_else(|| ProfilerError::Mcp {
            message: "Missing parameters".into(),
        })?;
        let params: AnalyzeContactParams = serde_json::from_value(serde_json::Value::Object(args))
            .map_err(|e| ProfilerError::InvalidParams {
                message: format!("Invalid parameters: {}", e),
            })?;

        // Blank names are rejected here, before the engine sees them.
        if params.request.name.trim().is_empty() {
            return Err(ProfilerError::Validation {
                message: render::MISSING_NAME_MESSAGE.to_string(),
            });
        }

        let format = match params.format.as_deref() {
            Some(f) => OutputFormat::parse(f).ok_or_else(|| ProfilerError::InvalidParams {
                message: format!("Unknown format '{}', expected 'json' or 'markdown'", f),
            })?,
            None => self.config.presentation.default_format,
        };

        tracing::info!(
            "analyze_contact called: name={}, company={}, format={}",
            params.request.name,
            params.request.company,
            format.as_str()
        );

        let envelope = self.analyzer.analyze_contact(&params.request).await?;

        match format {
            OutputFormat::Markdown => Ok(CallToolResult::success(vec![Content::text(
                render::render_markdown(&envelope),
            )])),
            OutputFormat::Json => {
                let mut result = CallToolResult::structured(serde_json::to_value(&envelope)?);
                if self.config.presentation.include_markdown {
                    result
                        .content
                        .push(Content::text(render::render_markdown(&envelope)));
                }
                Ok(result)
            }
        }
    }
}

use crate::server::ContactProfilerServer;
use rmcp::{
    ErrorData as McpError,
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Implementation, InitializeRequestParam,
        InitializeResult, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo, Tool, ToolsCapability,
    },
    service::{RequestContext, RoleServer},
};
use tracing::info;

impl ContactProfilerServer {
    /// Tool descriptors advertised by tools/list
    pub fn tools(&self) -> Vec<Tool> {
        vec![
            Tool {
                name: "analyze_contact".into(),
                title: Some("Analyze Contact".into()),
                description: Some(
                    "Personality profile and communication strategy for a named contact".into(),
                ),
                input_schema: crate::schemas::analyze_contact_schema(),
                icons: None,
                annotations: None,
                output_schema: Some(crate::schemas::analyze_contact_output_schema()),
                meta: None,
            },
            Tool {
                name: "detailed_help".into(),
                title: Some("Detailed Help".into()),
                description: Some("Get detailed help for a specific tool".into()),
                input_schema: crate::schemas::detailed_help_schema(),
                icons: None,
                annotations: None,
                output_schema: Some(crate::schemas::detailed_help_output_schema()),
                meta: None,
            },
        ]
    }
}

impl ServerHandler for ContactProfilerServer {
    fn get_info(&self) -> ServerInfo {
        let server = &self.config.server;
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: server.name.clone(),
                title: Some(server.title.clone()),
                version: server.version.clone(),
                website_url: None,
                icons: None,
            },
            instructions: Some(
                "Call analyze_contact with a contact's name (and optionally company) to get a \
                 personality profile and outreach strategy."
                    .to_string(),
            ),
            ..Default::default()
        }
    }

    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        let mut info = self.get_info();
        info.protocol_version = request.protocol_version.clone();
        Ok(info)
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("tools/list requested");

        Ok(ListToolsResult {
            tools: self.tools(),
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        match request.name.as_ref() {
            "analyze_contact" => self
                .handle_analyze_contact(request)
                .await
                .map_err(|e| e.into()),
            "detailed_help" => self
                .handle_detailed_help(request)
                .await
                .map_err(|e| e.into()),
            _ => Err(McpError {
                code: rmcp::model::ErrorCode::METHOD_NOT_FOUND,
                message: format!("Unknown tool: {}", request.name).into(),
                data: None,
            }),
        }
    }
}

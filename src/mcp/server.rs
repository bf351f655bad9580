use rmcp::{
    model::*, service::RequestContext, ErrorData as McpError, RoleServer, ServerHandler,
    ServiceExt,
};
use serde_json::Value;
use tracing::instrument;

use crate::init::AppContext;
use crate::mcp::dispatch::Dispatcher;
use crate::mcp::types::{ToolContent, ToolResult};

/// MCP server exposing the robot tools.
///
/// Listing and calling go through the registry and [`Dispatcher`]; tool
/// failures are returned as `isError` results, never as protocol errors.
#[derive(Clone)]
pub struct ReachyServer {
    dispatcher: Dispatcher,
}

impl ReachyServer {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn from_context(ctx: &AppContext) -> Self {
        Self::new(ctx.dispatcher.clone())
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Registry as rmcp tool descriptors.
    pub fn tools(&self) -> Vec<Tool> {
        self.dispatcher
            .definitions()
            .iter()
            .map(|def| Tool::new(def.name, def.description, def.input_schema.clone()))
            .collect()
    }
}

impl From<ToolResult> for CallToolResult {
    fn from(result: ToolResult) -> Self {
        let content: Vec<Content> = result
            .content
            .iter()
            .map(|block| match block {
                ToolContent::Text { text } => Content::text(text.clone()),
                ToolContent::Json { .. } => Content::text(block.render()),
            })
            .collect();

        if result.is_error {
            CallToolResult::error(content)
        } else {
            CallToolResult::success(content)
        }
    }
}

impl ServerHandler for ReachyServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "reachy-mcp".to_string(),
                title: Some("Reachy Mini Control".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                r#"# Reachy Mini Control

Tools for the Reachy Mini robot daemon.

- Start a session with daemon_status; use daemon_wakeup to fully wake the robot.
- move_set_target moves only the joints you pass (angles in degrees, duration in seconds).
- play_emotion / play_dance play recorded moves; list_emotions / list_dances list them.
- shutdown_reachy stops running moves, puts the robot to sleep and stops the daemon.
- Upstream HTTP status codes are returned as data; check `status` in each response."#
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    #[instrument(name = "mcp.call_tool", skip_all, fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args = request.arguments.map(Value::Object).unwrap_or(Value::Null);
        let result = self.dispatcher.invoke(&request.name, args).await;
        Ok(result.into())
    }
}

/// Run MCP server on stdio transport.
pub async fn run_mcp_server(ctx: AppContext) -> anyhow::Result<()> {
    let server = ReachyServer::from_context(&ctx);

    tracing::info!(
        "Starting Reachy MCP server v{} (upstream {})",
        env!("CARGO_PKG_VERSION"),
        ctx.config.base_url()
    );

    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let tool_count = server.tools().len();
    let service = server.serve(transport).await?;
    tracing::info!("MCP server listening on stdio ({} tools)", tool_count);

    service.waiting().await?;

    tracing::info!("MCP server shutting down");
    Ok(())
}

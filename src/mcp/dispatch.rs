//! Dispatcher: tool name in, structured [`ToolResult`] out.
//!
//! Handlers return `Result<ToolResult, ReachyError>` and may fail freely;
//! this is the only place those failures become `isError` envelopes.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::mcp::registry::{self, ToolDefinition, ToolName};
use crate::mcp::types::ToolResult;
use crate::transport::Transport;
use crate::ReachyError;

/// Routes tool calls to their handlers over a shared transport.
#[derive(Clone)]
pub struct Dispatcher {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) base_url: String,
}

impl Dispatcher {
    /// `base_url` is only used to derive URLs handed back to the caller.
    pub fn new(transport: Arc<dyn Transport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Tool definitions in registration order.
    pub fn definitions(&self) -> &'static [ToolDefinition] {
        registry::list()
    }

    /// Invoke a tool by name. Never fails: every outcome is a [`ToolResult`].
    pub async fn invoke(&self, name: &str, args: Value) -> ToolResult {
        match self.try_invoke(name, args).await {
            Ok(result) => result,
            Err(ReachyError::UnknownTool(name)) => {
                warn!(tool = %name, "unknown tool");
                ToolResult::error(format!("Unknown tool: {}", name))
            }
            Err(e) => {
                warn!(tool = %name, error = %e, "tool call failed");
                ToolResult::error(format!("Error: {}", e))
            }
        }
    }

    /// Invoke a tool, surfacing handler failures as errors.
    pub async fn try_invoke(&self, name: &str, args: Value) -> Result<ToolResult, ReachyError> {
        let definition =
            registry::lookup(name).ok_or_else(|| ReachyError::UnknownTool(name.to_string()))?;
        debug!(tool = %definition.name, "dispatching");
        self.route(definition.tool, args).await
    }

    async fn route(&self, tool: ToolName, args: Value) -> Result<ToolResult, ReachyError> {
        match tool {
            ToolName::HealthCheck => self.handle_health_check().await,
            ToolName::DaemonWakeup => self.handle_daemon_wakeup().await,
            ToolName::ShutdownReachy => self.handle_shutdown_reachy().await,
            ToolName::DaemonStatus => self.handle_daemon_status().await,
            ToolName::DaemonStart => self.handle_daemon_start(parse_args(tool, args)?).await,
            ToolName::DaemonStop => self.handle_daemon_stop(parse_args(tool, args)?).await,
            ToolName::GetRobotState => self.handle_get_robot_state().await,
            ToolName::MoveSetTarget => self.handle_move_set_target(parse_args(tool, args)?).await,
            ToolName::PlayEmotion => self.handle_play_emotion(parse_args(tool, args)?).await,
            ToolName::PlayDance => self.handle_play_dance(parse_args(tool, args)?).await,
            ToolName::PlayMove => self.handle_play_move(parse_args(tool, args)?).await,
            ToolName::ListEmotions => self.handle_list_emotions().await,
            ToolName::ListDances => self.handle_list_dances().await,
            ToolName::ListMoves => self.handle_list_moves(parse_args(tool, args)?).await,
            ToolName::GetCameraStream => self.handle_get_camera_stream(),
        }
    }
}

/// Deserialize tool arguments. Absent or null arguments count as `{}`.
pub fn parse_args<T: DeserializeOwned>(tool: ToolName, args: Value) -> Result<T, ReachyError> {
    let args = match args {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(args)
        .map_err(|e| ReachyError::Validation(format!("Invalid arguments for {}: {}", tool, e)))
}

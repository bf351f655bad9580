//! Daemon control: health, status, start, stop.

use tracing::instrument;

use crate::mcp::dispatch::Dispatcher;
use crate::mcp::types::{DaemonStartArgs, DaemonStopArgs, ToolResult};
use crate::transport::ApiRequest;
use crate::ReachyError;

impl Dispatcher {
    #[instrument(name = "tool.health_check", skip_all)]
    pub(crate) async fn handle_health_check(&self) -> Result<ToolResult, ReachyError> {
        self.forward(ApiRequest::post("/health-check")).await
    }

    #[instrument(name = "tool.daemon_status", skip_all)]
    pub(crate) async fn handle_daemon_status(&self) -> Result<ToolResult, ReachyError> {
        self.forward(ApiRequest::get("/api/daemon/status")).await
    }

    #[instrument(name = "tool.daemon_start", skip_all, fields(wake_up = args.wake_up))]
    pub(crate) async fn handle_daemon_start(
        &self,
        args: DaemonStartArgs,
    ) -> Result<ToolResult, ReachyError> {
        self.forward(ApiRequest::post("/api/daemon/start").with_flag("wake_up", args.wake_up))
            .await
    }

    #[instrument(name = "tool.daemon_stop", skip_all, fields(goto_sleep = args.goto_sleep))]
    pub(crate) async fn handle_daemon_stop(
        &self,
        args: DaemonStopArgs,
    ) -> Result<ToolResult, ReachyError> {
        self.forward(ApiRequest::post("/api/daemon/stop").with_flag("goto_sleep", args.goto_sleep))
            .await
    }
}

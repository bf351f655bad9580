//! Handler set: one `handle_*` method on [`Dispatcher`] per registered tool.

pub mod daemon;
pub mod lifecycle;
pub mod motion;
pub mod state;

pub use lifecycle::{
    OrchestrationStep, WakeupReport, WakeupSummary, READY_POLL_ATTEMPTS, READY_POLL_INTERVAL,
    SLOW_STEP_THRESHOLD_MS,
};

use crate::mcp::dispatch::Dispatcher;
use crate::mcp::types::ToolResult;
use crate::transport::ApiRequest;
use crate::ReachyError;

impl Dispatcher {
    /// One upstream call, response surfaced verbatim (status included) as pretty JSON.
    pub(crate) async fn forward(&self, request: ApiRequest) -> Result<ToolResult, ReachyError> {
        let response = self.transport.send(request).await?;
        ToolResult::pretty(&response)
    }
}

//! Lifecycle orchestrators: full wake-up and graceful shutdown.
//!
//! Both run a fixed sequence of upstream calls and record every call as an
//! [`OrchestrationStep`]. A failing step is logged and the sequence goes on;
//! neither orchestrator returns an error for upstream or transport failures.

use std::time::Duration;

use serde::Serialize;
use serde_json::{json, Value};
use tokio::time::{sleep, Instant};
use tracing::{debug, info, instrument, warn};

use crate::error::TransportError;
use crate::mcp::dispatch::Dispatcher;
use crate::mcp::types::ToolResult;
use crate::transport::{backend_ready, ApiRequest, ApiResponse, Transport};
use crate::ReachyError;

/// Steps slower than this are listed under `slow_steps` in the wake-up summary.
pub const SLOW_STEP_THRESHOLD_MS: u64 = 2000;

/// Readiness polls issued by shutdown after starting a stopped backend.
pub const READY_POLL_ATTEMPTS: u32 = 30;

/// Wait between two readiness polls.
pub const READY_POLL_INTERVAL: Duration = Duration::from_secs(1);

const DAEMON_STATUS: &str = "/api/daemon/status";

/// Record of one upstream call made during an orchestration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrchestrationStep {
    pub step: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub duration_ms: u64,
}

impl OrchestrationStep {
    fn completed(step: String, response: ApiResponse, duration_ms: u64) -> Self {
        Self {
            step,
            success: true,
            status: Some(response.status),
            data: Some(response.data),
            error: None,
            duration_ms,
        }
    }

    fn failed(step: String, error: &TransportError, duration_ms: u64) -> Self {
        Self {
            step,
            success: false,
            status: None,
            data: None,
            error: Some(error.to_string()),
            duration_ms,
        }
    }

    /// Step that stands in for an upstream answer without making a call.
    fn synthetic(step: &str, status: u16, data: Value) -> Self {
        Self {
            step: step.to_string(),
            success: false,
            status: Some(status),
            data: Some(data),
            error: None,
            duration_ms: 0,
        }
    }

    /// Whether this step is a daemon status that reports a ready backend.
    pub fn backend_ready(&self) -> bool {
        self.success && self.data.as_ref().is_some_and(backend_ready)
    }

    pub fn is_slow(&self) -> bool {
        self.duration_ms > SLOW_STEP_THRESHOLD_MS
    }
}

/// Send one request and record it, success or not.
async fn timed_step(
    transport: &dyn Transport,
    step: impl Into<String>,
    request: ApiRequest,
) -> OrchestrationStep {
    let step = step.into();
    let started = Instant::now();
    let outcome = transport.send(request).await;
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    match outcome {
        Ok(response) => {
            debug!(step = %step, status = response.status, duration_ms, "step completed");
            OrchestrationStep::completed(step, response, duration_ms)
        }
        Err(e) => {
            warn!(step = %step, error = %e, duration_ms, "step failed");
            OrchestrationStep::failed(step, &e, duration_ms)
        }
    }
}

/// Digest of a wake-up run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WakeupSummary {
    pub overall_backend_ready: bool,
    pub steps_count: usize,
    pub slow_steps: Vec<OrchestrationStep>,
    pub failures: Vec<OrchestrationStep>,
}

/// Summary plus the full step log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WakeupReport {
    pub summary: WakeupSummary,
    pub steps: Vec<OrchestrationStep>,
}

impl WakeupReport {
    /// Build the report; readiness is read from the last step (the final status).
    pub fn from_steps(steps: Vec<OrchestrationStep>) -> Self {
        let summary = WakeupSummary {
            overall_backend_ready: steps.last().is_some_and(OrchestrationStep::backend_ready),
            steps_count: steps.len(),
            slow_steps: steps.iter().filter(|s| s.is_slow()).cloned().collect(),
            failures: steps.iter().filter(|s| !s.success).cloned().collect(),
        };
        Self { summary, steps }
    }
}

impl Dispatcher {
    #[instrument(name = "tool.daemon_wakeup", skip_all)]
    pub(crate) async fn handle_daemon_wakeup(&self) -> Result<ToolResult, ReachyError> {
        ToolResult::json(&self.run_wakeup().await)
    }

    #[instrument(name = "tool.shutdown_reachy", skip_all)]
    pub(crate) async fn handle_shutdown_reachy(&self) -> Result<ToolResult, ReachyError> {
        ToolResult::json(&self.run_shutdown().await)
    }

    /// Status, wake, enable motors, final status. Always produces a report.
    pub async fn run_wakeup(&self) -> WakeupReport {
        let transport = &*self.transport;
        let steps = vec![
            timed_step(transport, "daemon_status_before", ApiRequest::get(DAEMON_STATUS)).await,
            timed_step(transport, "daemon_wakeup", ApiRequest::post("/api/daemon/wakeup")).await,
            timed_step(
                transport,
                "motors_enabled",
                ApiRequest::post("/api/motors/set_mode/enabled"),
            )
            .await,
            timed_step(transport, "daemon_status_final", ApiRequest::get(DAEMON_STATUS)).await,
        ];

        let report = WakeupReport::from_steps(steps);
        info!(
            ready = report.summary.overall_backend_ready,
            failures = report.summary.failures.len(),
            "wake-up finished"
        );
        report
    }

    /// Graceful shutdown. Returns the ordered step log.
    ///
    /// If the backend is not ready it is started without waking the robot and
    /// polled until ready or until [`READY_POLL_ATTEMPTS`] polls have passed;
    /// the remaining steps run either way.
    pub async fn run_shutdown(&self) -> Vec<OrchestrationStep> {
        let transport = &*self.transport;
        let mut steps = Vec::new();

        let initial = timed_step(transport, "daemon_status_initial", ApiRequest::get(DAEMON_STATUS)).await;
        let ready = initial.backend_ready();
        steps.push(initial);

        if !ready {
            self.start_and_await_backend(&mut steps).await;
        }

        let running = timed_step(transport, "list_running_moves", ApiRequest::get("/api/move/running")).await;
        let move_ids = running_move_ids(&running);
        steps.push(running);

        for id in move_ids {
            let step = format!("stop_move_{}", move_label(&id));
            steps.push(timed_step(transport, step, ApiRequest::post("/api/move/stop").with_body(id)).await);
        }

        steps.push(timed_step(transport, "play_goto_sleep", ApiRequest::post("/api/move/play/goto_sleep")).await);
        steps.push(
            timed_step(transport, "motors_disabled", ApiRequest::post("/api/motors/set_mode/disabled")).await,
        );
        // Sleep was already requested above.
        steps.push(
            timed_step(
                transport,
                "daemon_stop",
                ApiRequest::post("/api/daemon/stop").with_flag("goto_sleep", false),
            )
            .await,
        );
        steps.push(timed_step(transport, "daemon_status_final", ApiRequest::get(DAEMON_STATUS)).await);

        info!(
            steps = steps.len(),
            failures = steps.iter().filter(|s| !s.success).count(),
            "shutdown finished"
        );
        steps
    }

    /// Start the backend without waking the robot, then poll for readiness.
    async fn start_and_await_backend(&self, steps: &mut Vec<OrchestrationStep>) -> bool {
        let transport = &*self.transport;
        steps.push(
            timed_step(
                transport,
                "daemon_start_for_shutdown",
                ApiRequest::post("/api/daemon/start").with_flag("wake_up", false),
            )
            .await,
        );

        for attempt in 0..READY_POLL_ATTEMPTS {
            let poll = timed_step(
                transport,
                format!("daemon_status_poll_{}s", attempt),
                ApiRequest::get(DAEMON_STATUS),
            )
            .await;
            let ready = poll.backend_ready();
            steps.push(poll);
            if ready {
                return true;
            }
            if attempt + 1 < READY_POLL_ATTEMPTS {
                sleep(READY_POLL_INTERVAL).await;
            }
        }

        warn!(attempts = READY_POLL_ATTEMPTS, "backend not ready, continuing shutdown");
        steps.push(OrchestrationStep::synthetic(
            "backend_ready_timeout",
            503,
            json!({ "detail": "backend not ready after start attempt" }),
        ));
        false
    }
}

/// Running move identifiers; anything but an array counts as none.
fn running_move_ids(step: &OrchestrationStep) -> Vec<Value> {
    match &step.data {
        Some(Value::Array(ids)) if step.success => ids.clone(),
        _ => Vec::new(),
    }
}

fn move_label(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

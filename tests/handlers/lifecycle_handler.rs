//! Wake-up and shutdown orchestration.

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use reachy_mcp::mcp::READY_POLL_ATTEMPTS;
use reachy_mcp::transport::HttpMethod;
use reachy_mcp::TransportError;
use serde_json::{json, Value};

use crate::common::{create_test_dispatcher, not_ready_status, ready_status, StubTransport};

const STATUS: &str = "/api/daemon/status";

fn refused() -> TransportError {
    TransportError::Connection("connection refused".into())
}

fn step_names(steps: &Value) -> Vec<String> {
    steps
        .as_array()
        .map(|steps| {
            steps
                .iter()
                .filter_map(|s| s["step"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn find_step<'a>(steps: &'a Value, name: &str) -> &'a Value {
    steps
        .as_array()
        .and_then(|steps| steps.iter().find(|s| s["step"] == name))
        .unwrap_or_else(|| panic!("no step named {name}"))
}

// ============================================================================
// daemon_wakeup
// ============================================================================

#[tokio::test]
async fn test_wakeup_happy_path() {
    let stub = Arc::new(
        StubTransport::new()
            .on_get(STATUS, 200, not_ready_status())
            .on_get(STATUS, 200, ready_status()),
    );
    let dispatcher = create_test_dispatcher(&stub);

    let result = dispatcher.invoke("daemon_wakeup", json!({})).await;

    assert!(!result.is_error);
    let report = result.first_json().unwrap();
    assert_eq!(
        step_names(&report["steps"]),
        vec![
            "daemon_status_before",
            "daemon_wakeup",
            "motors_enabled",
            "daemon_status_final"
        ]
    );
    assert_eq!(report["summary"]["overall_backend_ready"], true);
    assert_eq!(report["summary"]["steps_count"], 4);
    assert_eq!(report["summary"]["failures"], json!([]));
    assert_eq!(report["summary"]["slow_steps"], json!([]));
}

#[tokio::test]
async fn test_wakeup_continues_after_failed_step() {
    let stub = Arc::new(
        StubTransport::new()
            .on_get(STATUS, 200, ready_status())
            .on(HttpMethod::Post, "/api/motors/set_mode/enabled", Err(refused())),
    );
    let dispatcher = create_test_dispatcher(&stub);

    let result = dispatcher.invoke("daemon_wakeup", json!({})).await;

    assert!(!result.is_error);
    let report = result.first_json().unwrap();
    let failures = &report["summary"]["failures"];
    assert_eq!(step_names(failures), vec!["motors_enabled"]);
    assert_eq!(failures[0]["success"], false);
    assert!(failures[0]["error"].as_str().unwrap().contains("connection refused"));
    // The final status still ran after the failure.
    assert_eq!(stub.calls_to(HttpMethod::Get, STATUS), 2);
    assert_eq!(report["summary"]["overall_backend_ready"], true);
}

#[tokio::test(start_paused = true)]
async fn test_wakeup_reports_slow_steps() {
    let stub = Arc::new(
        StubTransport::new()
            .on_get(STATUS, 200, ready_status())
            .with_delay(HttpMethod::Post, "/api/daemon/wakeup", Duration::from_millis(2500)),
    );
    let dispatcher = create_test_dispatcher(&stub);

    let report = dispatcher.run_wakeup().await;

    let slow: Vec<&str> = report.summary.slow_steps.iter().map(|s| s.step.as_str()).collect();
    assert_eq!(slow, vec!["daemon_wakeup"]);
    assert!(report.summary.slow_steps[0].duration_ms >= 2500);
    assert!(report.summary.failures.is_empty());
}

#[tokio::test]
async fn test_wakeup_with_unreachable_daemon_still_reports() {
    let stub = Arc::new(StubTransport::failing(refused()));
    let dispatcher = create_test_dispatcher(&stub);

    let report = dispatcher.run_wakeup().await;

    assert_eq!(report.steps.len(), 4);
    assert_eq!(report.summary.failures.len(), 4);
    assert!(!report.summary.overall_backend_ready);
}

// ============================================================================
// shutdown_reachy
// ============================================================================

#[tokio::test]
async fn test_shutdown_with_ready_backend_skips_start() {
    let stub = Arc::new(
        StubTransport::new()
            .on_get(STATUS, 200, ready_status())
            .on_get("/api/move/running", 200, json!([])),
    );
    let dispatcher = create_test_dispatcher(&stub);

    let result = dispatcher.invoke("shutdown_reachy", json!({})).await;

    assert!(!result.is_error);
    let steps = result.first_json().unwrap();
    assert_eq!(
        step_names(steps),
        vec![
            "daemon_status_initial",
            "list_running_moves",
            "play_goto_sleep",
            "motors_disabled",
            "daemon_stop",
            "daemon_status_final"
        ]
    );
    assert_eq!(stub.calls_to(HttpMethod::Post, "/api/daemon/start"), 0);
}

#[tokio::test]
async fn test_shutdown_stops_daemon_without_sleep_flag() {
    let stub = Arc::new(StubTransport::new().on_get(STATUS, 200, ready_status()));
    let dispatcher = create_test_dispatcher(&stub);

    dispatcher.run_shutdown().await;

    let stop = stub
        .calls()
        .into_iter()
        .find(|c| c.path == "/api/daemon/stop")
        .unwrap();
    assert_eq!(stop.query, vec![("goto_sleep".to_string(), "false".to_string())]);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_starts_backend_and_polls_until_ready() {
    let stub = Arc::new(
        StubTransport::new()
            .on_get(STATUS, 200, not_ready_status())
            .on_get(STATUS, 200, ready_status()),
    );
    let dispatcher = create_test_dispatcher(&stub);

    let steps = dispatcher.run_shutdown().await;

    let names: Vec<&str> = steps.iter().map(|s| s.step.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "daemon_status_initial",
            "daemon_start_for_shutdown",
            "daemon_status_poll_0s",
            "list_running_moves",
            "play_goto_sleep",
            "motors_disabled",
            "daemon_stop",
            "daemon_status_final"
        ]
    );
    let start = stub
        .calls()
        .into_iter()
        .find(|c| c.path == "/api/daemon/start")
        .unwrap();
    assert_eq!(start.query, vec![("wake_up".to_string(), "false".to_string())]);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_gives_up_waiting_and_continues() {
    let stub = Arc::new(StubTransport::new().on_get(STATUS, 200, not_ready_status()));
    let dispatcher = create_test_dispatcher(&stub);
    let started = tokio::time::Instant::now();

    let result = dispatcher.invoke("shutdown_reachy", json!({})).await;

    assert!(!result.is_error);
    let steps = result.first_json().unwrap();
    let names = step_names(steps);
    let polls = names.iter().filter(|n| n.starts_with("daemon_status_poll_")).count();
    assert_eq!(polls, READY_POLL_ATTEMPTS as usize);
    assert_eq!(names[2], "daemon_status_poll_0s");
    assert_eq!(names[31], "daemon_status_poll_29s");

    let timeout = find_step(steps, "backend_ready_timeout");
    assert_eq!(timeout["status"], 503);
    assert_eq!(timeout["success"], false);
    assert_eq!(
        timeout["data"],
        json!({ "detail": "backend not ready after start attempt" })
    );

    // Remaining steps still ran after the timeout.
    assert_eq!(
        &names[names.len() - 5..],
        &[
            "list_running_moves",
            "play_goto_sleep",
            "motors_disabled",
            "daemon_stop",
            "daemon_status_final"
        ]
    );
    // One second between polls, none after the last.
    assert_eq!(started.elapsed(), Duration::from_secs(29));
}

#[tokio::test]
async fn test_shutdown_attempts_every_running_move() {
    let stub = Arc::new(
        StubTransport::new()
            .on_get(STATUS, 200, ready_status())
            .on_get("/api/move/running", 200, json!(["a", "b"]))
            .on(HttpMethod::Post, "/api/move/stop", Err(refused()))
            .on_post("/api/move/stop", 200, json!({ "stopped": true })),
    );
    let dispatcher = create_test_dispatcher(&stub);

    let steps = dispatcher.run_shutdown().await;

    let stops: Vec<(&str, bool)> = steps
        .iter()
        .filter(|s| s.step.starts_with("stop_move_"))
        .map(|s| (s.step.as_str(), s.success))
        .collect();
    assert_eq!(stops, vec![("stop_move_a", false), ("stop_move_b", true)]);

    let bodies: Vec<Option<Value>> = stub
        .calls()
        .into_iter()
        .filter(|c| c.path == "/api/move/stop")
        .map(|c| c.body)
        .collect();
    assert_eq!(bodies, vec![Some(json!("a")), Some(json!("b"))]);
    assert!(steps.iter().any(|s| s.step == "daemon_stop"));
}

#[tokio::test]
async fn test_shutdown_ignores_non_list_running_response() {
    let stub = Arc::new(
        StubTransport::new()
            .on_get(STATUS, 200, ready_status())
            .on_get("/api/move/running", 500, json!({ "detail": "internal" })),
    );
    let dispatcher = create_test_dispatcher(&stub);

    let steps = dispatcher.run_shutdown().await;

    assert!(steps.iter().all(|s| !s.step.starts_with("stop_move_")));
    assert_eq!(stub.calls_to(HttpMethod::Post, "/api/move/stop"), 0);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_with_unreachable_daemon_logs_every_step() {
    let stub = Arc::new(StubTransport::failing(refused()));
    let dispatcher = create_test_dispatcher(&stub);

    let result = dispatcher.invoke("shutdown_reachy", json!({})).await;

    assert!(!result.is_error);
    let steps = result.first_json().unwrap().as_array().unwrap();
    // initial + start + polls + timeout + list + sleep + motors + stop + final
    assert_eq!(steps.len(), READY_POLL_ATTEMPTS as usize + 8);
    assert!(steps.iter().all(|s| s["success"] == false));
    assert_eq!(steps.last().unwrap()["step"], "daemon_status_final");
}

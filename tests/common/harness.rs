//! Shared construction helpers for handler tests.

use std::sync::Arc;

use reachy_mcp::mcp::Dispatcher;
use serde_json::{json, Value};

use super::stub::StubTransport;

/// Base URL the test dispatcher believes it talks to.
pub const TEST_BASE_URL: &str = "http://reachy.test:8000";

/// Create a Dispatcher over a shared stub (common pattern across handler tests).
pub fn create_test_dispatcher(stub: &Arc<StubTransport>) -> Dispatcher {
    Dispatcher::new(stub.clone(), TEST_BASE_URL)
}

/// Daemon status body with a ready backend.
pub fn ready_status() -> Value {
    json!({ "state": "running", "backend_status": { "ready": true } })
}

/// Daemon status body with a backend still starting.
pub fn not_ready_status() -> Value {
    json!({ "state": "starting", "backend_status": { "ready": false } })
}

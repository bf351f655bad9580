//! Scripted transport for handler tests.
//!
//! Records every request. Replies come from per-route queues (the last queued
//! reply for a route repeats); unscripted routes get the fallback reply, which
//! by default echoes the request back as `{path, method, body, query}`.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reachy_mcp::transport::{ApiRequest, ApiResponse, HttpMethod, Transport};
use reachy_mcp::TransportError;
use serde_json::{json, Map, Value};

pub type Reply = Result<ApiResponse, TransportError>;

type Route = (HttpMethod, String);

#[derive(Default)]
pub struct StubTransport {
    routes: Mutex<HashMap<Route, VecDeque<Reply>>>,
    delays: HashMap<Route, Duration>,
    fallback: Option<Reply>,
    calls: Mutex<Vec<ApiRequest>>,
}

impl StubTransport {
    /// Echo every request with status 200.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unscripted routes fail with `error`.
    pub fn failing(error: TransportError) -> Self {
        Self {
            fallback: Some(Err(error)),
            ..Self::default()
        }
    }

    /// Unscripted routes answer with `response`.
    pub fn answering(response: ApiResponse) -> Self {
        Self {
            fallback: Some(Ok(response)),
            ..Self::default()
        }
    }

    /// Queue a reply for `method path`.
    pub fn on(self, method: HttpMethod, path: &str, reply: Reply) -> Self {
        self.routes
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    pub fn on_get(self, path: &str, status: u16, data: Value) -> Self {
        self.on(HttpMethod::Get, path, Ok(ApiResponse::new(status, data)))
    }

    pub fn on_post(self, path: &str, status: u16, data: Value) -> Self {
        self.on(HttpMethod::Post, path, Ok(ApiResponse::new(status, data)))
    }

    /// Make `method path` take `delay` (tokio time) before replying.
    pub fn with_delay(mut self, method: HttpMethod, path: &str, delay: Duration) -> Self {
        self.delays.insert((method, path.to_string()), delay);
        self
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Number of requests sent to `method path`.
    pub fn calls_to(&self, method: HttpMethod, path: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.method == method && c.path == path)
            .count()
    }

    fn next_reply(&self, request: &ApiRequest) -> Reply {
        let mut routes = self.routes.lock().unwrap();
        if let Some(queue) = routes.get_mut(&(request.method, request.path.clone())) {
            if queue.len() > 1 {
                if let Some(reply) = queue.pop_front() {
                    return reply;
                }
            }
            if let Some(reply) = queue.front() {
                return reply.clone();
            }
        }
        match &self.fallback {
            Some(reply) => reply.clone(),
            None => Ok(echo(request)),
        }
    }
}

fn echo(request: &ApiRequest) -> ApiResponse {
    let query: Map<String, Value> = request
        .query
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();
    ApiResponse::new(
        200,
        json!({
            "path": request.path,
            "method": request.method.as_str(),
            "body": request.body,
            "query": query,
        }),
    )
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.calls.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delays.get(&(request.method, request.path.clone())) {
            tokio::time::sleep(*delay).await;
        }
        self.next_reply(&request)
    }
}

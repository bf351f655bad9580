//! Transport Client abstraction over the daemon REST API.
//!
//! Handlers and orchestrators depend on [`Transport`] only; the real
//! implementation is [`HttpTransport`], tests supply their own.

pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use http::HttpTransport;

use crate::error::TransportError;

/// HTTP verbs used by the daemon API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One upstream round trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Append a query parameter. The daemon expects flags as `"true"`/`"false"` strings.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_flag(self, key: impl Into<String>, value: bool) -> Self {
        self.with_query(key, value.to_string())
    }
}

/// Status code plus parsed JSON body. Non-2xx statuses are ordinary data here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    pub data: Value,
}

impl ApiResponse {
    pub fn new(status: u16, data: Value) -> Self {
        Self { status, data }
    }
}

/// Read `backend_status.ready` out of a daemon status body.
pub fn backend_ready(data: &Value) -> bool {
    data.pointer("/backend_status/ready")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Abstract Transport Client capability.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one round trip. Fails only for transport-level problems.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

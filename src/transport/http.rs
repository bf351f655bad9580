//! reqwest-backed Transport Client.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use super::{ApiRequest, ApiResponse, HttpMethod, Transport};
use crate::config::ReachyConfig;
use crate::error::TransportError;

/// Characters of a non-JSON body echoed back in the error.
const SNIPPET_LEN: usize = 100;

/// Transport Client talking to the daemon over plain HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    timeout_ms: u64,
}

impl HttpTransport {
    /// Build a client bound to the configured daemon address and timeout.
    pub fn new(config: &ReachyConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url(),
            timeout_ms: config.timeout_ms,
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn classify(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else if err.is_connect() {
            TransportError::Connection(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url_for(&request.path);
        debug!(method = %request.method, %url, "upstream request");

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| self.classify(e))?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| self.classify(e))?;

        Ok(ApiResponse::new(status, parse_body(status, &text)?))
    }
}

/// Parse a response body. Empty bodies become `{"status": <code>}`.
fn parse_body(status: u16, text: &str) -> Result<Value, TransportError> {
    if text.is_empty() {
        return Ok(json!({ "status": status }));
    }
    serde_json::from_str(text).map_err(|_| TransportError::InvalidJson {
        snippet: text.chars().take(SNIPPET_LEN).collect(),
    })
}

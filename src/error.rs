use thiserror::Error;

/// Failures raised by the Transport Client.
///
/// Cloneable so scripted test transports can replay the same failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request did not complete within the configured timeout.
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// The upstream could not be reached.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The upstream answered with a body that is not JSON.
    #[error("Invalid JSON response: {snippet}")]
    InvalidJson { snippet: String },

    /// Any other failure while building or sending the request.
    #[error("Request failed: {0}")]
    Request(String),
}

/// Custom error type for Reachy MCP operations.
#[derive(Debug, Error)]
pub enum ReachyError {
    /// Input rejected before any network call (joint range, dataset, arguments).
    #[error("{0}")]
    Validation(String),

    /// Transport Client failure (timeout, connection, malformed body).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Tool name not present in the registry.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A result could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Registry and handler set disagree.
    #[error("Tool registry mismatch: {0}")]
    Registry(String),
}

impl From<serde_json::Error> for ReachyError {
    fn from(err: serde_json::Error) -> Self {
        ReachyError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ReachyError {
    fn from(err: toml::de::Error) -> Self {
        ReachyError::Config(format!("Invalid config file: {}", err))
    }
}

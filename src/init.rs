//! Shared initialization logic for MCP and CLI modes.

use std::sync::Arc;

use anyhow::Result;

use crate::config::ReachyConfig;
use crate::mcp::dispatch::Dispatcher;
use crate::mcp::registry;
use crate::transport::{HttpTransport, Transport};

/// Application context shared between the MCP server and CLI commands.
pub struct AppContext {
    pub config: ReachyConfig,
    pub dispatcher: Dispatcher,
}

impl AppContext {
    /// Build the context over a real HTTP transport.
    ///
    /// Runs the registry self-check first and refuses to start on any mismatch.
    pub fn new(config: ReachyConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Build the context over any transport (tests use a scripted one).
    pub fn with_transport(config: ReachyConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        registry::verify()?;
        tracing::info!(
            "Tool registry verified ({} tools)",
            registry::list().len()
        );
        tracing::info!("Using daemon at {}", config.base_url());

        let dispatcher = Dispatcher::new(transport, config.base_url());
        Ok(Self { config, dispatcher })
    }
}

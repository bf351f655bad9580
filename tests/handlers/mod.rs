//! Handler integration tests for MCP tool handlers.
//!
//! Tests run handlers through the dispatcher against a scripted transport.

pub mod lifecycle_handler;

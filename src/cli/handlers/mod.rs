//! CLI command handlers.

pub mod tools;

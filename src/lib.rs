pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod init;
pub mod mcp;
pub mod transport;
pub mod validation;

pub use error::{ReachyError, TransportError};

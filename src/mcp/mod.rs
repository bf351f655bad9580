pub mod dispatch;
pub mod registry;
pub mod server;
pub mod tools;
pub mod types;

pub use dispatch::Dispatcher;
pub use registry::{ToolDefinition, ToolName};
pub use server::ReachyServer;
pub use tools::*;
pub use types::*;

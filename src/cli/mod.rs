//! CLI interface for Reachy MCP.

pub mod handlers;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use output::OutputMode;

/// Reachy MCP - tool server for the Reachy Mini robot daemon
#[derive(Parser)]
#[command(name = "reachy-mcp", version, about, long_about = None)]
pub struct Cli {
    /// Daemon hostname or IP (default: reachy-mini.home)
    #[arg(long, env = "REACHY_HOST", global = true)]
    pub host: Option<String>,

    /// Daemon HTTP port (default: 8000)
    #[arg(long, env = "REACHY_PORT", global = true)]
    pub port: Option<u16>,

    /// Per-request timeout in milliseconds (default: 10000)
    #[arg(long, env = "REACHY_TIMEOUT_MS", global = true)]
    pub timeout_ms: Option<u64>,

    /// TOML config file with host, port and timeout_ms
    #[arg(long, env = "REACHY_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output as JSON instead of human-readable format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start MCP server (stdio transport, the default)
    Mcp,

    /// List the registered tools
    Tools,

    /// Invoke one tool and print its result
    Call {
        /// Tool name (see `reachy-mcp tools`)
        tool: String,
        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

/// Execute a non-MCP command.
pub async fn execute(
    command: &Commands,
    ctx: &crate::init::AppContext,
    mode: OutputMode,
) -> anyhow::Result<()> {
    match command {
        Commands::Mcp => unreachable!("MCP handled in main"),
        Commands::Tools => handlers::tools::handle_tools(ctx, mode),
        Commands::Call { tool, args } => handlers::tools::handle_call(ctx, tool, args, mode).await,
    }
}

//! Reachy MCP - tool server for the Reachy Mini robot daemon
//!
//! Usage:
//!   reachy-mcp                          Start MCP server on stdio
//!   reachy-mcp tools                    List registered tools
//!   reachy-mcp call daemon_status       Invoke one tool
//!   reachy-mcp --help                   Show all commands

use anyhow::Result;
use clap::Parser;

use reachy_mcp::cli::output::OutputMode;
use reachy_mcp::cli::{Cli, Commands};
use reachy_mcp::config::load_config;
use reachy_mcp::init::AppContext;
use reachy_mcp::mcp::server::run_mcp_server;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Tracing to stderr (safe for MCP stdio transport)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("reachy_mcp=info".parse()?),
        )
        .init();

    let mode = OutputMode::from_json_flag(cli.json);
    let config = load_config(cli.config.as_deref())?.with_overrides(
        cli.host.clone(),
        cli.port,
        cli.timeout_ms,
    );
    let ctx = AppContext::new(config)?;

    match &cli.command {
        None | Some(Commands::Mcp) => run_mcp_server(ctx).await?,
        Some(cmd) => reachy_mcp::cli::execute(cmd, &ctx, mode).await?,
    }

    Ok(())
}

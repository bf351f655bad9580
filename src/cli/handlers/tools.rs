//! Tool command handlers: list and call.

use anyhow::{Context, Result};
use serde_json::Value;

use crate::cli::output::{output_json, print_hint, print_tool_result, print_tool_table, OutputMode};
use crate::init::AppContext;

/// Width at which descriptions are cut in the human table.
const DESCRIPTION_WIDTH: usize = 80;

pub fn handle_tools(ctx: &AppContext, mode: OutputMode) -> Result<()> {
    let definitions = ctx.dispatcher.definitions();

    match mode {
        OutputMode::Json => output_json(&definitions)?,
        OutputMode::Human => {
            print_tool_table(definitions, DESCRIPTION_WIDTH);
            print_hint(&format!(
                "{} tools. Run `reachy-mcp call <tool> --args '{{...}}'` to invoke one.",
                definitions.len()
            ));
        }
    }
    Ok(())
}

/// Invoke one tool. An `isError` result is reported and turned into `Err`
/// so the process exits non-zero.
pub async fn handle_call(ctx: &AppContext, tool: &str, args: &str, mode: OutputMode) -> Result<()> {
    let args: Value = serde_json::from_str(args).context("--args must be a JSON object")?;
    if !args.is_object() {
        anyhow::bail!("--args must be a JSON object, got: {}", args);
    }

    let result = ctx.dispatcher.invoke(tool, args).await;

    match mode {
        OutputMode::Json => output_json(&result)?,
        OutputMode::Human => print_tool_result(tool, &result),
    }

    if result.is_error {
        anyhow::bail!("{} returned an error result", tool);
    }
    Ok(())
}

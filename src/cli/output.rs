//! Terminal rendering for the `tools` and `call` commands.

use colored::Colorize;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, Color,
    ContentArrangement, Table,
};
use serde::Serialize;

use crate::mcp::registry::ToolDefinition;
use crate::mcp::types::ToolResult;

/// Output mode for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

/// Write `item` to stdout as pretty JSON.
pub fn output_json<T: Serialize>(item: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(item)?);
    Ok(())
}

/// One row per registered tool, in registration order.
pub fn print_tool_table(definitions: &[ToolDefinition], description_width: usize) {
    let header = ["Tool", "Required", "Description"]
        .map(|title| Cell::new(title).add_attribute(Attribute::Bold));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);

    for def in definitions {
        let required = def.required();
        let required = if required.is_empty() {
            "-".to_string()
        } else {
            required.join(", ")
        };
        table.add_row(vec![
            Cell::new(def.name).fg(Color::Cyan),
            Cell::new(required),
            Cell::new(truncate(def.description, description_width)),
        ]);
    }

    println!("{table}");
}

/// Render a tool result. Content goes to stdout; failures and the status
/// line go to stderr.
pub fn print_tool_result(tool: &str, result: &ToolResult) {
    if result.is_error {
        for block in &result.content {
            eprintln!("{} {}", "FAILED".red().bold(), block.render());
        }
        return;
    }

    for block in &result.content {
        println!("{}", block.render());
    }
    eprintln!("{} {}", "OK".green().bold(), tool.dimmed());
}

/// Print a dimmed hint/suggestion message.
pub fn print_hint(msg: &str) {
    println!("{}", msg.dimmed());
}

/// Cut `text` to `width` characters, marking the cut with `...`.
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let cut: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

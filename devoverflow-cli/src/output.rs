//! Output formatting utilities

use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use serde::Serialize;

use devoverflow_core::OperationResult;

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Print data wrapped in a successful JSON envelope
pub fn json<T: Serialize>(data: T) -> Result<()> {
    let result = OperationResult::ok(data);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Build the JSON envelope for a failed command
pub fn error_envelope(err: &anyhow::Error) -> OperationResult<()> {
    OperationResult::fail(format!("{:#}", err))
}

/// Print a failure as a JSON envelope on stdout
pub fn json_error(err: &anyhow::Error) {
    match serde_json::to_string_pretty(&error_envelope(err)) {
        Ok(body) => println!("{}", body),
        Err(_) => error(&format!("{:#}", err)),
    }
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

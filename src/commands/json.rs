//! JSON command implementation
//!
//! Writes each application's document as JSON.

use crate::cli::args::JsonArgs;
use crate::commands::run_export;
use crate::error::Result;
use crate::export::JsonExporter;

/// Execute the json command
pub fn run_json(args: &JsonArgs) -> Result<()> {
    run_export(JsonExporter::new(args.indent), &args.request())
}

//! PNG command implementation
//!
//! Renders each application to a standalone PNG file.

use crate::cli::args::PngArgs;
use crate::commands::run_export;
use crate::config::Config;
use crate::error::Result;
use crate::export::PngExporter;

/// Execute the png command
pub fn run_png(args: &PngArgs, config: &Config) -> Result<()> {
    let exporter = PngExporter::new(config.render.to_render_options()?);
    run_export(exporter, &args.request())
}

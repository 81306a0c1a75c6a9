//! SVG command implementation

use crate::cli::args::SvgArgs;
use crate::commands::run_export;
use crate::config::Config;
use crate::error::Result;
use crate::export::SvgExporter;

/// Execute the svg command
pub fn run_svg(args: &SvgArgs, config: &Config) -> Result<()> {
    let exporter = SvgExporter::new(config.render.to_render_options()?);
    run_export(exporter, &args.request())
}

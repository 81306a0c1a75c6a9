//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use crate::domain::SizeOverride;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Plot script renderer
///
/// Render plotting applications to standalone PNG, SVG and JSON files.
#[derive(Parser, Debug)]
#[command(name = "plotkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "PLOTKIT_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create standalone PNG files for one or more applications
    Png(PngArgs),

    /// Create standalone SVG files for one or more applications
    Svg(SvgArgs),

    /// Create JSON files for one or more applications
    Json(JsonArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the png command
#[derive(Parser, Debug)]
pub struct PngArgs {
    /// The app directories or scripts to generate PNG for
    #[arg(value_name = "DIRECTORY-OR-SCRIPT", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// The desired height of the exported layout obj only if it's a Plot instance
    #[arg(long, value_name = "HEIGHT", value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// The desired width of the exported layout obj only if it's a Plot instance
    #[arg(long, value_name = "WIDTH", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Name of the output file or - for standard output.
    #[arg(short, long, value_name = "FILENAME")]
    pub output: Vec<String>,

    /// Any command line arguments remaining are passed on to the application handler
    #[arg(
        long = "args",
        value_name = "COMMAND-LINE-ARGS",
        num_args = 0..,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

/// Arguments for the svg command
#[derive(Parser, Debug)]
pub struct SvgArgs {
    /// The app directories or scripts to generate SVG for
    #[arg(value_name = "DIRECTORY-OR-SCRIPT", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// The desired height of the exported layout obj only if it's a Plot instance
    #[arg(long, value_name = "HEIGHT", value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// The desired width of the exported layout obj only if it's a Plot instance
    #[arg(long, value_name = "WIDTH", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Name of the output file or - for standard output.
    #[arg(short, long, value_name = "FILENAME")]
    pub output: Vec<String>,

    /// Any command line arguments remaining are passed on to the application handler
    #[arg(
        long = "args",
        value_name = "COMMAND-LINE-ARGS",
        num_args = 0..,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

/// Arguments for the json command
#[derive(Parser, Debug)]
pub struct JsonArgs {
    /// The app directories or scripts to generate JSON for
    #[arg(value_name = "DIRECTORY-OR-SCRIPT", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Number of spaces to indent nested values (compact output if omitted)
    #[arg(long, value_name = "INDENT")]
    pub indent: Option<usize>,

    /// Name of the output file or - for standard output.
    #[arg(short, long, value_name = "FILENAME")]
    pub output: Vec<String>,

    /// Any command line arguments remaining are passed on to the application handler
    #[arg(
        long = "args",
        value_name = "COMMAND-LINE-ARGS",
        num_args = 0..,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

/// The parts of a file-output invocation the dispatcher needs
#[derive(Debug, Clone, Copy)]
pub struct ExportRequest<'a> {
    pub files: &'a [PathBuf],
    pub outputs: &'a [String],
    pub size: SizeOverride,
    pub argv: &'a [String],
}

impl PngArgs {
    /// Borrow the arguments as an export request
    pub fn request(&self) -> ExportRequest<'_> {
        ExportRequest {
            files: &self.files,
            outputs: &self.output,
            size: SizeOverride::new(self.width, self.height),
            argv: &self.args,
        }
    }
}

impl SvgArgs {
    /// Borrow the arguments as an export request
    pub fn request(&self) -> ExportRequest<'_> {
        ExportRequest {
            files: &self.files,
            outputs: &self.output,
            size: SizeOverride::new(self.width, self.height),
            argv: &self.args,
        }
    }
}

impl JsonArgs {
    /// Borrow the arguments as an export request
    pub fn request(&self) -> ExportRequest<'_> {
        ExportRequest {
            files: &self.files,
            outputs: &self.output,
            size: SizeOverride::default(),
            argv: &self.args,
        }
    }
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

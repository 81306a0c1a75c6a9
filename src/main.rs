//! plotkit - plot script renderer
//!
//! A command-line tool that renders plotting applications to standalone
//! PNG, SVG and JSON files.

use clap::Parser;
use plotkit::cli::args::{generate_completions, Cli, Commands};
use plotkit::commands::{run_json, run_png, run_svg};
use plotkit::config::{Config, ConfigBuilder};
use plotkit::error::{AppError, ScriptError};

fn main() {
    // Parse CLI arguments (usage errors exit with status 2)
    let cli = Cli::parse();

    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())
        .map(|builder| builder.with_verbose(cli.verbose.then_some(true)).build());

    // Initialize logging
    let verbose = matches!(&config, Ok(c) if c.general.verbose);
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "warn" }),
    )
    .format_timestamp(None)
    .init();

    // Run the appropriate command
    let result = config
        .map_err(AppError::from)
        .and_then(|config| run(&cli, &config));

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    match &cli.command {
        Commands::Png(args) => run_png(args, config),

        Commands::Svg(args) => run_svg(args, config),

        Commands::Json(args) => run_json(args),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Script(ScriptError::UnsupportedScript(_)) => {
            eprintln!();
            eprintln!("Hint: Applications are '.toml' or '.json' plot scripts,");
            eprintln!("      or directories containing 'main.toml' or 'main.json'.");
        }
        AppError::Script(ScriptError::UndefinedParameter { name, .. }) => {
            eprintln!();
            eprintln!("Hint: Pass a value with '--args {}=VALUE',", name);
            eprintln!("      or give the placeholder a default: '${{{}:default}}'.", name);
        }
        AppError::OutputOverwritesInput(_) | AppError::DuplicateOutput(_) => {
            eprintln!();
            eprintln!("Hint: Choose a distinct --output name for each application.");
        }
        AppError::TooManyOutputs { .. } => {
            eprintln!();
            eprintln!("Hint: Give at most one --output per application, in the same order.");
        }
        _ => {}
    }
}

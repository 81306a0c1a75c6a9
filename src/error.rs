//! Unified error types for plotkit
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error while loading an application script or directory
    #[error("Application error: {0}")]
    Script(#[from] ScriptError),

    /// Error from an exporter
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// More `--output` values than applications
    #[error("--output/-o was given too many times ({outputs} times for {applications} applications)")]
    TooManyOutputs { outputs: usize, applications: usize },

    /// Two jobs would write the same file
    #[error("Multiple applications would be written to {}", .0.display())]
    DuplicateOutput(PathBuf),

    /// A job's output would replace one of the applications being exported
    #[error("Output {} would overwrite an input application", .0.display())]
    OutputOverwritesInput(PathBuf),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from loading plotting applications
#[derive(Error, Debug)]
pub enum ScriptError {
    /// The path given on the command line does not exist
    #[error("Path for application does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    /// Directory without a main script
    #[error("No 'main.toml' or 'main.json' found in application directory {}", .0.display())]
    MissingMain(PathBuf),

    /// File is not a recognized script kind
    #[error("Expected a '.toml' or '.json' script, got: {}", .0.display())]
    UnsupportedScript(PathBuf),

    /// Pass-through argument not of the form NAME=VALUE
    #[error("Invalid application argument '{0}' (expected NAME=VALUE)")]
    InvalidArgument(String),

    /// Script references a parameter nobody supplied
    #[error("Undefined parameter '{name}' in {}", .path.display())]
    UndefinedParameter { name: String, path: PathBuf },

    /// Script could not be parsed
    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// Script parsed but describes an invalid document
    #[error("Invalid document in {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: DomainError,
    },

    /// Script could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from document validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Color string could not be parsed
    #[error("Invalid color: '{0}'")]
    InvalidColor(String),

    /// Glyph x and y data have different lengths
    #[error("Glyph {index} has {x} x values but {y} y values")]
    MismatchedSeries { index: usize, x: usize, y: usize },

    /// Data range is degenerate or not finite
    #[error("Invalid range: [{start}, {end}]")]
    InvalidRange { start: f64, end: f64 },

    /// Plot dimensions must be positive
    #[error("Invalid plot size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    /// Row or column without children
    #[error("Layout container must have at least one child")]
    EmptyLayout,

    /// Invalid value provided
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Errors from exporters
#[derive(Error, Debug)]
pub enum ExportError {
    /// PNG encoding failed
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    /// JSON serialization failed
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Document cannot be exported as requested
    #[error("Invalid document: {0}")]
    Domain(#[from] DomainError),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

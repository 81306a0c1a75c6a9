//! plotkit - plot script rendering library
//!
//! This library provides the core functionality behind the `plotkit`
//! command: loading plotting applications, resolving output files and
//! exporting documents as PNG, SVG or JSON.
//!
//! # Modules
//!
//! - [`app`]: Application handler (scripts, directories, `--args`)
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Document model with validation
//! - [`error`]: Error types
//! - [`export`]: Exporter trait and PNG/SVG/JSON exporters
//! - [`services`]: Output resolution and job dispatch

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod services;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{AppError, Result};

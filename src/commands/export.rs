//! Shared file-output command implementation
//!
//! The png, svg and json commands differ only in the exporter they use.

use crate::app::ApplicationHandler;
use crate::cli::ExportRequest;
use crate::error::Result;
use crate::export::Exporter;
use crate::services::{resolve_jobs, Dispatcher};
use std::io;

/// Resolve outputs and export every requested application
pub fn run_export<E: Exporter>(exporter: E, request: &ExportRequest<'_>) -> Result<()> {
    let jobs = resolve_jobs(request.files, request.outputs, exporter.extension())?;
    let handler = ApplicationHandler::new(request.argv)?;
    if !handler.params().is_empty() {
        log::debug!("Passing {} parameter(s) to applications", handler.params().len());
    }

    let stdout = io::stdout();
    let mut dispatcher = Dispatcher::new(exporter, &handler, stdout.lock());
    let count = dispatcher.run(&jobs, request.size)?;

    log::info!("Exported {} application(s)", count);
    Ok(())
}

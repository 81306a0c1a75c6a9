//! Export dispatcher
//!
//! Runs resolved jobs one after another: load the application, export it,
//! write the bytes to the job's destination.

use crate::app::ApplicationHandler;
use crate::domain::SizeOverride;
use crate::error::Result;
use crate::export::Exporter;
use crate::services::resolver::{Destination, Job};
use std::io::Write;

/// Service that drives an exporter over a list of jobs
pub struct Dispatcher<'a, E: Exporter, W: Write> {
    exporter: E,
    handler: &'a ApplicationHandler,
    stdout: W,
}

impl<'a, E: Exporter, W: Write> Dispatcher<'a, E, W> {
    /// Create a dispatcher writing standard-output jobs to `stdout`
    pub fn new(exporter: E, handler: &'a ApplicationHandler, stdout: W) -> Self {
        Self {
            exporter,
            handler,
            stdout,
        }
    }

    /// Run every job in order, stopping at the first failure
    ///
    /// Returns the number of jobs completed.
    pub fn run(&mut self, jobs: &[Job], size: SizeOverride) -> Result<usize> {
        for job in jobs {
            self.run_job(job, size)?;
        }
        Ok(jobs.len())
    }

    fn run_job(&mut self, job: &Job, size: SizeOverride) -> Result<()> {
        let document = self.handler.load(&job.input)?;
        let bytes = self.exporter.export(&document, size)?;

        match &job.destination {
            Destination::File(path) => std::fs::write(path, &bytes)?,
            Destination::Stdout => {
                self.stdout.write_all(&bytes)?;
                self.stdout.flush()?;
            }
        }

        log::debug!(
            "Wrote {} ({} bytes) for {}",
            job.destination,
            bytes.len(),
            job.input.display()
        );
        Ok(())
    }

    /// Consume the dispatcher and return the standard-output writer
    pub fn into_stdout(self) -> W {
        self.stdout
    }
}

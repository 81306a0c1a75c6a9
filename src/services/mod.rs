//! Business logic services
//!
//! Services contain the core logic of the file-output commands, generic over
//! the exporter so they can be tested with mocks.

pub mod dispatcher;
pub mod resolver;

pub use dispatcher::Dispatcher;
pub use resolver::{default_output_path, resolve_jobs, Destination, Job};

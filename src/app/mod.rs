//! Plotting applications
//!
//! An application is a plot script (`.toml` or `.json`) or a directory with
//! a `main.toml`/`main.json`. The handler loads it into a [`Document`].
//!
//! [`Document`]: crate::domain::Document

pub mod handler;
pub mod params;

pub use handler::{ApplicationHandler, ApplicationSource, ScriptKind};
pub use params::Params;

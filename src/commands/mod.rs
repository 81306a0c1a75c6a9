//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod export;
pub mod json;
pub mod png;
pub mod svg;

pub use export::run_export;
pub use json::run_json;
pub use png::run_png;
pub use svg::run_svg;

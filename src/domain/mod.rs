//! Domain models for plotkit
//!
//! This module contains the plot document types with validation.
//! Documents are validated once after loading (fail-fast pattern).

pub mod color;
pub mod layout;
pub mod plot;
pub mod render;

pub use color::Color;
pub use layout::{Document, Layout, Placement, SizeOverride};
pub use plot::{DataRange, Glyph, LineGlyph, Plot, ScatterGlyph, MAX_GLYPH_EXTENT, MAX_PLOT_SIZE};
pub use render::RenderOptions;

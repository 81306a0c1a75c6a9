//! Document exporters
//!
//! An [`Exporter`] turns a loaded document into the bytes of one output
//! file. The dispatcher only talks to this trait, so tests can swap in the
//! mock exporter.

pub mod frame;
pub mod json;
pub mod png;
pub mod raster;
pub mod svg;

pub use frame::PlotFrame;
pub use json::JsonExporter;
pub use png::PngExporter;
pub use svg::SvgExporter;

use crate::domain::{Document, SizeOverride};
use crate::error::ExportError;

/// Converts documents into encoded output
pub trait Exporter {
    /// File extension of the output, without the dot
    fn extension(&self) -> &'static str;

    /// Export `document`, applying `size` when the root is a single plot
    fn export(&self, document: &Document, size: SizeOverride) -> Result<Vec<u8>, ExportError>;
}

impl<E: Exporter + ?Sized> Exporter for &E {
    fn extension(&self) -> &'static str {
        (**self).extension()
    }

    fn export(&self, document: &Document, size: SizeOverride) -> Result<Vec<u8>, ExportError> {
        (**self).export(document, size)
    }
}

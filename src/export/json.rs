//! JSON exporter
//!
//! Writes the loaded document back out in its serialized form.

use crate::domain::{Document, SizeOverride};
use crate::error::ExportError;
use crate::export::Exporter;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Exports documents as JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter {
    indent: Option<usize>,
}

impl JsonExporter {
    /// Compact output when `indent` is `None`, pretty-printed otherwise
    pub fn new(indent: Option<usize>) -> Self {
        Self { indent }
    }
}

impl Exporter for JsonExporter {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn export(&self, document: &Document, size: SizeOverride) -> Result<Vec<u8>, ExportError> {
        let document = document.with_size(size);
        let mut bytes = Vec::new();

        match self.indent {
            None => serde_json::to_writer(&mut bytes, &document)?,
            Some(width) => {
                let indent = vec![b' '; width];
                let formatter = PrettyFormatter::with_indent(&indent);
                let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);
                document.serialize(&mut serializer)?;
            }
        }

        bytes.push(b'\n');
        Ok(bytes)
    }
}

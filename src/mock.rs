//! Mock implementations for testing
//!
//! Provides a mock exporter for unit testing the dispatcher without running
//! a real renderer.

use crate::domain::{Document, SizeOverride};
use crate::error::{DomainError, ExportError};
use crate::export::Exporter;

use std::sync::Mutex;

/// A recorded `export` call
#[derive(Debug, Clone, PartialEq)]
pub struct MockCall {
    /// Layout size of the document as loaded (before any override)
    pub size: (u32, u32),
    /// Override passed by the caller
    pub requested: SizeOverride,
    /// Document title, if any
    pub title: Option<String>,
}

/// Mock exporter that records calls and returns fixed bytes
#[derive(Debug, Default)]
pub struct MockExporter {
    calls: Mutex<Vec<MockCall>>,
    fail: bool,
}

impl MockExporter {
    /// Bytes returned by every successful export (starts with the PNG signature)
    pub const OUTPUT: &'static [u8] = b"\x89PNG\r\n\x1a\nmock";

    /// Create an exporter that always succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exporter that always fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Calls recorded so far
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Exporter for MockExporter {
    fn extension(&self) -> &'static str {
        "png"
    }

    fn export(&self, document: &Document, size: SizeOverride) -> Result<Vec<u8>, ExportError> {
        let layout_size = document.root.size(0)?;
        self.calls.lock().unwrap().push(MockCall {
            size: layout_size,
            requested: size,
            title: document.display_title().map(str::to_string),
        });

        if self.fail {
            return Err(DomainError::InvalidValue("mock export failure".to_string()).into());
        }
        Ok(Self::OUTPUT.to_vec())
    }
}

//! Validated render options shared by the image exporters

use crate::domain::Color;
use crate::error::DomainError;

/// Colors and spacing used when drawing a document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Canvas color behind and between plots
    pub background: Color,
    /// Plot frame border
    pub frame_color: Color,
    /// Grid line color
    pub grid_color: Color,
    /// Number of grid lines per axis
    pub grid_lines: u32,
    /// Pixels between a plot's edge and its frame
    pub padding: u32,
    /// Pixels between plots in rows and columns
    pub spacing: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            frame_color: Color::rgb(0x44, 0x44, 0x44),
            grid_color: Color::rgb(0xe5, 0xe5, 0xe5),
            grid_lines: 5,
            padding: 40,
            spacing: 10,
        }
    }
}

impl RenderOptions {
    /// Upper bound on grid lines per axis
    pub const MAX_GRID_LINES: u32 = 50;

    /// Check numeric limits
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.grid_lines > Self::MAX_GRID_LINES {
            return Err(DomainError::InvalidValue(format!(
                "grid_lines must be at most {}",
                Self::MAX_GRID_LINES
            )));
        }
        Ok(())
    }

    /// Frame inset for a plot of the given size
    ///
    /// Never more than a quarter of the smaller side, so tiny plots keep a
    /// drawable area.
    pub fn inset(&self, width: u32, height: u32) -> u32 {
        self.padding.min(width.min(height) / 4)
    }
}

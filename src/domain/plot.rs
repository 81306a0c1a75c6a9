//! Plot and glyph types
//!
//! A plot owns a list of glyphs and optional explicit data ranges. Ranges
//! that are not given are computed from the glyph data.

use crate::domain::Color;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Default plot width and height in pixels
pub const DEFAULT_PLOT_SIZE: u32 = 600;

/// Largest width or height a single plot may declare
pub const MAX_PLOT_SIZE: u32 = 16_384;

/// Largest marker diameter or stroke width, in pixels
pub const MAX_GLYPH_EXTENT: f64 = 1_024.0;

fn default_plot_size() -> u32 {
    DEFAULT_PLOT_SIZE
}

fn default_true() -> bool {
    true
}

fn default_marker_size() -> f64 {
    6.0
}

fn default_line_width() -> f64 {
    1.0
}

/// Inclusive data interval, written as `[start, end]` in scripts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct DataRange {
    pub start: f64,
    pub end: f64,
}

impl DataRange {
    /// Create a new range
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Check that both ends are finite and distinct
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.start.is_finite() || !self.end.is_finite() || self.start == self.end {
            return Err(DomainError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Signed span of the range
    #[inline]
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Position of `value` within the range as a fraction
    #[inline]
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.start) / self.span()
    }

    /// Range covering `values` with 5% padding on both sides
    ///
    /// Falls back to `[0, 1]` when there is no finite data and widens a
    /// single value to a unit-wide interval.
    pub fn auto<'a>(values: impl IntoIterator<Item = &'a f64>) -> Self {
        let (min, max) = values
            .into_iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

        if min > max {
            return Self::new(0.0, 1.0);
        }
        if min == max {
            return Self::new(min - 0.5, max + 0.5);
        }
        let pad = (max - min) / 20.0;
        Self::new(min - pad, max + pad)
    }
}

impl From<(f64, f64)> for DataRange {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}

impl From<DataRange> for (f64, f64) {
    fn from(range: DataRange) -> Self {
        (range.start, range.end)
    }
}

/// Scatter markers drawn as filled circles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterGlyph {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Marker diameter in pixels
    #[serde(default = "default_marker_size")]
    pub size: f64,
}

/// Polyline through the points in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGlyph {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Stroke width in pixels
    #[serde(default = "default_line_width")]
    pub line_width: f64,
}

/// A visual mark on a plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Glyph {
    Scatter(ScatterGlyph),
    Line(LineGlyph),
}

impl Glyph {
    /// X coordinates
    pub fn xs(&self) -> &[f64] {
        match self {
            Glyph::Scatter(g) => &g.x,
            Glyph::Line(g) => &g.x,
        }
    }

    /// Y coordinates
    pub fn ys(&self) -> &[f64] {
        match self {
            Glyph::Scatter(g) => &g.y,
            Glyph::Line(g) => &g.y,
        }
    }

    /// Explicit color, if any
    pub fn color(&self) -> Option<Color> {
        match self {
            Glyph::Scatter(g) => g.color,
            Glyph::Line(g) => g.color,
        }
    }

    /// Data points as (x, y) pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs().iter().copied().zip(self.ys().iter().copied())
    }
}

/// A single plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default = "default_plot_size")]
    pub width: u32,
    #[serde(default = "default_plot_size")]
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_range: Option<DataRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_range: Option<DataRange>,
    #[serde(default = "default_true")]
    pub grid: bool,
    #[serde(default)]
    pub glyphs: Vec<Glyph>,
}

impl Default for Plot {
    fn default() -> Self {
        Self {
            title: None,
            width: DEFAULT_PLOT_SIZE,
            height: DEFAULT_PLOT_SIZE,
            background: None,
            x_range: None,
            y_range: None,
            grid: true,
            glyphs: Vec::new(),
        }
    }
}

impl Plot {
    /// Validate sizes, ranges and glyph data
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.width == 0
            || self.height == 0
            || self.width > MAX_PLOT_SIZE
            || self.height > MAX_PLOT_SIZE
        {
            return Err(DomainError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if let Some(range) = &self.x_range {
            range.validate()?;
        }
        if let Some(range) = &self.y_range {
            range.validate()?;
        }

        for (index, glyph) in self.glyphs.iter().enumerate() {
            let (x, y) = (glyph.xs().len(), glyph.ys().len());
            if x != y {
                return Err(DomainError::MismatchedSeries { index, x, y });
            }
            let extent = match glyph {
                Glyph::Scatter(g) => g.size,
                Glyph::Line(g) => g.line_width,
            };
            if !extent.is_finite() || extent <= 0.0 || extent > MAX_GLYPH_EXTENT {
                return Err(DomainError::InvalidValue(format!(
                    "glyph {index} size {extent} is outside (0, {MAX_GLYPH_EXTENT}]"
                )));
            }
        }

        Ok(())
    }

    /// Effective x range (explicit or computed from data)
    pub fn resolved_x_range(&self) -> DataRange {
        self.x_range
            .unwrap_or_else(|| DataRange::auto(self.glyphs.iter().flat_map(|g| g.xs())))
    }

    /// Effective y range (explicit or computed from data)
    pub fn resolved_y_range(&self) -> DataRange {
        self.y_range
            .unwrap_or_else(|| DataRange::auto(self.glyphs.iter().flat_map(|g| g.ys())))
    }

    /// Color of the glyph at `index`, falling back to the palette
    pub fn glyph_color(&self, index: usize) -> Color {
        self.glyphs
            .get(index)
            .and_then(Glyph::color)
            .unwrap_or_else(|| Color::palette(index))
    }
}

//! PNG exporter
//!
//! Rasterizes every plot of the layout onto one canvas and encodes it as an
//! RGBA8 PNG.

use crate::domain::{Document, Glyph, Placement, RenderOptions, SizeOverride};
use crate::error::{DomainError, ExportError};
use crate::export::raster::{Canvas, ClipRect};
use crate::export::{Exporter, PlotFrame};
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbaImage};

/// Largest canvas side accepted by the PNG exporter, in pixels
pub const MAX_DIMENSION: u32 = 16_384;

/// Exports documents as PNG images
#[derive(Debug, Clone, Default)]
pub struct PngExporter {
    options: RenderOptions,
}

impl PngExporter {
    /// Create an exporter with the given render options
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render the document to an image without encoding it
    pub fn render(&self, document: &Document) -> Result<RgbaImage, ExportError> {
        let (width, height) = document.root.size(self.options.spacing)?;
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(DomainError::InvalidSize { width, height }.into());
        }

        let mut canvas = Canvas::new(width, height, self.options.background);
        for placement in document.root.placements(self.options.spacing)? {
            self.draw_plot(&mut canvas, &placement);
        }

        Ok(canvas.into_image())
    }

    fn draw_plot(&self, canvas: &mut Canvas, placement: &Placement<'_>) {
        let plot = placement.plot;
        let frame = PlotFrame::new(placement, &self.options);
        let (x0, y0, x1, y1) = frame.outer;

        if let Some(background) = plot.background {
            canvas.fill_rect(x0, y0, x1 - 1.0, y1 - 1.0, background);
        }

        canvas.set_clip(Some(ClipRect {
            x0: frame.left as i64,
            y0: frame.top as i64,
            x1: frame.right as i64,
            y1: frame.bottom as i64,
        }));

        if plot.grid {
            let (xs, ys) = frame.grid(self.options.grid_lines);
            for x in xs {
                canvas.fill_rect(x, frame.top, x, frame.bottom, self.options.grid_color);
            }
            for y in ys {
                canvas.fill_rect(frame.left, y, frame.right, y, self.options.grid_color);
            }
        }

        for (index, glyph) in plot.glyphs.iter().enumerate() {
            let color = plot.glyph_color(index);
            match glyph {
                Glyph::Scatter(scatter) => {
                    for (x, y) in glyph.points() {
                        let (px, py) = frame.map(x, y);
                        canvas.fill_circle(px, py, scatter.size / 2.0, color);
                    }
                }
                Glyph::Line(line) => {
                    let points: Vec<_> = glyph
                        .points()
                        .filter(|(x, y)| x.is_finite() && y.is_finite())
                        .map(|(x, y)| frame.map(x, y))
                        .collect();
                    for pair in points.windows(2) {
                        canvas.draw_line(pair[0], pair[1], line.line_width, color);
                    }
                }
            }
        }

        canvas.set_clip(None);
        canvas.stroke_rect(
            frame.left,
            frame.top,
            frame.right,
            frame.bottom,
            self.options.frame_color,
        );
    }
}

impl Exporter for PngExporter {
    fn extension(&self) -> &'static str {
        "png"
    }

    fn export(&self, document: &Document, size: SizeOverride) -> Result<Vec<u8>, ExportError> {
        let image = self.render(&document.with_size(size))?;
        let (width, height) = image.dimensions();

        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes).write_image(image.as_raw(), width, height, ColorType::Rgba8)?;
        log::debug!("Encoded {}x{} PNG ({} bytes)", width, height, bytes.len());
        Ok(bytes)
    }
}

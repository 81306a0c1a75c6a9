//! SVG exporter

use crate::domain::{Document, Glyph, Placement, RenderOptions, SizeOverride};
use crate::error::{DomainError, ExportError};
use crate::export::{Exporter, PlotFrame};
use std::fmt::Write;

/// Exports documents as SVG 1.1 images
#[derive(Debug, Clone, Default)]
pub struct SvgExporter {
    options: RenderOptions,
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

impl SvgExporter {
    /// Create an exporter with the given render options
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render the document as SVG markup
    pub fn render(&self, document: &Document) -> Result<String, ExportError> {
        let (width, height) = document.root.size(self.options.spacing)?;
        if width == 0 || height == 0 {
            return Err(DomainError::InvalidSize { width, height }.into());
        }

        // writing into a String cannot fail
        let mut svg = String::new();
        let _ = writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        if let Some(title) = document.display_title() {
            let _ = writeln!(svg, "  <title>{}</title>", escape(title));
        }
        let _ = writeln!(
            svg,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            self.options.background
        );

        for (index, placement) in document.root.placements(self.options.spacing)?.iter().enumerate() {
            self.write_plot(&mut svg, index, placement);
        }

        svg.push_str("</svg>\n");
        Ok(svg)
    }

    fn write_plot(&self, svg: &mut String, index: usize, placement: &Placement<'_>) {
        let plot = placement.plot;
        let frame = PlotFrame::new(placement, &self.options);
        let (x0, y0, x1, y1) = frame.outer;
        let clip_id = format!("plot{index}-clip");

        let _ = writeln!(svg, r#"  <g class="plot">"#);
        if let Some(title) = &plot.title {
            let _ = writeln!(svg, "    <desc>{}</desc>", escape(title));
        }
        if let Some(background) = plot.background {
            let _ = writeln!(
                svg,
                r#"    <rect x="{x0}" y="{y0}" width="{}" height="{}" fill="{background}"/>"#,
                x1 - x0,
                y1 - y0
            );
        }
        let (fw, fh) = (frame.right - frame.left, frame.bottom - frame.top);
        let _ = writeln!(
            svg,
            r#"    <clipPath id="{clip_id}"><rect x="{}" y="{}" width="{fw}" height="{fh}"/></clipPath>"#,
            frame.left, frame.top
        );
        let _ = writeln!(svg, r#"    <g clip-path="url(#{clip_id})">"#);

        if plot.grid {
            let (xs, ys) = frame.grid(self.options.grid_lines);
            for x in xs {
                let _ = writeln!(
                    svg,
                    r#"      <line x1="{x}" y1="{}" x2="{x}" y2="{}" stroke="{}"/>"#,
                    frame.top, frame.bottom, self.options.grid_color
                );
            }
            for y in ys {
                let _ = writeln!(
                    svg,
                    r#"      <line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{}"/>"#,
                    frame.left, frame.right, self.options.grid_color
                );
            }
        }

        for (glyph_index, glyph) in plot.glyphs.iter().enumerate() {
            let color = plot.glyph_color(glyph_index);
            match glyph {
                Glyph::Scatter(scatter) => {
                    for (x, y) in glyph.points() {
                        let (px, py) = frame.map(x, y);
                        let _ = writeln!(
                            svg,
                            r#"      <circle cx="{px:.2}" cy="{py:.2}" r="{}" fill="{color}"/>"#,
                            scatter.size / 2.0
                        );
                    }
                }
                Glyph::Line(line) => {
                    let points: Vec<String> = glyph
                        .points()
                        .filter(|(x, y)| x.is_finite() && y.is_finite())
                        .map(|(x, y)| {
                            let (px, py) = frame.map(x, y);
                            format!("{px:.2},{py:.2}")
                        })
                        .collect();
                    let _ = writeln!(
                        svg,
                        r#"      <polyline points="{}" fill="none" stroke="{color}" stroke-width="{}"/>"#,
                        points.join(" "),
                        line.line_width
                    );
                }
            }
        }

        let _ = writeln!(svg, "    </g>");
        let _ = writeln!(
            svg,
            r#"    <rect x="{}" y="{}" width="{fw}" height="{fh}" fill="none" stroke="{}"/>"#,
            frame.left, frame.top, self.options.frame_color
        );
        let _ = writeln!(svg, "  </g>");
    }
}

impl Exporter for SvgExporter {
    fn extension(&self) -> &'static str {
        "svg"
    }

    fn export(&self, document: &Document, size: SizeOverride) -> Result<Vec<u8>, ExportError> {
        Ok(self.render(&document.with_size(size))?.into_bytes())
    }
}

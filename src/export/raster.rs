//! Minimal RGBA canvas
//!
//! Supports the handful of primitives plots need: rectangles, lines and
//! filled circles, alpha-blended over the existing pixels and clipped to an
//! optional rectangle.

use crate::domain::Color;
use image::{Rgba, RgbaImage};

/// Inclusive pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl ClipRect {
    fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    fn intersect(&self, other: &ClipRect) -> ClipRect {
        ClipRect {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }
}

/// Clip the segment `from`-`to` to the box `(x0, y0, x1, y1)` (Liang-Barsky)
fn clip_segment(
    from: (f64, f64),
    to: (f64, f64),
    (x0, y0, x1, y1): (f64, f64, f64, f64),
) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let (mut enter, mut exit) = (0.0_f64, 1.0_f64);

    for (p, q) in [
        (-dx, from.0 - x0),
        (dx, x1 - from.0),
        (-dy, from.1 - y0),
        (dy, y1 - from.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            enter = enter.max(t);
        } else {
            exit = exit.min(t);
        }
        if enter > exit {
            return None;
        }
    }

    Some((
        (from.0 + dx * enter, from.1 + dy * enter),
        (from.0 + dx * exit, from.1 + dy * exit),
    ))
}

/// Drawing surface backed by an [`RgbaImage`]
pub struct Canvas {
    image: RgbaImage,
    clip: Option<ClipRect>,
}

impl Canvas {
    /// Create a canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let pixel = Rgba([background.r, background.g, background.b, background.a]);
        Self {
            image: RgbaImage::from_pixel(width, height, pixel),
            clip: None,
        }
    }

    /// Restrict drawing to `clip` (or lift the restriction with `None`)
    pub fn set_clip(&mut self, clip: Option<ClipRect>) {
        self.clip = clip;
    }

    /// Consume the canvas and return the image
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Pixels drawing can reach: the canvas, narrowed by the clip rectangle
    ///
    /// Empty when `x0 > x1` or `y0 > y1`.
    fn drawable(&self) -> ClipRect {
        let canvas = ClipRect {
            x0: 0,
            y0: 0,
            x1: self.image.width() as i64 - 1,
            y1: self.image.height() as i64 - 1,
        };
        match &self.clip {
            Some(clip) => canvas.intersect(clip),
            None => canvas,
        }
    }

    /// Blend `color` over the pixel at (x, y)
    pub fn blend(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        if let Some(clip) = &self.clip {
            if !clip.contains(x, y) {
                return;
            }
        }

        let alpha = color.opacity();
        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        let mix = |src: u8, dst: u8| (src as f32 * alpha + dst as f32 * (1.0 - alpha)).round() as u8;
        let out_alpha = alpha + dst.0[3] as f32 / 255.0 * (1.0 - alpha);
        *dst = Rgba([
            mix(color.r, dst.0[0]),
            mix(color.g, dst.0[1]),
            mix(color.b, dst.0[2]),
            (out_alpha * 255.0).round() as u8,
        ]);
    }

    /// Fill the rectangle spanning the given pixel corners (inclusive)
    pub fn fill_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Color) {
        let area = self.drawable();
        let (x0, x1) = (x0.round() as i64, x1.round() as i64);
        let (y0, y1) = (y0.round() as i64, y1.round() as i64);
        for y in y0.min(y1).max(area.y0)..=y0.max(y1).min(area.y1) {
            for x in x0.min(x1).max(area.x0)..=x0.max(x1).min(area.x1) {
                self.blend(x, y, color);
            }
        }
    }

    /// One-pixel rectangle outline
    pub fn stroke_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Color) {
        self.fill_rect(x0, y0, x1, y0, color);
        self.fill_rect(x0, y1, x1, y1, color);
        self.fill_rect(x0, y0, x0, y1, color);
        self.fill_rect(x1, y0, x1, y1, color);
    }

    /// Filled circle centred on (cx, cy)
    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        if !cx.is_finite() || !cy.is_finite() || !radius.is_finite() {
            return;
        }
        let area = self.drawable();
        let r2 = radius * radius;
        let x0 = ((cx - radius).floor() as i64).max(area.x0);
        let x1 = ((cx + radius).ceil() as i64).min(area.x1);
        let y0 = ((cy - radius).floor() as i64).max(area.y0);
        let y1 = ((cy + radius).ceil() as i64).min(area.y1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let (dx, dy) = (x as f64 - cx, y as f64 - cy);
                if dx * dx + dy * dy <= r2 {
                    self.blend(x, y, color);
                }
            }
        }
    }

    /// Straight line of the given width
    ///
    /// Lines up to one pixel wide are drawn pixel by pixel; wider lines are
    /// stamped with discs along the path. Only the part of the segment near
    /// the drawable area is walked.
    pub fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
        if !width.is_finite() {
            return;
        }
        let area = self.drawable();
        if area.x0 > area.x1 || area.y0 > area.y1 {
            return;
        }
        let margin = width.max(1.0) / 2.0 + 1.0;
        let bounds = (
            area.x0 as f64 - margin,
            area.y0 as f64 - margin,
            area.x1 as f64 + margin,
            area.y1 as f64 + margin,
        );
        let Some((from, to)) = clip_segment(from, to, bounds) else {
            return;
        };

        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as i64;
        let mut last = None;

        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let (x, y) = (from.0 + dx * t, from.1 + dy * t);
            if width <= 1.0 {
                let pixel = (x.round() as i64, y.round() as i64);
                // avoid double-blending translucent strokes
                if last != Some(pixel) {
                    self.blend(pixel.0, pixel.1, color);
                    last = Some(pixel);
                }
            } else {
                self.fill_circle(x, y, width / 2.0, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(canvas: &Canvas, x: u32, y: u32) -> [u8; 4] {
        canvas.image.get_pixel(x, y).0
    }

    #[test]
    fn test_new_fills_background() {
        let canvas = Canvas::new(4, 3, Color::rgb(10, 20, 30));
        assert_eq!(canvas.image.dimensions(), (4, 3));
        assert_eq!(pixel(&canvas, 3, 2), [10, 20, 30, 255]);
    }

    #[test]
    fn test_blend_half_alpha() {
        let mut canvas = Canvas::new(1, 1, Color::WHITE);
        canvas.blend(0, 0, Color::parse("#00000080").unwrap());
        let [r, g, b, a] = pixel(&canvas, 0, 0);
        assert!((126..=128).contains(&r));
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_eq!(a, 255);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut canvas = Canvas::new(2, 2, Color::WHITE);
        canvas.blend(-1, 0, Color::BLACK);
        canvas.blend(2, 2, Color::BLACK);
        assert_eq!(pixel(&canvas, 0, 0), [255, 255, 255, 255]);
    }

    #[test]
    fn test_clip_restricts_drawing() {
        let mut canvas = Canvas::new(4, 4, Color::WHITE);
        canvas.set_clip(Some(ClipRect {
            x0: 1,
            y0: 1,
            x1: 2,
            y1: 2,
        }));
        canvas.fill_rect(0.0, 0.0, 3.0, 3.0, Color::BLACK);
        assert_eq!(pixel(&canvas, 0, 0), [255, 255, 255, 255]);
        assert_eq!(pixel(&canvas, 1, 1), [0, 0, 0, 255]);
        assert_eq!(pixel(&canvas, 3, 3), [255, 255, 255, 255]);
    }

    #[test]
    fn test_line_covers_endpoints() {
        let mut canvas = Canvas::new(10, 10, Color::WHITE);
        canvas.draw_line((1.0, 1.0), (8.0, 5.0), 1.0, Color::BLACK);
        assert_eq!(pixel(&canvas, 1, 1), [0, 0, 0, 255]);
        assert_eq!(pixel(&canvas, 8, 5), [0, 0, 0, 255]);
        assert_eq!(pixel(&canvas, 8, 1), [255, 255, 255, 255]);
    }

    #[test]
    fn test_circle_is_filled() {
        let mut canvas = Canvas::new(9, 9, Color::WHITE);
        canvas.fill_circle(4.0, 4.0, 2.0, Color::BLACK);
        assert_eq!(pixel(&canvas, 4, 4), [0, 0, 0, 255]);
        assert_eq!(pixel(&canvas, 6, 4), [0, 0, 0, 255]);
        assert_eq!(pixel(&canvas, 6, 6), [255, 255, 255, 255]);
    }

    #[test]
    fn test_far_line_is_clipped_before_walking() {
        let mut canvas = Canvas::new(10, 10, Color::WHITE);
        canvas.draw_line((0.0, 5.0), (1e12, 5.0), 1.0, Color::BLACK);
        canvas.draw_line((-1e12, 2.0), (1e12, 2.0), 3.0, Color::BLACK);
        assert_eq!(pixel(&canvas, 0, 5), [0, 0, 0, 255]);
        assert_eq!(pixel(&canvas, 9, 5), [0, 0, 0, 255]);
        assert_eq!(pixel(&canvas, 0, 2), [0, 0, 0, 255]);
        assert_eq!(pixel(&canvas, 9, 2), [0, 0, 0, 255]);
        assert_eq!(pixel(&canvas, 5, 8), [255, 255, 255, 255]);
    }

    #[test]
    fn test_line_outside_canvas_draws_nothing() {
        let mut canvas = Canvas::new(4, 4, Color::WHITE);
        canvas.draw_line((-1e9, -50.0), (1e9, -50.0), 1.0, Color::BLACK);
        assert!(canvas.image.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn test_huge_circle_fills_clip_only() {
        let mut canvas = Canvas::new(6, 6, Color::WHITE);
        canvas.set_clip(Some(ClipRect {
            x0: 1,
            y0: 1,
            x1: 4,
            y1: 4,
        }));
        canvas.fill_circle(3.0, 3.0, 1e9, Color::BLACK);
        assert_eq!(pixel(&canvas, 1, 1), [0, 0, 0, 255]);
        assert_eq!(pixel(&canvas, 4, 4), [0, 0, 0, 255]);
        assert_eq!(pixel(&canvas, 0, 0), [255, 255, 255, 255]);
        assert_eq!(pixel(&canvas, 5, 5), [255, 255, 255, 255]);
    }

    #[test]
    fn test_clip_segment() {
        let bounds = (0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            clip_segment((-10.0, 5.0), (30.0, 5.0), bounds),
            Some(((0.0, 5.0), (10.0, 5.0)))
        );
        assert_eq!(
            clip_segment((2.0, 2.0), (3.0, 4.0), bounds),
            Some(((2.0, 2.0), (3.0, 4.0)))
        );
        assert_eq!(clip_segment((-5.0, -5.0), (-1.0, 20.0), bounds), None);
    }
}

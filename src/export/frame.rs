//! Data-to-pixel mapping for a placed plot

use crate::domain::{DataRange, Placement, RenderOptions};

/// The drawable area of a plot on the output canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    /// Outer bounds of the plot (canvas pixels)
    pub outer: (f64, f64, f64, f64),
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub x_range: DataRange,
    pub y_range: DataRange,
}

impl PlotFrame {
    /// Compute the frame for a placed plot
    pub fn new(placement: &Placement<'_>, options: &RenderOptions) -> Self {
        let plot = placement.plot;
        let inset = options.inset(plot.width, plot.height) as f64;
        let x0 = placement.x as f64;
        let y0 = placement.y as f64;
        let x1 = x0 + plot.width as f64;
        let y1 = y0 + plot.height as f64;

        Self {
            outer: (x0, y0, x1, y1),
            left: x0 + inset,
            top: y0 + inset,
            right: x1 - inset - 1.0,
            bottom: y1 - inset - 1.0,
            x_range: plot.resolved_x_range(),
            y_range: plot.resolved_y_range(),
        }
    }

    /// Map a data point to canvas pixels (y grows downwards)
    pub fn map(&self, x: f64, y: f64) -> (f64, f64) {
        let px = self.left + self.x_range.normalize(x) * (self.right - self.left);
        let py = self.bottom - self.y_range.normalize(y) * (self.bottom - self.top);
        (px, py)
    }

    /// Pixel offsets of `count` evenly spaced grid lines along each axis
    pub fn grid(&self, count: u32) -> (Vec<f64>, Vec<f64>) {
        let step = |i: u32| i as f64 / (count + 1) as f64;
        let xs = (1..=count)
            .map(|i| self.left + step(i) * (self.right - self.left))
            .collect();
        let ys = (1..=count)
            .map(|i| self.top + step(i) * (self.bottom - self.top))
            .collect();
        (xs, ys)
    }
}

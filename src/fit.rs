//! # Text Fit-and-Center
//!
//! Picks the largest integer font size whose measured text width stays within
//! `ratio × canvas width`, then places the run so its ink box is centered on
//! the canvas.
//!
//! ## Algorithm
//!
//! ```text
//! limit = floor(ratio * W)
//! size  = max { s in [MIN_FONT_SIZE, max_font_size(W, H)] : width(s) <= limit }
//!         or MIN_FONT_SIZE when nothing fits
//! x     = (W - width) / 2            // left edge of the ink box
//! y     = H / 2 - (top + bottom) / 2 // baseline
//! ```
//!
//! Width is non-decreasing in size, so the search is a binary search over a
//! bounded interval and always terminates.
//!
//! The baseline centers the measured ink box vertically. GD-style placement
//! (`H/2 + (bottom - top)/2`) instead sits lower by the descent of the run.

use crate::font::{BoundingBox, TextMeasure};

/// Smallest size ever returned.
pub const MIN_FONT_SIZE: u32 = 1;

/// Upper bound of the size search for a canvas.
pub fn max_font_size(width: u32, height: u32) -> u32 {
    (width.max(height).saturating_mul(4)).max(MIN_FONT_SIZE)
}

/// Where and how large to draw a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPlacement {
    /// Font size in pixels.
    pub size: u32,
    /// Left edge of the ink box on the canvas.
    pub x: f32,
    /// Baseline on the canvas.
    pub y: f32,
    /// Measured bounds at `size`, relative to the pen origin.
    pub bounds: BoundingBox,
}

impl TextPlacement {
    /// Pen x to pass to the rasterizer so the ink starts at `x`.
    pub fn pen_x(&self) -> f32 {
        self.x - self.bounds.left
    }
}

/// Fit `text` into a `width × height` canvas.
pub fn fit_text<M: TextMeasure + ?Sized>(
    metrics: &M,
    text: &str,
    width: u32,
    height: u32,
    ratio: f32,
) -> TextPlacement {
    let size = fit_size(metrics, text, width, height, ratio);
    center(metrics.measure(size, text), size, width, height)
}

/// Largest size whose width fits `ratio × width`, or [`MIN_FONT_SIZE`].
pub fn fit_size<M: TextMeasure + ?Sized>(
    metrics: &M,
    text: &str,
    width: u32,
    height: u32,
    ratio: f32,
) -> u32 {
    let limit = (ratio * width as f32).floor();
    let fits = |size: u32| metrics.measure(size, text).width() <= limit;

    if !fits(MIN_FONT_SIZE) {
        return MIN_FONT_SIZE;
    }

    let (mut lo, mut hi) = (MIN_FONT_SIZE, max_font_size(width, height));
    while lo < hi {
        let mid = lo + (hi - lo).div_ceil(2);
        if fits(mid) {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

fn center(bounds: BoundingBox, size: u32, width: u32, height: u32) -> TextPlacement {
    TextPlacement {
        size,
        x: (width as f32 - bounds.width()) / 2.0,
        y: height as f32 * 0.5 - (bounds.top + bounds.bottom) / 2.0,
        bounds,
    }
}

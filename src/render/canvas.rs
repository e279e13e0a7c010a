//! In-memory RGB canvas with coverage blending.

use image::RgbImage;

use crate::color::Color;
use crate::fit::TextPlacement;
use crate::font::FontHandle;

/// Fixed-size raster buffer the placeholder is drawn into.
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Allocate a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background.into()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Mix `color` into one pixel by `coverage` in `[0, 1]`. Out-of-bounds
    /// coordinates are ignored.
    pub fn blend(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }
        let coverage = coverage.clamp(0.0, 1.0);
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        let target = [color.r, color.g, color.b];
        for (channel, &to) in pixel.0.iter_mut().zip(&target) {
            let from = *channel as f32;
            *channel = (from + (to as f32 - from) * coverage).round() as u8;
        }
    }

    /// Draw a fitted text run in `color`.
    pub fn draw_text(&mut self, font: &FontHandle, placement: &TextPlacement, text: &str, color: Color) {
        font.rasterize(placement.size, placement.pen_x(), placement.y, text, |x, y, coverage| {
            self.blend(x, y, color, coverage)
        });
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let [r, g, b] = self.image.get_pixel(x, y).0;
        Color::rgb(r, g, b)
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }
}

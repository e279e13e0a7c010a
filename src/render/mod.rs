//! # Rendering Module
//!
//! Turns a [`Placeholder`] into encoded image bytes.
//!
//! ## Pipeline
//!
//! 1. Resolve derived colors ([`Placeholder::resolve`])
//! 2. Evaluate the label once
//! 3. Resolve the font (never fails, see [`crate::font`])
//! 4. Fill the canvas, fit and center the label ([`crate::fit`]), draw it
//! 5. Encode ([`encode::encode`])
//!
//! ## Modules
//!
//! - [`canvas`]: RGB raster buffer with coverage blending
//! - [`encode`]: PNG/JPEG/GIF encoding

pub mod canvas;
pub mod encode;

pub use canvas::Canvas;
pub use encode::encode;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::Result;
use crate::fit::fit_text;
use crate::font::{FontHandle, FontResolver};
use crate::format::ImageFormat;
use crate::placeholder::{Placeholder, Resolved};

/// Render `placeholder` to encoded bytes.
pub fn render(placeholder: &Placeholder, fonts: &FontResolver) -> Result<Vec<u8>> {
    let resolved = placeholder.resolve();
    let text = placeholder.label(&resolved);
    let font = fonts.resolve(&resolved.font);

    let canvas = draw(&resolved, &text, &font);
    encode(canvas.image(), resolved.format, resolved.quality)
}

/// Draw the background and fitted label without encoding.
pub fn draw(resolved: &Resolved, text: &str, font: &FontHandle) -> Canvas {
    let mut canvas = Canvas::new(resolved.width, resolved.height, resolved.background);
    let placement = fit_text(font, text, resolved.width, resolved.height, resolved.ratio);

    log::debug!(
        "{}x{} bg={} fg={} text={:?} size={} at ({:.1}, {:.1})",
        resolved.width,
        resolved.height,
        resolved.background,
        resolved.foreground,
        text,
        placement.size,
        placement.x,
        placement.y
    );

    canvas.draw_text(font, &placement, text, resolved.foreground);
    canvas
}

/// `data:image/{format};base64,{bytes}`
pub fn data_uri(bytes: &[u8], format: ImageFormat) -> String {
    format!("data:image/{};base64,{}", format.name(), BASE64.encode(bytes))
}

//! TrueType/OpenType faces via ab_glyph.
//!
//! Text is laid out on a single line with kerning. Measurement uses the
//! unrounded outline bounds so widths grow linearly with the pixel size.

use ab_glyph::{Font, FontArc, Glyph, PxScale, ScaleFont, point};
use std::fs;
use std::path::Path;

use super::BoundingBox;
use crate::error::{PlaceholdError, Result};

/// Load a font file from disk.
pub fn load(path: &Path) -> Result<FontArc> {
    let bytes = fs::read(path).map_err(|e| {
        PlaceholdError::FontResolution(format!("failed to read {}: {}", path.display(), e))
    })?;

    FontArc::try_from_vec(bytes).map_err(|e| {
        PlaceholdError::FontResolution(format!("invalid font {}: {}", path.display(), e))
    })
}

/// Position glyphs along a baseline, returning them and the final caret x.
fn layout(font: &FontArc, size: u32, x: f32, baseline: f32, text: &str) -> (Vec<Glyph>, f32) {
    let scale = PxScale::from(size as f32);
    let scaled = font.as_scaled(scale);

    let mut glyphs = Vec::with_capacity(text.len());
    let mut caret = x;
    let mut previous = None;

    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        glyphs.push(id.with_scale_and_position(scale, point(caret, baseline)));
        caret += scaled.h_advance(id);
        previous = Some(id);
    }

    (glyphs, caret)
}

/// Ink bounds of `text` at `size` px, pen origin at (0, 0).
pub fn measure(font: &FontArc, size: u32, text: &str) -> BoundingBox {
    let scaled = font.as_scaled(PxScale::from(size as f32));
    let (h_factor, v_factor) = (scaled.h_scale_factor(), scaled.v_scale_factor());
    let (glyphs, caret) = layout(font, size, 0.0, 0.0, text);

    let mut ink: Option<BoundingBox> = None;
    for glyph in &glyphs {
        let Some(outline) = font.outline(glyph.id) else {
            continue;
        };
        // Font units are y-up; canvas space is y-down.
        let bounds = BoundingBox {
            left: glyph.position.x + outline.bounds.min.x * h_factor,
            right: glyph.position.x + outline.bounds.max.x * h_factor,
            top: -outline.bounds.max.y * v_factor,
            bottom: -outline.bounds.min.y * v_factor,
        };
        ink = Some(match ink {
            None => bounds,
            Some(acc) => BoundingBox {
                left: acc.left.min(bounds.left),
                right: acc.right.max(bounds.right),
                top: acc.top.min(bounds.top),
                bottom: acc.bottom.max(bounds.bottom),
            },
        });
    }

    // Whitespace-only runs have no ink; fall back to the advance box.
    ink.unwrap_or(BoundingBox {
        left: 0.0,
        right: caret,
        top: -scaled.ascent(),
        bottom: -scaled.descent(),
    })
}

/// Rasterize `text` with the pen starting at `(x, baseline)`.
pub fn rasterize(
    font: &FontArc,
    size: u32,
    x: f32,
    baseline: f32,
    text: &str,
    mut plot: impl FnMut(i32, i32, f32),
) {
    let (glyphs, _) = layout(font, size, x, baseline, text);

    for glyph in glyphs {
        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|px, py, coverage| {
                plot(
                    px as i32 + bounds.min.x as i32,
                    py as i32 + bounds.min.y as i32,
                    coverage,
                );
            });
        }
    }
}

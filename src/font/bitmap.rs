//! Built-in fallback face: Spleen 12x24, scaled with nearest neighbor.
//!
//! A cell is `size` px tall and `size / 2` px wide. The baseline sits
//! [`BASELINE_ROW`] rows into the 24-row cell.

use spleen_font::{FONT_12X24, PSF2Font};

use super::BoundingBox;

const CELL_WIDTH: usize = 12;
const CELL_HEIGHT: usize = 24;

/// Rows above the baseline in the unscaled cell.
pub const BASELINE_ROW: usize = 19;

fn advance(size: u32) -> f32 {
    size as f32 * CELL_WIDTH as f32 / CELL_HEIGHT as f32
}

fn ascent(size: u32) -> f32 {
    size as f32 * BASELINE_ROW as f32 / CELL_HEIGHT as f32
}

/// Cell bounds of `text` at `size` px, pen origin at (0, 0).
pub fn measure(size: u32, text: &str) -> BoundingBox {
    let chars = text.chars().count() as f32;
    BoundingBox {
        left: 0.0,
        right: chars * advance(size),
        top: -ascent(size),
        bottom: size as f32 - ascent(size),
    }
}

/// Unscaled 12x24 bitmap for `ch`, row-major. Unknown characters get a box.
fn glyph(font: Option<&mut PSF2Font>, ch: char) -> [bool; CELL_WIDTH * CELL_HEIGHT] {
    let mut cell = [false; CELL_WIDTH * CELL_HEIGHT];
    let mut buf = [0u8; 4];
    let utf8 = ch.encode_utf8(&mut buf);

    match font.and_then(|f| f.glyph_for_utf8(utf8.as_bytes())) {
        Some(rows) => {
            for (row_y, row) in rows.enumerate().take(CELL_HEIGHT) {
                for (col_x, on) in row.enumerate().take(CELL_WIDTH) {
                    cell[row_y * CELL_WIDTH + col_x] = on;
                }
            }
        }
        None => draw_box(&mut cell),
    }

    cell
}

fn draw_box(cell: &mut [bool]) {
    for x in 0..CELL_WIDTH {
        cell[x] = true;
        cell[(CELL_HEIGHT - 1) * CELL_WIDTH + x] = true;
    }
    for y in 0..CELL_HEIGHT {
        cell[y * CELL_WIDTH] = true;
        cell[y * CELL_WIDTH + CELL_WIDTH - 1] = true;
    }
}

/// Rasterize `text` with the pen starting at `(x, baseline)`.
pub fn rasterize(size: u32, x: f32, baseline: f32, text: &str, mut plot: impl FnMut(i32, i32, f32)) {
    let mut font = PSF2Font::new(FONT_12X24).ok();
    let cell_w = advance(size);
    let cell_h = size as usize;
    let top = (baseline - ascent(size)).round() as i32;

    for (i, ch) in text.chars().enumerate() {
        if ch.is_whitespace() {
            continue;
        }
        let bitmap = glyph(font.as_mut(), ch);

        let x0 = (x + i as f32 * cell_w).round() as i32;
        let x1 = (x + (i + 1) as f32 * cell_w).round() as i32;
        let dst_w = (x1 - x0).max(1) as usize;

        for dy in 0..cell_h {
            let sy = dy * CELL_HEIGHT / cell_h;
            for dx in 0..dst_w {
                let sx = dx * CELL_WIDTH / dst_w;
                if bitmap[sy * CELL_WIDTH + sx] {
                    plot(x0 + dx as i32, top + dy as i32, 1.0);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_scales_with_size() {
        let small = measure(24, "abc");
        assert_eq!(small.width(), 36.0);
        assert_eq!(small.height(), 24.0);
        assert_eq!(small.top, -19.0);

        let large = measure(48, "abc");
        assert_eq!(large.width(), 72.0);
    }

    #[test]
    fn test_measure_is_monotonic() {
        let mut last = 0.0;
        for size in 1..200 {
            let width = measure(size, "250×250").width();
            assert!(width >= last);
            last = width;
        }
    }

    #[test]
    fn test_rasterize_stays_in_cell() {
        let mut pixels = Vec::new();
        rasterize(24, 10.0, 30.0, "AB", |x, y, c| pixels.push((x, y, c)));

        assert!(!pixels.is_empty());
        for &(x, y, c) in &pixels {
            assert!((10..34).contains(&x), "x={}", x);
            assert!((11..35).contains(&y), "y={}", y);
            assert_eq!(c, 1.0);
        }
    }

    #[test]
    fn test_whitespace_draws_nothing() {
        let mut count = 0;
        rasterize(24, 0.0, 19.0, "   ", |_, _, _| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_unknown_glyph_draws_box() {
        let cell = glyph(None, 'A');
        assert!(cell[0]);
        assert!(cell[CELL_WIDTH - 1]);
        assert!(!cell[CELL_WIDTH + 1]);
    }
}

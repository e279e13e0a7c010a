//! # Color Model
//!
//! Plain RGB value type with HSL conversion, contrast selection and inversion.
//!
//! A [`Color`] stores 8-bit channels. Its HSL form is derived on demand and
//! round-trips through [`Color::from_hsl`] within one channel unit.
//!
//! ## Example
//!
//! ```
//! use placehold::color::Color;
//!
//! let bg = Color::from_hex("#f02")?;
//! assert_eq!(bg.to_hex(), "#ff0022");
//! assert_eq!(bg.contrast(), Color::BLACK);
//! assert_eq!(bg.inverse().to_hex(), "#00ffdd");
//! # Ok::<(), placehold::PlaceholdError>(())
//! ```

mod parse;
mod random;

pub use random::HslRange;

use std::fmt;

use crate::error::{PlaceholdError, Result};

/// Lightness above which black text is chosen over white.
/// Exactly 0.5 also resolves to black.
pub const CONTRAST_THRESHOLD: f64 = 0.5;

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue/saturation/lightness triple.
///
/// Hue is in degrees `[0, 360)`, saturation and lightness are ratios `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Construct from explicit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 3- or 6-digit hex color.
    ///
    /// Anything that is not a hex digit (`#`, whitespace, ...) is stripped
    /// first. Three digits are expanded by duplicating each one.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits: Vec<u8> = hex
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|d| d as u8)
            .collect();

        match digits.as_slice() {
            &[r, g, b] => Ok(Self::rgb(r * 17, g * 17, b * 17)),
            &[r1, r0, g1, g0, b1, b0] => Ok(Self::rgb(
                r1 * 16 + r0,
                g1 * 16 + g0,
                b1 * 16 + b0,
            )),
            _ => Err(PlaceholdError::InvalidColorFormat(hex.to_string())),
        }
    }

    /// Construct from an HSL triple. Hue wraps, saturation and lightness clamp.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let h = hsl.h.rem_euclid(360.0) / 360.0;
        let s = hsl.s.clamp(0.0, 1.0);
        let l = hsl.l.clamp(0.0, 1.0);

        if s == 0.0 {
            let v = to_channel(l);
            return Self::rgb(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Self::rgb(
            to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            to_channel(hue_to_rgb(p, q, h)),
            to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_hsl(&self) -> Hsl {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl::new(0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl::new(h * 60.0, s, l)
    }

    /// HSL lightness: midpoint of the largest and smallest channel.
    pub fn lightness(&self) -> f64 {
        let max = self.r.max(self.g).max(self.b) as f64;
        let min = self.r.min(self.g).min(self.b) as f64;
        (max + min) / 510.0
    }

    /// Black or white, whichever reads better on top of this color.
    pub fn contrast(&self) -> Color {
        if self.lightness() >= CONTRAST_THRESHOLD {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }

    /// Per-channel `255 - c`.
    pub fn inverse(&self) -> Color {
        Color::rgb(255 - self.r, 255 - self.g, 255 - self.b)
    }

    /// Invert a hex string, falling back to black unless it holds exactly
    /// six hex digits after an optional `#`.
    pub fn inverse_hex(hex: &str) -> Color {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Color::BLACK;
        }
        Color::from_hex(digits)
            .map(|c| c.inverse())
            .unwrap_or(Color::BLACK)
    }
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Color::from_hsl(hsl)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb([color.r, color.g, color.b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, tolerance: f64) {
        assert!((a - b).abs() <= tolerance, "{} vs {}", a, b);
    }

    #[test]
    fn test_from_hex_short_and_long() {
        assert_eq!(Color::from_hex("#444").unwrap(), Color::rgb(0x44, 0x44, 0x44));
        assert_eq!(Color::from_hex("034").unwrap(), Color::rgb(0x00, 0x33, 0x44));
        assert_eq!(Color::from_hex("#A1b2C3").unwrap(), Color::rgb(0xa1, 0xb2, 0xc3));
        assert_eq!(Color::from_hex(" # ff 00 22 ").unwrap(), Color::rgb(255, 0, 0x22));
    }

    #[test]
    fn test_from_hex_rejects_bad_lengths() {
        for bad in ["", "#", "12", "1234", "12345", "1234567", "#zzz"] {
            assert!(
                matches!(Color::from_hex(bad), Err(PlaceholdError::InvalidColorFormat(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_hex_round_trip() {
        for hex in ["#000000", "#ffffff", "#444444", "#ff0022", "#00ffdd", "#123abc", "#7f7f80"] {
            assert_eq!(Color::from_hex(hex).unwrap().to_hex(), hex);
        }
        assert_eq!(Color::from_hex("ABCDEF").unwrap().to_hex(), "#abcdef");
    }

    #[test]
    fn test_to_hsl_primaries() {
        let red = Color::rgb(255, 0, 0).to_hsl();
        assert_close(red.h, 0.0, 1e-9);
        assert_close(red.s, 1.0, 1e-9);
        assert_close(red.l, 0.5, 1e-9);

        let green = Color::rgb(0, 255, 0).to_hsl();
        assert_close(green.h, 120.0, 1e-9);

        let blue = Color::rgb(0, 0, 255).to_hsl();
        assert_close(blue.h, 240.0, 1e-9);

        // Red is max but green < blue: hue wraps into [300, 360)
        let magenta_ish = Color::rgb(255, 0, 128).to_hsl();
        assert!(magenta_ish.h > 300.0 && magenta_ish.h < 360.0);
    }

    #[test]
    fn test_grey_has_no_hue_or_saturation() {
        let hsl = Color::rgb(68, 68, 68).to_hsl();
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert_close(hsl.l, 68.0 / 255.0, 1e-9);
    }

    #[test]
    fn test_from_hsl_known_values() {
        assert_eq!(Color::from_hsl(Hsl::new(0.0, 1.0, 0.5)), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_hsl(Hsl::new(120.0, 1.0, 0.5)), Color::rgb(0, 255, 0));
        assert_eq!(Color::from_hsl(Hsl::new(240.0, 1.0, 0.5)), Color::rgb(0, 0, 255));
        assert_eq!(Color::from_hsl(Hsl::new(0.0, 0.0, 1.0)), Color::WHITE);
        assert_eq!(Color::from_hsl(Hsl::new(0.0, 0.0, 0.0)), Color::BLACK);
        // 360 wraps back to red
        assert_eq!(Color::from_hsl(Hsl::new(360.0, 1.0, 0.5)), Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_hsl_round_trip_within_tolerance() {
        let samples = [
            Hsl::new(90.0, 0.9, 0.5),
            Hsl::new(200.0, 0.6, 0.4),
            Hsl::new(330.0, 0.75, 0.65),
            Hsl::new(45.0, 0.5, 0.3),
            Hsl::new(10.0, 1.0, 0.8),
        ];
        for hsl in samples {
            let back = Color::from_hsl(hsl).to_hsl();
            // Hue tolerance is 0.01 of a full turn
            assert_close(back.h, hsl.h, 3.6);
            assert_close(back.s, hsl.s, 0.01);
            assert_close(back.l, hsl.l, 0.01);
        }
    }

    #[test]
    fn test_rgb_round_trip_through_hsl() {
        for color in [
            Color::rgb(12, 200, 99),
            Color::rgb(255, 128, 0),
            Color::rgb(1, 2, 3),
            Color::rgb(0xa1, 0xb2, 0xc3),
        ] {
            let back = Color::from_hsl(color.to_hsl());
            assert!((back.r as i16 - color.r as i16).abs() <= 1);
            assert!((back.g as i16 - color.g as i16).abs() <= 1);
            assert!((back.b as i16 - color.b as i16).abs() <= 1);
        }
    }

    #[test]
    fn test_contrast_threshold() {
        assert_eq!(Color::BLACK.contrast(), Color::WHITE);
        assert_eq!(Color::WHITE.contrast(), Color::BLACK);
        assert_eq!(Color::from_hex("#444").unwrap().contrast(), Color::WHITE);
        assert_eq!(Color::from_hex("#ccc").unwrap().contrast(), Color::BLACK);
        // Pure red sits exactly at lightness 0.5
        assert_eq!(Color::rgb(255, 0, 0).lightness(), 0.5);
        assert_eq!(Color::rgb(255, 0, 0).contrast(), Color::BLACK);
        // Just below the threshold
        assert_eq!(Color::rgb(254, 0, 0).contrast(), Color::WHITE);
    }

    #[test]
    fn test_inverse_is_involution() {
        for color in [Color::BLACK, Color::WHITE, Color::rgb(1, 128, 254), Color::rgb(0x44, 0x44, 0x44)] {
            assert_eq!(color.inverse().inverse(), color);
        }
        assert_eq!(Color::rgb(0, 255, 16).inverse(), Color::rgb(255, 0, 239));
    }

    #[test]
    fn test_inverse_hex_fails_closed() {
        assert_eq!(Color::inverse_hex("#00ff10"), Color::rgb(255, 0, 239));
        assert_eq!(Color::inverse_hex("00ff10"), Color::rgb(255, 0, 239));
        assert_eq!(Color::inverse_hex("#fff"), Color::BLACK);
        assert_eq!(Color::inverse_hex("nothex"), Color::BLACK);
        assert_eq!(Color::inverse_hex("#gg0000"), Color::BLACK);
    }

    #[test]
    fn test_display_is_hex() {
        assert_eq!(format!("{}", Color::rgb(0, 51, 68)), "#003344");
    }
}

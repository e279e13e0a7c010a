//! # Placeholder Builder
//!
//! Accumulates everything needed to render one placeholder image: size,
//! colors, font, padding ratio, label text, output format and quality.
//!
//! Setters take `self` by value and return the builder, so calls chain.
//! Setters that can reject their input return `Result<Self>` and fail at the
//! call that introduced the bad value.
//!
//! ## Example
//!
//! ```
//! use placehold::{FontResolver, Placeholder};
//!
//! let fonts = FontResolver::builtin();
//! let png = Placeholder::png()
//!     .size(200, 100)?
//!     .bg("#000")?
//!     .render(&fonts)?;
//! assert_eq!(&png[1..4], b"PNG");
//! # Ok::<(), placehold::PlaceholdError>(())
//! ```
//!
//! ## Colors
//!
//! Each of background and foreground holds a [`Paint`]: a concrete color, or
//! a rule deriving it from the other channel (`Contrast`, `Inverse`).
//! Derivations are evaluated at render time against the final value of the
//! other channel. If both channels are derived, the background falls back to
//! [`DEFAULT_BACKGROUND`].
//!
//! The last explicit color wins. Setting a concrete color on one channel
//! turns an explicitly set color on the other channel back into `Contrast`:
//! `fg("#f00")?.bg("#00f")?` draws black text, while `bg("#00f")?.fg("#f00")?`
//! draws red text on black. The default background is not an explicit color.
//!
//! Random colors (`"rand"`) are drawn when the setter is called, which keeps
//! repeated renders of the same builder byte-identical.

use rand::Rng;
use std::fmt;
use std::sync::Arc;

use crate::color::{Color, Hsl, HslRange};
use crate::error::{PlaceholdError, Result};
use crate::font::{DEFAULT_FONT, FontResolver};
use crate::format::ImageFormat;

pub const DEFAULT_WIDTH: u32 = 250;
pub const DEFAULT_HEIGHT: u32 = 250;
pub const DEFAULT_BACKGROUND: Color = Color::rgb(0x44, 0x44, 0x44);
/// Fraction of the canvas width the label may occupy.
pub const DEFAULT_RATIO: f32 = 0.618;
pub const MAX_DIMENSION: u32 = 10_000;
/// Size bounds used by [`Placeholder::random_default`].
pub const DEFAULT_RANDOM_SIZE: (u32, u32) = (500, 900);

/// How a color channel gets its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Color(Color),
    /// Black or white, whichever contrasts with the other channel.
    Contrast,
    /// Channel-wise inverse of the other channel.
    Inverse,
}

impl Paint {
    /// `auto`, `inv`, `rand`, or anything [`Color::parse`] accepts.
    pub fn parse(input: &str) -> Result<Paint> {
        match input.trim().to_ascii_lowercase().as_str() {
            "auto" | "contrast" => Ok(Paint::Contrast),
            "inv" | "inverse" => Ok(Paint::Inverse),
            "rand" | "random" => Ok(Paint::Color(Color::random())),
            _ => Color::parse(input).map(Paint::Color),
        }
    }

    fn derive_from(self, other: Color) -> Color {
        match self {
            Paint::Color(c) => c,
            Paint::Contrast => other.contrast(),
            Paint::Inverse => other.inverse(),
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Color(color)
    }
}

/// Builder state after colors have been resolved. Passed to deferred text.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub foreground: Color,
    pub font: String,
    pub ratio: f32,
    pub format: ImageFormat,
    pub quality: Option<u8>,
}

/// Deferred label: computed from the resolved state at render time.
pub type TextFn = Arc<dyn Fn(&Resolved) -> String + Send + Sync>;

#[derive(Clone)]
enum Label {
    Dimensions,
    Literal(String),
    Deferred(TextFn),
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Dimensions => f.write_str("Dimensions"),
            Label::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Label::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// Placeholder image configuration.
#[derive(Debug, Clone)]
pub struct Placeholder {
    width: u32,
    height: u32,
    background: Paint,
    foreground: Paint,
    /// False while the background still holds the default.
    background_set: bool,
    font: String,
    ratio: f32,
    label: Label,
    format: ImageFormat,
    quality: Option<u8>,
}

impl Default for Placeholder {
    fn default() -> Self {
        Self::with_format(ImageFormat::Png)
    }
}

impl Placeholder {
    /// PNG placeholder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn png() -> Self {
        Self::with_format(ImageFormat::Png)
    }

    pub fn jpeg() -> Self {
        Self::with_format(ImageFormat::Jpeg)
    }

    pub fn gif() -> Self {
        Self::with_format(ImageFormat::Gif)
    }

    pub fn with_format(format: ImageFormat) -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: Paint::Color(DEFAULT_BACKGROUND),
            foreground: Paint::Contrast,
            background_set: false,
            font: DEFAULT_FONT.to_string(),
            ratio: DEFAULT_RATIO,
            label: Label::Dimensions,
            format,
            quality: format.default_quality(),
        }
    }

    /// PNG with random dimensions in `[min, max]` and a random background.
    pub fn random(min: u32, max: u32) -> Result<Self> {
        Ok(Self::png().size_rand(min, max)?.bg_color(Color::random()))
    }

    /// [`Placeholder::random`] with sizes drawn from [`DEFAULT_RANDOM_SIZE`].
    pub fn random_default() -> Self {
        let (min, max) = DEFAULT_RANDOM_SIZE;
        let (width, height) = random_dimensions(min, max);
        Self {
            width,
            height,
            ..Self::png()
        }
        .bg_color(Color::random())
    }

    // ===== Size =====

    pub fn size(mut self, width: u32, height: u32) -> Result<Self> {
        self.width = check_dimension("width", width)?;
        self.height = check_dimension("height", height)?;
        Ok(self)
    }

    /// Width and height drawn independently from `[min, max]`.
    /// Bounds given in reverse order are swapped.
    pub fn size_rand(self, min: u32, max: u32) -> Result<Self> {
        let (min, max) = (min.min(max), min.max(max));
        check_dimension("minimum size", min)?;
        check_dimension("maximum size", max)?;

        let (width, height) = random_dimensions(min, max);
        self.size(width, height)
    }

    // ===== Colors =====

    /// Background from a string: `rand`, `auto`, `inv`, hex, `rgb(..)`, `hsl(..)`.
    pub fn bg(self, input: &str) -> Result<Self> {
        Ok(self.bg_paint(Paint::parse(input)?))
    }

    pub fn bg_paint(mut self, paint: Paint) -> Self {
        if is_color(paint) && is_color(self.foreground) {
            self.foreground = Paint::Contrast;
        }
        self.background = paint;
        self.background_set = true;
        self
    }

    pub fn bg_color(self, color: Color) -> Self {
        self.bg_paint(Paint::Color(color))
    }

    /// Hue in degrees, saturation and lightness as ratios.
    pub fn bg_hsl(self, h: f64, s: f64, l: f64) -> Self {
        self.bg_color(Color::from_hsl(Hsl::new(h, s, l)))
    }

    pub fn bg_random(self, range: &HslRange) -> Self {
        self.bg_color(Color::random_in(range))
    }

    /// Random background inside the HSL bounding box of two colors.
    pub fn bg_rand_between(self, a: &str, b: &str) -> Result<Self> {
        let (a, b) = (Color::parse(a)?, Color::parse(b)?);
        Ok(self.bg_color(Color::random_between(a, b)))
    }

    /// Foreground from a string: `rand`, `auto`, `inv`, hex, `rgb(..)`, `hsl(..)`.
    pub fn fg(self, input: &str) -> Result<Self> {
        Ok(self.fg_paint(Paint::parse(input)?))
    }

    pub fn fg_paint(mut self, paint: Paint) -> Self {
        if is_color(paint) && self.background_set && is_color(self.background) {
            self.background = Paint::Contrast;
        }
        self.foreground = paint;
        self
    }

    pub fn fg_color(self, color: Color) -> Self {
        self.fg_paint(Paint::Color(color))
    }

    pub fn fg_hsl(self, h: f64, s: f64, l: f64) -> Self {
        self.fg_color(Color::from_hsl(Hsl::new(h, s, l)))
    }

    pub fn fg_random(self, range: &HslRange) -> Self {
        self.fg_color(Color::random_in(range))
    }

    pub fn fg_rand_between(self, a: &str, b: &str) -> Result<Self> {
        let (a, b) = (Color::parse(a)?, Color::parse(b)?);
        Ok(self.fg_color(Color::random_between(a, b)))
    }

    // ===== Text =====

    /// Font identifier, e.g. `"Roboto Condensed Light"`.
    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    /// Largest fraction of the width the label may span, in `(0, 1]`.
    pub fn max_font(mut self, ratio: f32) -> Result<Self> {
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(PlaceholdError::InvalidRatio(ratio));
        }
        self.ratio = ratio;
        Ok(self)
    }

    /// Literal label. An empty string restores the `{width}×{height}` default.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.label = if text.is_empty() {
            Label::Dimensions
        } else {
            Label::Literal(text)
        };
        self
    }

    /// Label computed from the resolved state, once per render.
    pub fn text_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&Resolved) -> String + Send + Sync + 'static,
    {
        self.label = Label::Deferred(Arc::new(f));
        self
    }

    /// Label with `{width}`, `{height}`, `{bg}`, `{fg}`, `{font}` and
    /// `{format}` substituted at render time.
    pub fn text_template(self, template: impl Into<String>) -> Self {
        let template = template.into();
        if !template.contains('{') {
            return self.text(template);
        }
        self.text_with(move |resolved| expand_template(&template, resolved))
    }

    // ===== Output =====

    /// Switch format. Quality resets to the new format's default.
    pub fn format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self.quality = format.default_quality();
        self
    }

    /// PNG compression level (0-9) or JPEG quality (0-100).
    ///
    /// PNG levels select one of three encoder presets: 0-3 fast, 4-6 default,
    /// 7-9 best. Levels within a band produce identical output.
    pub fn quality(mut self, quality: u8) -> Result<Self> {
        self.quality = Some(self.format.validate_quality(quality)?);
        Ok(self)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn output_format(&self) -> ImageFormat {
        self.format
    }

    pub fn output_quality(&self) -> Option<u8> {
        self.quality
    }

    pub fn background(&self) -> Paint {
        self.background
    }

    pub fn foreground(&self) -> Paint {
        self.foreground
    }

    /// Resolve derived colors.
    pub fn resolve(&self) -> Resolved {
        let background = match (self.background, self.foreground) {
            (Paint::Color(bg), _) => bg,
            (derived, Paint::Color(fg)) => derived.derive_from(fg),
            _ => DEFAULT_BACKGROUND,
        };
        let foreground = self.foreground.derive_from(background);

        Resolved {
            width: self.width,
            height: self.height,
            background,
            foreground,
            font: self.font.clone(),
            ratio: self.ratio,
            format: self.format,
            quality: self.quality,
        }
    }

    /// Evaluate the label against resolved state.
    pub fn label(&self, resolved: &Resolved) -> String {
        match &self.label {
            Label::Dimensions => format!("{}×{}", resolved.width, resolved.height),
            Label::Literal(text) => text.clone(),
            Label::Deferred(f) => f(resolved),
        }
    }

    /// Render to encoded bytes.
    pub fn render(&self, fonts: &FontResolver) -> Result<Vec<u8>> {
        crate::render::render(self, fonts)
    }

    /// Render to a `data:image/{format};base64,...` URI.
    pub fn render_data_uri(&self, fonts: &FontResolver) -> Result<String> {
        let bytes = self.render(fonts)?;
        Ok(crate::render::data_uri(&bytes, self.format))
    }
}

fn random_dimensions(min: u32, max: u32) -> (u32, u32) {
    let mut rng = rand::rng();
    (rng.random_range(min..=max), rng.random_range(min..=max))
}

fn is_color(paint: Paint) -> bool {
    matches!(paint, Paint::Color(_))
}

fn check_dimension(what: &str, value: u32) -> Result<u32> {
    if value == 0 || value > MAX_DIMENSION {
        return Err(PlaceholdError::InvalidDimensions(format!(
            "{} must be between 1 and {}, got {}",
            what, MAX_DIMENSION, value
        )));
    }
    Ok(value)
}

fn expand_template(template: &str, resolved: &Resolved) -> String {
    template
        .replace("{width}", &resolved.width.to_string())
        .replace("{height}", &resolved.height.to_string())
        .replace("{bg}", &resolved.background.to_hex())
        .replace("{fg}", &resolved.foreground.to_hex())
        .replace("{font}", &resolved.font)
        .replace("{format}", resolved.format.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let resolved = Placeholder::new().resolve();
        assert_eq!((resolved.width, resolved.height), (250, 250));
        assert_eq!(resolved.background, DEFAULT_BACKGROUND);
        assert_eq!(resolved.foreground, Color::WHITE);
        assert_eq!(resolved.font, "Roboto Condensed Regular");
        assert_eq!(resolved.ratio, 0.618);
        assert_eq!(resolved.format, ImageFormat::Png);
        assert_eq!(resolved.quality, Some(6));
    }

    #[test]
    fn test_black_background_gets_white_text() {
        let p = Placeholder::new().size(200, 100).unwrap().bg("#000000").unwrap();
        let resolved = p.resolve();
        assert_eq!(resolved.foreground.to_hex(), "#ffffff");
        assert_eq!(resolved.format, ImageFormat::Png);
        assert_eq!(p.label(&resolved), "200×100");
    }

    #[test]
    fn test_foreground_follows_later_background() {
        let p = Placeholder::new().fg("auto").unwrap().bg("#eee").unwrap();
        assert_eq!(p.resolve().foreground, Color::BLACK);

        let p = Placeholder::new().bg("#eee").unwrap().fg("inv").unwrap();
        assert_eq!(p.resolve().foreground, Color::rgb(0x11, 0x11, 0x11));
    }

    #[test]
    fn test_later_background_resets_foreground() {
        let resolved = Placeholder::new()
            .fg("#f00")
            .unwrap()
            .bg("#00f")
            .unwrap()
            .resolve();
        assert_eq!(resolved.background, Color::rgb(0, 0, 255));
        assert_eq!(resolved.foreground, Color::rgb(0, 0, 255).contrast());
    }

    #[test]
    fn test_later_foreground_resets_background() {
        let resolved = Placeholder::new()
            .bg("#fff")
            .unwrap()
            .fg("#f00")
            .unwrap()
            .resolve();
        assert_eq!(resolved.foreground, Color::rgb(255, 0, 0));
        assert_eq!(resolved.background, Color::rgb(255, 0, 0).contrast());
    }

    #[test]
    fn test_foreground_keeps_default_background() {
        let resolved = Placeholder::new().fg("#f00").unwrap().resolve();
        assert_eq!(resolved.background, DEFAULT_BACKGROUND);
        assert_eq!(resolved.foreground, Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_derived_paint_does_not_reset_other_channel() {
        let resolved = Placeholder::new()
            .fg("#f00")
            .unwrap()
            .bg("inv")
            .unwrap()
            .resolve();
        assert_eq!(resolved.foreground, Color::rgb(255, 0, 0));
        assert_eq!(resolved.background, Color::rgb(0, 255, 255));
    }

    #[test]
    fn test_background_derived_from_foreground() {
        let p = Placeholder::new().bg("auto").unwrap().fg("#fff").unwrap();
        assert_eq!(p.resolve().background, Color::BLACK);

        let p = Placeholder::new().bg("inv").unwrap().fg("#034").unwrap();
        assert_eq!(p.resolve().background, Color::rgb(0xff, 0xcc, 0xbb));
    }

    #[test]
    fn test_both_derived_uses_default_background() {
        let p = Placeholder::new().bg("auto").unwrap().fg("inv").unwrap();
        let resolved = p.resolve();
        assert_eq!(resolved.background, DEFAULT_BACKGROUND);
        assert_eq!(resolved.foreground, DEFAULT_BACKGROUND.inverse());
    }

    #[test]
    fn test_random_background_is_fixed_once_set() {
        let p = Placeholder::new().bg("rand").unwrap();
        assert_eq!(p.resolve(), p.resolve());
        assert!(matches!(p.background(), Paint::Color(_)));
    }

    #[test]
    fn test_random_backgrounds_are_consistent_colors() {
        for _ in 0..2 {
            let bg = Placeholder::new().bg("rand").unwrap().resolve().background;
            assert_eq!(Color::from_hex(&bg.to_hex()).unwrap(), bg);
        }
    }

    #[test]
    fn test_bad_color_fails_fast() {
        assert!(matches!(
            Placeholder::new().bg("nope"),
            Err(PlaceholdError::UnparseableColor(_))
        ));
        assert!(Placeholder::new().fg("rgb(1,2)").is_err());
        assert!(Placeholder::new().bg_rand_between("#f00", "bogus").is_err());
    }

    #[test]
    fn test_quality_validated_against_current_format() {
        assert!(matches!(
            Placeholder::png().quality(10),
            Err(PlaceholdError::InvalidQuality { .. })
        ));
        assert_eq!(Placeholder::jpeg().quality(10).unwrap().output_quality(), Some(10));
        assert!(Placeholder::gif().quality(1).is_err());
    }

    #[test]
    fn test_format_change_resets_quality() {
        let p = Placeholder::jpeg().quality(90).unwrap().format(ImageFormat::Png);
        assert_eq!(p.output_quality(), Some(6));
        let p = p.format(ImageFormat::Gif);
        assert_eq!(p.output_quality(), None);
    }

    #[test]
    fn test_size_validation() {
        assert!(matches!(
            Placeholder::new().size(0, 10),
            Err(PlaceholdError::InvalidDimensions(_))
        ));
        assert!(Placeholder::new().size(10, MAX_DIMENSION + 1).is_err());
        assert_eq!(Placeholder::new().size(1, 1).unwrap().dimensions(), (1, 1));
    }

    #[test]
    fn test_size_rand_swaps_reversed_bounds() {
        for _ in 0..20 {
            let (w, h) = Placeholder::new().size_rand(200, 120).unwrap().dimensions();
            assert!((120..=200).contains(&w));
            assert!((120..=200).contains(&h));
        }
    }

    #[test]
    fn test_random_constructor() {
        let p = Placeholder::random(50, 100).unwrap();
        let (w, h) = p.dimensions();
        assert!((50..=100).contains(&w) && (50..=100).contains(&h));
        assert_eq!(p.foreground(), Paint::Contrast);
    }

    #[test]
    fn test_random_default_uses_default_bounds() {
        let (min, max) = DEFAULT_RANDOM_SIZE;
        for _ in 0..10 {
            let p = Placeholder::random_default();
            let (w, h) = p.dimensions();
            assert!((min..=max).contains(&w) && (min..=max).contains(&h));
            assert!(matches!(p.background(), Paint::Color(_)));
            assert_eq!(p.output_format(), ImageFormat::Png);
        }
    }

    #[test]
    fn test_ratio_validation() {
        assert!(Placeholder::new().max_font(1.0).is_ok());
        for bad in [0.0, -0.5, 1.01, f32::NAN] {
            assert!(matches!(
                Placeholder::new().max_font(bad),
                Err(PlaceholdError::InvalidRatio(_))
            ));
        }
    }

    #[test]
    fn test_deferred_text_sees_resolved_colors() {
        let p = Placeholder::new()
            .bg("#034")
            .unwrap()
            .text_with(|r| r.background.to_hex());
        assert_eq!(p.label(&p.resolve()), "#003344");
    }

    #[test]
    fn test_text_template() {
        let p = Placeholder::jpeg()
            .size(120, 80)
            .unwrap()
            .bg("#fff")
            .unwrap()
            .text_template("{bg} on {fg} ({width}x{height} {format})");
        assert_eq!(p.label(&p.resolve()), "#ffffff on #000000 (120x80 jpeg)");
    }

    #[test]
    fn test_empty_text_means_dimensions() {
        let p = Placeholder::new().text("hello").text("");
        assert_eq!(p.label(&p.resolve()), "250×250");
    }
}

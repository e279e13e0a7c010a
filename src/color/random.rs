//! Random colors drawn uniformly in HSL space.

use rand::Rng;

use super::{Color, Hsl};

/// Inclusive bounds for each HSL component.
///
/// Hue is in degrees, saturation and lightness are ratios. Bounds given in
/// reverse order are swapped; out-of-domain values are clamped. A component
/// with a NaN or infinite bound covers its whole domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslRange {
    pub hue: (f64, f64),
    pub saturation: (f64, f64),
    pub lightness: (f64, f64),
}

impl Default for HslRange {
    fn default() -> Self {
        Self {
            hue: (0.0, 360.0),
            saturation: (0.0, 1.0),
            lightness: (0.0, 1.0),
        }
    }
}

impl HslRange {
    pub fn new(hue: (f64, f64), saturation: (f64, f64), lightness: (f64, f64)) -> Self {
        Self {
            hue: ordered(hue, 360.0),
            saturation: ordered(saturation, 1.0),
            lightness: ordered(lightness, 1.0),
        }
    }

    /// Restrict the hue, keeping the other bounds.
    pub fn hue(self, min: f64, max: f64) -> Self {
        Self::new((min, max), self.saturation, self.lightness)
    }

    pub fn saturation(self, min: f64, max: f64) -> Self {
        Self::new(self.hue, (min, max), self.lightness)
    }

    pub fn lightness(self, min: f64, max: f64) -> Self {
        Self::new(self.hue, self.saturation, (min, max))
    }

    /// Component-wise bounding box of two HSL points.
    ///
    /// Each component is bounded independently, so the box can contain
    /// colors that look nothing like either endpoint.
    pub fn bounding(a: Hsl, b: Hsl) -> Self {
        Self::new((a.h, b.h), (a.s, b.s), (a.l, b.l))
    }

    /// Draw one HSL triple uniformly from the box.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Hsl {
        // Fields are public, so bounds may not have gone through `new`.
        let Self {
            hue,
            saturation,
            lightness,
        } = Self::new(self.hue, self.saturation, self.lightness);
        Hsl::new(
            rng.random_range(hue.0..=hue.1),
            rng.random_range(saturation.0..=saturation.1),
            rng.random_range(lightness.0..=lightness.1),
        )
    }
}

fn ordered((a, b): (f64, f64), max: f64) -> (f64, f64) {
    if !(a.is_finite() && b.is_finite()) {
        return (0.0, max);
    }
    let a = a.clamp(0.0, max);
    let b = b.clamp(0.0, max);
    (a.min(b), a.max(b))
}

impl Color {
    /// Uniform over the full HSL domain.
    pub fn random() -> Color {
        Color::random_in(&HslRange::default())
    }

    pub fn random_in(range: &HslRange) -> Color {
        Color::random_in_with(range, &mut rand::rng())
    }

    pub fn random_in_with<R: Rng + ?Sized>(range: &HslRange, rng: &mut R) -> Color {
        Color::from_hsl(range.sample(rng))
    }

    /// Random color inside the HSL bounding box of two colors.
    pub fn random_between(a: Color, b: Color) -> Color {
        Color::random_in(&HslRange::bounding(a.to_hsl(), b.to_hsl()))
    }
}

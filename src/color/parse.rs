//! Tolerant color string parsing.
//!
//! Accepted forms:
//!
//! - hex: `#f02`, `ff0022`, `034`
//! - `rgb(240, 100, 50)` / `rgba(...)` (alpha ignored), channels `0..=255` or percentages
//! - `hsl(90, 90%, 50%)` / `hsla(...)` (alpha ignored), hue in degrees,
//!   saturation/lightness as percentages or ratios

use std::str::FromStr;

use super::{Color, Hsl};
use crate::error::{PlaceholdError, Result};

impl Color {
    /// Parse a hex, `rgb(...)` or `hsl(...)` color string.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_ascii_lowercase();

        if is_plain_hex(&normalized) {
            return Color::from_hex(&normalized);
        }

        let unparseable = || PlaceholdError::UnparseableColor(input.to_string());

        if let Some(args) = functional_args(&normalized, "rgb") {
            return parse_rgb(&args).ok_or_else(unparseable);
        }
        if let Some(args) = functional_args(&normalized, "hsl") {
            return parse_hsl(&args).map(Color::from_hsl).ok_or_else(unparseable);
        }

        Err(unparseable())
    }
}

impl FromStr for Color {
    type Err = PlaceholdError;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

/// `#` followed by 3 or 6 hex digits, the `#` being optional.
fn is_plain_hex(s: &str) -> bool {
    let digits = s.strip_prefix('#').unwrap_or(s);
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Split `name(a, b, c)` or `namea(a, b, c, d)` into its arguments.
fn functional_args<'a>(s: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let rest = s.strip_prefix(name)?;
    let rest = rest.strip_prefix('a').unwrap_or(rest).trim_start();
    let inner = rest.strip_prefix('(')?.strip_suffix(')')?;

    let args: Vec<&str> = inner.split(',').map(str::trim).collect();
    matches!(args.len(), 3 | 4).then_some(args)
}

/// A numeric argument and whether it carried a `%` suffix.
fn number(arg: &str) -> Option<(f64, bool)> {
    let (digits, percent) = match arg.strip_suffix('%') {
        Some(d) => (d.trim_end(), true),
        None => (arg, false),
    };
    let value: f64 = digits.parse().ok()?;
    value.is_finite().then_some((value, percent))
}

fn parse_rgb(args: &[&str]) -> Option<Color> {
    let mut channels = [0u8; 3];
    for (slot, arg) in channels.iter_mut().zip(args) {
        let (value, percent) = number(arg)?;
        let value = if percent { value / 100.0 * 255.0 } else { value };
        if !(0.0..=255.0).contains(&value) {
            return None;
        }
        *slot = value.round() as u8;
    }
    Some(Color::rgb(channels[0], channels[1], channels[2]))
}

fn parse_hsl(args: &[&str]) -> Option<Hsl> {
    let hue = args[0].strip_suffix("deg").unwrap_or(args[0]).trim_end();
    let (h, _) = number(hue)?;
    let s = ratio(args[1])?;
    let l = ratio(args[2])?;
    Some(Hsl::new(h, s, l))
}

/// `50%` and `50` both mean one half; bare values up to 1 are already ratios.
fn ratio(arg: &str) -> Option<f64> {
    let (value, percent) = number(arg)?;
    let value = if percent || value > 1.0 {
        value / 100.0
    } else {
        value
    };
    (0.0..=1.0).contains(&value).then_some(value)
}

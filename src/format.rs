//! Output formats and their quality parameters.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{PlaceholdError, Result};

/// Encoded output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Jpeg,
    Gif,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 3] = [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Gif];

    /// Lowercase name as used in data URIs (`image/{name}`).
    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Gif => "gif",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Gif => "gif",
        }
    }

    /// Valid quality values: PNG compression level 0-9, JPEG quality 0-100.
    /// GIF takes no quality.
    pub fn quality_range(&self) -> Option<RangeInclusive<u8>> {
        match self {
            ImageFormat::Png => Some(0..=9),
            ImageFormat::Jpeg => Some(0..=100),
            ImageFormat::Gif => None,
        }
    }

    pub fn default_quality(&self) -> Option<u8> {
        match self {
            ImageFormat::Png => Some(6),
            ImageFormat::Jpeg => Some(75),
            ImageFormat::Gif => None,
        }
    }

    /// Check `quality` against this format's range.
    pub fn validate_quality(&self, quality: u8) -> Result<u8> {
        match self.quality_range() {
            Some(range) if range.contains(&quality) => Ok(quality),
            range => Err(PlaceholdError::InvalidQuality {
                format: self.name().to_string(),
                quality,
                range: range
                    .map(|r| format!("{}..={}", r.start(), r.end()))
                    .unwrap_or_else(|| "no quality parameter".to_string()),
            }),
        }
    }
}

impl FromStr for ImageFormat {
    type Err = PlaceholdError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpeg" | "jpg" => Ok(ImageFormat::Jpeg),
            "gif" => Ok(ImageFormat::Gif),
            _ => Err(PlaceholdError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Encoding a finished canvas into PNG, JPEG or GIF bytes.

use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ExtendedColorType, ImageEncoder, RgbImage};

use crate::error::{PlaceholdError, Result};
use crate::format::ImageFormat;

/// Map a 0-9 compression level onto the PNG encoder's three presets.
/// Levels in the same band encode to the same bytes.
fn png_compression(level: u8) -> CompressionType {
    match level {
        0..=3 => CompressionType::Fast,
        4..=6 => CompressionType::Default,
        _ => CompressionType::Best,
    }
}

/// Encode `image` as `format`. `quality` falls back to the format default.
pub fn encode(image: &RgbImage, format: ImageFormat, quality: Option<u8>) -> Result<Vec<u8>> {
    let (width, height) = image.dimensions();
    let quality = quality.or(format.default_quality());
    let mut bytes = Vec::new();

    let result = match format {
        ImageFormat::Png => {
            let compression = png_compression(quality.unwrap_or(6));
            PngEncoder::new_with_quality(&mut bytes, compression, FilterType::Adaptive).write_image(
                image.as_raw(),
                width,
                height,
                ExtendedColorType::Rgb8,
            )
        }
        ImageFormat::Jpeg => {
            // The encoder's scale starts at 1
            let quality = quality.unwrap_or(75).clamp(1, 100);
            JpegEncoder::new_with_quality(&mut bytes, quality).write_image(
                image.as_raw(),
                width,
                height,
                ExtendedColorType::Rgb8,
            )
        }
        ImageFormat::Gif => {
            let rgba = DynamicImage::ImageRgb8(image.clone()).into_rgba8();
            let mut encoder = GifEncoder::new(&mut bytes);
            encoder.encode(rgba.as_raw(), width, height, ExtendedColorType::Rgba8)
        }
    };

    result.map_err(|e| PlaceholdError::Image(format!("{} encoding failed: {}", format, e)))?;
    Ok(bytes)
}

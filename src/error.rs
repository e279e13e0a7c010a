//! # Error Types
//!
//! This module defines error types used throughout the placehold library.

use thiserror::Error;

/// Main error type for placehold operations
#[derive(Debug, Error)]
pub enum PlaceholdError {
    /// Hex string that is not 3 or 6 hex digits once cleaned
    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),

    /// String that is neither hex, `rgb(...)` nor `hsl(...)`
    #[error("Unparseable color: {0}")]
    UnparseableColor(String),

    /// Output format outside png/jpeg/gif
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Quality or compression level outside the format's range
    #[error("Invalid quality {quality} for {format} (expected {range})")]
    InvalidQuality {
        format: String,
        quality: u8,
        range: String,
    },

    /// Width or height out of bounds
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Padding ratio outside (0, 1]
    #[error("Invalid padding ratio {0} (expected 0 < ratio <= 1)")]
    InvalidRatio(f32),

    /// Font could not be loaded. Absorbed by the resolver's fallback chain.
    #[error("Font error: {0}")]
    FontResolution(String),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PlaceholdError>;

//! # Placehold - Placeholder Image Generator
//!
//! Placehold renders stand-in raster images on demand: a solid canvas with a
//! centered label sized to fill a fixed fraction of the width. It provides:
//!
//! - **Color model**: hex/RGB/HSL conversion, parsing, random colors, contrast
//! - **Text fitting**: largest font size within a width ratio, centered placement
//! - **Builder**: chained configuration with fail-fast validation
//! - **Rendering**: PNG, JPEG and GIF output, optionally as a data URI
//!
//! ## Quick Start
//!
//! ```
//! use placehold::{FontResolver, Placeholder};
//!
//! // Fonts are looked up in a directory; the built-in resolver needs none
//! let fonts = FontResolver::builtin();
//!
//! let uri = Placeholder::jpeg()
//!     .size(320, 180)?
//!     .bg("rand")?
//!     .quality(80)?
//!     .text_with(|r| format!("{} on {}", r.foreground, r.background))
//!     .render_data_uri(&fonts)?;
//!
//! assert!(uri.starts_with("data:image/jpeg;base64,"));
//! # Ok::<(), placehold::PlaceholdError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`color`] | Color value type, conversions and parsing |
//! | [`fit`] | Text fit-and-center algorithm |
//! | [`font`] | Font resolution, metrics and rasterization |
//! | [`format`] | Output formats and quality ranges |
//! | [`placeholder`] | The image builder |
//! | [`render`] | Canvas, encoding and data URIs |
//! | [`params`] | Untyped parameters from CLI/HTTP |
//! | [`server`] | HTTP endpoints |
//! | [`error`] | Error types |

pub mod color;
pub mod error;
pub mod fit;
pub mod font;
pub mod format;
pub mod params;
pub mod placeholder;
pub mod render;
pub mod server;

// Re-exports for convenience
pub use color::Color;
pub use error::PlaceholdError;
pub use font::FontResolver;
pub use format::ImageFormat;
pub use placeholder::Placeholder;

//! # Fonts
//!
//! Resolves font identifiers to glyph-rendering handles and exposes the two
//! operations the renderer needs from them: measuring a run of text and
//! rasterizing it as per-pixel coverage.
//!
//! Identifiers are human names such as `"Roboto Condensed Regular"`. Spaces
//! become hyphens and the result is looked up as a `.ttf` (or `.otf`) file in
//! the configured fonts directory. Names containing path separators or `..`
//! are rejected, so lookups never leave that directory.
//!
//! Resolution never fails: a missing font falls back to [`DEFAULT_FONT`], and
//! if that is missing too the built-in Spleen bitmap face is used. Only faces
//! found on disk and the fallback are cached, so the cache is bounded by the
//! number of font files.

pub mod bitmap;
pub mod ttf;

use ab_glyph::FontArc;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{PlaceholdError, Result};

/// Font used when none is configured or the requested one is unavailable.
pub const DEFAULT_FONT: &str = "Roboto Condensed Regular";

/// Ink bounds of a rendered run, relative to a pen origin at the baseline.
///
/// `top` is negative for glyphs rising above the baseline, `bottom` is
/// positive for descenders.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl BoundingBox {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Glyph metrics at an integer pixel size.
///
/// Implementations must be monotonic: the measured width never shrinks as the
/// size grows.
pub trait TextMeasure {
    fn measure(&self, size: u32, text: &str) -> BoundingBox;
}

/// A resolved typeface.
#[derive(Clone)]
pub enum FontHandle {
    /// Outline font loaded from disk.
    Truetype(FontArc),
    /// Built-in Spleen 12x24 bitmap face.
    Bitmap,
}

impl FontHandle {
    /// Rasterize `text` with its pen origin at `(x, baseline)`.
    ///
    /// `plot` receives canvas coordinates and a coverage in `[0, 1]`.
    pub fn rasterize(
        &self,
        size: u32,
        x: f32,
        baseline: f32,
        text: &str,
        plot: impl FnMut(i32, i32, f32),
    ) {
        match self {
            FontHandle::Truetype(font) => ttf::rasterize(font, size, x, baseline, text, plot),
            FontHandle::Bitmap => bitmap::rasterize(size, x, baseline, text, plot),
        }
    }

    pub fn is_bitmap(&self) -> bool {
        matches!(self, FontHandle::Bitmap)
    }
}

impl TextMeasure for FontHandle {
    fn measure(&self, size: u32, text: &str) -> BoundingBox {
        match self {
            FontHandle::Truetype(font) => ttf::measure(font, size, text),
            FontHandle::Bitmap => bitmap::measure(size, text),
        }
    }
}

impl std::fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontHandle::Truetype(_) => f.write_str("FontHandle::Truetype"),
            FontHandle::Bitmap => f.write_str("FontHandle::Bitmap"),
        }
    }
}

/// Turn a display name into the file stem used on disk.
pub fn file_stem(identifier: &str) -> String {
    identifier.trim().replace(' ', "-")
}

/// Maps font identifiers to handles, caching loaded faces.
///
/// Safe to share between threads; loaded faces are reference counted.
pub struct FontResolver {
    dir: Option<PathBuf>,
    cache: RwLock<HashMap<String, FontHandle>>,
}

impl FontResolver {
    /// Resolver that looks for font files in `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Resolver with no font directory: everything renders with the bitmap face.
    pub fn builtin() -> Self {
        Self {
            dir: None,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve an identifier. Never fails.
    pub fn resolve(&self, identifier: &str) -> FontHandle {
        let stem = file_stem(identifier);
        if stem == file_stem(DEFAULT_FONT) {
            return self.fallback();
        }
        if let Some(handle) = self.cached(&stem) {
            return handle;
        }

        match self.load(&stem) {
            Ok(font) => self.remember(stem, FontHandle::Truetype(font)),
            Err(e) => {
                log::warn!("{}; falling back to {}", e, DEFAULT_FONT);
                self.fallback()
            }
        }
    }

    /// The default face, or the bitmap face if that cannot be loaded.
    fn fallback(&self) -> FontHandle {
        let stem = file_stem(DEFAULT_FONT);
        if let Some(handle) = self.cached(&stem) {
            return handle;
        }

        let handle = match self.load(&stem) {
            Ok(font) => FontHandle::Truetype(font),
            Err(e) => {
                log::debug!("{}; using built-in bitmap font", e);
                FontHandle::Bitmap
            }
        };
        self.remember(stem, handle)
    }

    fn cached(&self, stem: &str) -> Option<FontHandle> {
        self.cache.read().ok()?.get(stem).cloned()
    }

    fn remember(&self, stem: String, handle: FontHandle) -> FontHandle {
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(stem, handle.clone());
        }
        handle
    }

    fn load(&self, stem: &str) -> Result<FontArc> {
        if stem.is_empty() || stem.contains(['/', '\\', ':']) || stem.contains("..") {
            return Err(PlaceholdError::FontResolution(format!(
                "invalid font name '{}'",
                stem
            )));
        }

        let dir = self
            .dir
            .as_ref()
            .ok_or_else(|| PlaceholdError::FontResolution("no fonts directory configured".into()))?;

        let path = ["ttf", "otf"]
            .iter()
            .map(|ext| dir.join(format!("{}.{}", stem, ext)))
            .find(|p| p.is_file())
            .ok_or_else(|| {
                PlaceholdError::FontResolution(format!(
                    "font '{}' not found in {}",
                    stem,
                    dir.display()
                ))
            })?;

        ttf::load(&path)
    }
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

//! Loosely typed placeholder parameters, as they arrive from the command line
//! or an HTTP query string, and their conversion into a [`Placeholder`].

use clap::Args;
use serde::Deserialize;

use crate::error::{PlaceholdError, Result};
use crate::format::ImageFormat;
use crate::placeholder::Placeholder;

/// Every knob of a [`Placeholder`] as an optional string or number.
#[derive(Debug, Clone, Default, Deserialize, Args)]
pub struct PlaceholderParams {
    /// Image width in pixels (default 250)
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels (default 250)
    #[arg(long)]
    pub height: Option<u32>,

    /// Lower bound for random dimensions (requires --max-size)
    #[arg(long)]
    pub min_size: Option<u32>,

    /// Upper bound for random dimensions (requires --min-size)
    #[arg(long)]
    pub max_size: Option<u32>,

    /// Background: hex, rgb(..), hsl(..), rand, auto or inv (default #444)
    #[arg(long)]
    pub bg: Option<String>,

    /// Foreground: hex, rgb(..), hsl(..), rand, auto or inv (default auto)
    #[arg(long)]
    pub fg: Option<String>,

    /// Label text; {width}, {height}, {bg}, {fg}, {font}, {format} are substituted
    #[arg(long)]
    pub text: Option<String>,

    /// Font name, looked up as <fonts dir>/<Name-With-Hyphens>.ttf
    #[arg(long)]
    pub font: Option<String>,

    /// Fraction of the width the label may occupy, in (0, 1]
    #[arg(long)]
    pub ratio: Option<f32>,

    /// Output format: png, jpeg or gif
    #[arg(long)]
    pub format: Option<String>,

    /// PNG compression 0-9 or JPEG quality 0-100
    #[arg(long)]
    pub quality: Option<u8>,
}

impl PlaceholderParams {
    /// Build a validated placeholder. Fails on the first bad value.
    ///
    /// `bg` is applied before `fg`, so when both are concrete colors the
    /// foreground wins and the background becomes its contrast color.
    pub fn build(&self) -> Result<Placeholder> {
        let format = match &self.format {
            Some(name) => name.parse()?,
            None => ImageFormat::default(),
        };
        let mut placeholder = Placeholder::with_format(format);

        match (self.min_size, self.max_size) {
            (Some(min), Some(max)) => placeholder = placeholder.size_rand(min, max)?,
            (None, None) => {}
            _ => {
                return Err(PlaceholdError::InvalidDimensions(
                    "min_size and max_size must be given together".to_string(),
                ));
            }
        }

        if self.width.is_some() || self.height.is_some() {
            let (w, h) = placeholder.dimensions();
            placeholder = placeholder.size(self.width.unwrap_or(w), self.height.unwrap_or(h))?;
        }

        if let Some(bg) = &self.bg {
            placeholder = placeholder.bg(bg)?;
        }
        if let Some(fg) = &self.fg {
            placeholder = placeholder.fg(fg)?;
        }
        if let Some(font) = &self.font {
            placeholder = placeholder.font(font.as_str());
        }
        if let Some(ratio) = self.ratio {
            placeholder = placeholder.max_font(ratio)?;
        }
        if let Some(quality) = self.quality {
            placeholder = placeholder.quality(quality)?;
        }
        if let Some(text) = &self.text {
            placeholder = placeholder.text_template(text.as_str());
        }

        Ok(placeholder)
    }
}

//! Server state and configuration.

use std::path::PathBuf;

use crate::font::FontResolver;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Directory holding `.ttf` files; `None` uses the built-in bitmap font
    pub fonts_dir: Option<PathBuf>,
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    /// Font cache shared by every request.
    pub fonts: FontResolver,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let fonts = match &config.fonts_dir {
            Some(dir) => FontResolver::new(dir.clone()),
            None => FontResolver::builtin(),
        };
        Self { config, fonts }
    }
}

//! # HTTP Server for Placeholder Images
//!
//! Serves rendered placeholders over GET so pages can link or embed them.
//!
//! ## Usage
//!
//! ```bash
//! placehold serve --listen 0.0.0.0:8080 --fonts ./fonts
//! ```
//!
//! Then request `http://localhost:8080/api/placeholder?width=320&height=180&bg=rand`.

mod handlers;
mod state;

pub use state::{AppState, ServerConfig};

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::error::PlaceholdError;

/// Build the router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/placeholder", get(handlers::placeholder::image))
        .route("/api/placeholder/data-uri", get(handlers::placeholder::data_uri))
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use placehold::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), placehold::PlaceholdError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     fonts_dir: None,
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), PlaceholdError> {
    let app_state = Arc::new(AppState::new(config.clone()));
    let app = router(app_state);

    println!("Placehold HTTP server starting...");
    println!("Listening on: {}", config.listen_addr);
    match &config.fonts_dir {
        Some(dir) => println!("Fonts directory: {}", dir.display()),
        None => println!("Fonts directory: none (built-in bitmap font)"),
    }
    println!();
    println!(
        "Try http://{}/api/placeholder?width=320&height=180",
        config.listen_addr
    );
    println!();

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            PlaceholdError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to bind to {}: {}", config.listen_addr, e),
            ))
        })?;

    axum::serve(listener, app).await?;

    Ok(())
}

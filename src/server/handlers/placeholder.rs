//! Placeholder API handlers.

use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    error::PlaceholdError, params::PlaceholderParams, placeholder::Placeholder, render,
};

use super::super::state::AppState;

/// Body of the data URI endpoint.
#[derive(Debug, Serialize)]
pub struct DataUriResponse {
    pub data_uri: String,
    pub width: u32,
    pub height: u32,
    pub format: &'static str,
}

/// Bad input is the caller's fault; encoder failures are ours.
fn status_for(error: &PlaceholdError) -> StatusCode {
    match error {
        PlaceholdError::Image(_) | PlaceholdError::Io(_) | PlaceholdError::FontResolution(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        _ => StatusCode::BAD_REQUEST,
    }
}

fn reject(error: PlaceholdError) -> (StatusCode, String) {
    (status_for(&error), error.to_string())
}

/// Render off the async executor.
async fn render_bytes(
    state: Arc<AppState>,
    placeholder: Placeholder,
) -> Result<(Placeholder, Vec<u8>), (StatusCode, String)> {
    tokio::task::spawn_blocking(move || -> Result<_, PlaceholdError> {
        let bytes = placeholder.render(&state.fonts)?;
        Ok((placeholder, bytes))
    })
    .await
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Render task failed: {}", e),
        )
    })?
    .map_err(reject)
}

/// GET /api/placeholder - Encoded image bytes.
pub async fn image(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlaceholderParams>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let placeholder = params.build().map_err(reject)?;
    let (placeholder, bytes) = render_bytes(state, placeholder).await?;

    let (width, height) = placeholder.dimensions();
    log::info!(
        "[placeholder] {}x{} {} ({} bytes)",
        width,
        height,
        placeholder.output_format(),
        bytes.len()
    );

    Ok((
        [(header::CONTENT_TYPE, placeholder.output_format().mime_type())],
        bytes,
    ))
}

/// GET /api/placeholder/data-uri - Image embedded in a data URI.
pub async fn data_uri(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlaceholderParams>,
) -> Result<Json<DataUriResponse>, (StatusCode, String)> {
    let placeholder = params.build().map_err(reject)?;
    let (placeholder, bytes) = render_bytes(state, placeholder).await?;

    let (width, height) = placeholder.dimensions();
    let format = placeholder.output_format();
    log::info!("[placeholder] data URI {}x{} {}", width, height, format);

    Ok(Json(DataUriResponse {
        data_uri: render::data_uri(&bytes, format),
        width,
        height,
        format: format.name(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::ServerConfig;

    fn state() -> Arc<AppState> {
        Arc::new(AppState::new(ServerConfig {
            listen_addr: "127.0.0.1:0".to_string(),
            fonts_dir: None,
        }))
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&PlaceholdError::UnsupportedFormat("bmp".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&PlaceholdError::Image("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_image_handler_returns_png() {
        let params = PlaceholderParams {
            width: Some(64),
            height: Some(32),
            ..Default::default()
        };
        let response = image(State(state()), Query(params)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/png"
        );
    }

    #[tokio::test]
    async fn test_image_handler_rejects_bad_quality() {
        let params = PlaceholderParams {
            quality: Some(10),
            ..Default::default()
        };
        let response = image(State(state()), Query(params)).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_data_uri_handler() {
        let params = PlaceholderParams {
            width: Some(40),
            height: Some(20),
            format: Some("gif".into()),
            ..Default::default()
        };
        let Json(body) = data_uri(State(state()), Query(params)).await.unwrap();
        assert!(body.data_uri.starts_with("data:image/gif;base64,"));
        assert_eq!((body.width, body.height), (40, 20));
        assert_eq!(body.format, "gif");
    }
}

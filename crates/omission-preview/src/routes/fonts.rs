//! Font files for the on-screen card.
//!
//! Serves the same binaries the rasterizer uses, so the inline SVG and the
//! exported PNG are drawn with identical glyphs.

use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use super::view::IMMUTABLE_CACHE;
use crate::error::PreviewError;
use crate::state::AppState;

/// Handle `GET /fonts/{file}` for `serif.ttf` and `mono.ttf`.
pub async fn font_handler(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Result<Response, PreviewError> {
    if file != "serif.ttf" && file != "mono.ttf" {
        return Err(PreviewError::NotFound(format!("no font named {file}")));
    }

    let fonts = state.fonts().await?;
    let bytes = if file == "serif.ttf" {
        fonts.serif.as_ref().clone()
    } else {
        fonts.mono.as_ref().clone()
    };

    let headers = [
        (header::CONTENT_TYPE, HeaderValue::from_static("font/ttf")),
        (header::CACHE_CONTROL, HeaderValue::from_static(IMMUTABLE_CACHE)),
    ];

    Ok((StatusCode::OK, headers, bytes).into_response())
}

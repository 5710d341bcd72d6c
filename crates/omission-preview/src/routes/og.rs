//! Open Graph image generation.
//!
//! Renders the record card at 1200x630 for link unfurlers:
//! - Same layout as the on-screen card, larger type
//! - `OMISSION RECORD` / `OMITTED:` header wording
//!
//! Images are cached in-memory to avoid regeneration on repeated requests.

use axum::extract::{Query, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use omission_core::Reference;
use serde::Deserialize;

use super::view::IMMUTABLE_CACHE;
use crate::error::OgError;
use crate::render::{self, OPEN_GRAPH};
use crate::state::AppState;

/// Query string of the image endpoint.
#[derive(Debug, Deserialize)]
pub struct OgQuery {
    #[serde(rename = "ref")]
    reference: Option<String>,
}

/// Handle a request for an OG preview image.
///
/// Route: `GET /api/og?ref={token}`
pub async fn og_image_handler(
    State(state): State<AppState>,
    Query(query): Query<OgQuery>,
) -> Result<Response, OgError> {
    let token = query
        .reference
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or(OgError::MissingRef)?;

    let reference: Reference = token.parse()?;
    let png = render::render_png(&state, &reference, OPEN_GRAPH).await?;

    Ok(png_response(png))
}

/// Build an HTTP response with PNG content and cache headers.
fn png_response(png_bytes: Vec<u8>) -> Response {
    let headers = [
        (header::CONTENT_TYPE, HeaderValue::from_static("image/png")),
        (header::CACHE_CONTROL, HeaderValue::from_static(IMMUTABLE_CACHE)),
    ];

    (StatusCode::OK, headers, png_bytes).into_response()
}

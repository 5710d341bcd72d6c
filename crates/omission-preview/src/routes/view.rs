//! Share page and PNG download.
//!
//! Handles `GET /r/{token}` (or `.json` for the decoded record) and
//! `GET /r/{token}/card.png`.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use omission_core::Reference;

use crate::error::PreviewError;
use crate::render::{self, DOWNLOAD, DOWNLOAD_FILENAME};
use crate::state::AppState;

/// Records never change, so everything derived from a token is immutable.
pub(crate) const IMMUTABLE_CACHE: &str = "public, max-age=31536000, immutable";

/// Handle a share page request.
pub async fn record_page_handler(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Response, PreviewError> {
    if let Some(bare) = token.strip_suffix(".json") {
        return super::json::json_handler_inner(bare);
    }

    let reference: Reference = token.parse()?;
    tracing::debug!(token = %reference, "rendering record page");

    let markup = render::record::render(
        &reference,
        &state.config.base_url,
        &state.config.site_name,
    );

    Ok(build_response(&markup.into_string(), IMMUTABLE_CACHE))
}

/// Handle a PNG download request.
pub async fn card_png_handler(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Response, PreviewError> {
    let reference: Reference = token.parse()?;
    let png = render::render_png(&state, &reference, DOWNLOAD).await?;

    let disposition = format!("attachment; filename=\"{DOWNLOAD_FILENAME}\"");
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("image/png"));
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(IMMUTABLE_CACHE),
    );
    if let Ok(val) = HeaderValue::from_str(&disposition) {
        headers.insert(header::CONTENT_DISPOSITION, val);
    }

    Ok((StatusCode::OK, headers, png).into_response())
}

/// Build an HTTP response with HTML content and security/cache headers.
pub(crate) fn build_response(html: &str, cache_control: &'static str) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );

    // Security headers
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(render::components::CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

    // ETag (xxHash of content)
    let hash = xxhash_rust::xxh3::xxh3_64(html.as_bytes());
    let etag = format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()));
    if let Ok(val) = HeaderValue::from_str(&etag) {
        headers.insert(header::ETAG, val);
    }

    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(cache_control),
    );

    (StatusCode::OK, headers, html.to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_response_sets_security_headers() {
        let response = build_response("<p>x</p>", IMMUTABLE_CACHE);
        let headers = response.headers();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(
            headers[header::CONTENT_SECURITY_POLICY],
            render::components::CSP_HEADER
        );
        assert_eq!(headers[header::CACHE_CONTROL], IMMUTABLE_CACHE);
    }

    #[test]
    fn etag_is_stable_and_content_addressed() {
        let a = build_response("<p>x</p>", IMMUTABLE_CACHE);
        let b = build_response("<p>x</p>", IMMUTABLE_CACHE);
        let c = build_response("<p>y</p>", IMMUTABLE_CACHE);

        let etag = |r: &Response| r.headers()[header::ETAG].to_str().unwrap().to_string();
        assert_eq!(etag(&a), etag(&b));
        assert_ne!(etag(&a), etag(&c));
        assert!(etag(&a).starts_with('"') && etag(&a).ends_with('"'));
        assert_eq!(etag(&a).len(), 18);
    }
}

//! JSON view of a record.
//!
//! Serves the decoded record at `GET /r/{token}.json`.
//!
//! Format:
//! ```json
//! { "reference": "REF-20260217-...", "text": "Checking notifications", "date": "2026-02-17" }
//! ```

use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use omission_core::Reference;

use super::view::IMMUTABLE_CACHE;
use crate::error::PreviewError;

/// Inner handler called from the share page handler when `.json` suffix is detected.
pub fn json_handler_inner(token: &str) -> Result<Response, PreviewError> {
    let reference: Reference = token.parse()?;
    let record = reference.record();

    let json_body = serde_json::json!({
        "reference": reference.as_str(),
        "text": record.text,
        "date": record.date,
    });

    let json_string =
        serde_json::to_string_pretty(&json_body).map_err(|e| PreviewError::Internal(e.into()))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json; charset=utf-8"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(IMMUTABLE_CACHE),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );

    Ok((StatusCode::OK, headers, json_string).into_response())
}

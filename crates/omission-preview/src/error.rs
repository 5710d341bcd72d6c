//! Error types for the preview service.
//!
//! Page routes render errors as small HTML pages. The Open Graph endpoint
//! is consumed by crawlers and answers with fixed plain-text bodies.

use axum::http::StatusCode;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, html};

/// Preview service error type.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The token did not decode, or the resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal server error (font loading, rendering, etc.).
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<omission_core::Error> for PreviewError {
    fn from(err: omission_core::Error) -> Self {
        Self::NotFound(err.to_string())
    }
}

impl IntoResponse for PreviewError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::NotFound(msg) => {
                tracing::debug!(reason = %msg, "not found");
                (
                    StatusCode::NOT_FOUND,
                    "Record Not Found",
                    "This record does not exist or its link is damaged.",
                )
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error",
                    "An internal error occurred. Please try again later.",
                )
            }
        };

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) " — OMISSION" }
                    meta name="robots" content="noindex";
                    style { (maud::PreEscaped(crate::render::components::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                        a href="/" { "Record your own" }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}

/// Errors from `GET /api/og`.
#[derive(Debug, thiserror::Error)]
pub enum OgError {
    /// No `ref` query parameter, or an empty one.
    #[error("missing ref")]
    MissingRef,

    /// Wrong prefix or too few segments.
    #[error("invalid ref")]
    InvalidRef,

    /// Payload failed base64 or percent decoding.
    #[error("invalid encoding")]
    InvalidEncoding,

    /// Anything that went wrong while producing the image.
    #[error("render failed: {0}")]
    Render(#[from] anyhow::Error),
}

impl From<omission_core::Error> for OgError {
    fn from(err: omission_core::Error) -> Self {
        match err {
            omission_core::Error::MalformedReference => Self::InvalidRef,
            omission_core::Error::InvalidEncoding(_) => Self::InvalidEncoding,
            // only produced when encoding
            omission_core::Error::DateOutOfRange(_) => Self::InvalidRef,
        }
    }
}

impl IntoResponse for OgError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::MissingRef => (StatusCode::BAD_REQUEST, "Missing ref"),
            Self::InvalidRef => (StatusCode::BAD_REQUEST, "Invalid ref"),
            Self::InvalidEncoding => (StatusCode::BAD_REQUEST, "Invalid encoding"),
            Self::Render(err) => {
                tracing::error!(error = %err, "og image generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate the image",
                )
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}

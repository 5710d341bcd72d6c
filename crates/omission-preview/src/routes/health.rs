//! Health check endpoint.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    /// Card fonts are in memory. False until the first image render.
    fonts_loaded: bool,
    /// Rendered PNGs currently held in the cache.
    cached_images: u64,
}

/// Liveness plus render readiness.
///
/// The service stays healthy without fonts: pages still render, and the
/// next image request retries the load.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "omission-preview",
        version: env!("CARGO_PKG_VERSION"),
        fonts_loaded: state.fonts_ready(),
        cached_images: state.png_cache.entry_count(),
    })
}

//! Route definitions for the preview service.
//!
//! ## Routes
//!
//! - `GET /` - Home page with the recording form
//! - `POST /record` - Encode a phrase and redirect to its share page
//! - `GET /r/{token}` - Share page (or `.json` for the decoded record)
//! - `GET /r/{token}/card.png` - PNG download
//! - `GET /api/og?ref={token}` - Open Graph image
//! - `GET /fonts/{file}` - Card fonts for the browser
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions

mod fonts;
mod health;
mod home;
pub mod json;
mod og;
mod record;
mod view;

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::{get, post};

use crate::state::AppState;

/// Build the complete preview service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_page))
        .route("/record", post(record::record_handler))
        .route("/r/{token}", get(view::record_page_handler))
        .route("/r/{token}/card.png", get(view::card_png_handler))
        .route("/api/og", get(og::og_image_handler))
        .route("/fonts/{file}", get(fonts::font_handler))
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .with_state(state)
}

/// Serve robots.txt allowing all crawlers.
///
/// Unfurlers need to fetch share pages and their images.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nAllow: /\n",
    )
}

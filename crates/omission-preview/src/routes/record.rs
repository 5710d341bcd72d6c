//! Record submission.
//!
//! Handles `POST /record`: sanitize, trim, pause, encode, redirect.

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use omission_core::{Reference, prepare_submission, sanitize_input, today_local};
use serde::Deserialize;

use crate::error::PreviewError;
use crate::render::components::url_token;
use crate::state::AppState;

/// Form body of the home page.
#[derive(Debug, Deserialize)]
pub struct RecordForm {
    #[serde(default)]
    text: String,
}

/// Turn a submitted phrase into a share link.
///
/// Input too long to accept sanitizes to empty, which sends the visitor
/// back home like a blank submission.
pub async fn record_handler(
    State(state): State<AppState>,
    Form(form): Form<RecordForm>,
) -> Result<Redirect, PreviewError> {
    let cleaned = sanitize_input(&form.text, "");
    let Some(text) = prepare_submission(&cleaned) else {
        tracing::debug!("empty submission, redirecting home");
        return Ok(Redirect::to("/"));
    };

    if !state.config.record_delay.is_zero() {
        tokio::time::sleep(state.config.record_delay).await;
    }

    let reference =
        Reference::new(today_local(), text).map_err(|e| PreviewError::Internal(e.into()))?;
    tracing::info!(token = %reference, "record created");

    Ok(Redirect::to(&format!("/r/{}", url_token(reference.as_str()))))
}

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::application::ports::{CompletionClient, FileLoader};
use crate::application::services::{prompt_builder, response_parser};
use crate::domain::AnalysisReport;
use crate::presentation::state::AppState;

use super::error::ApiError;
use super::intake::collect_multipart;

#[derive(Serialize)]
pub struct ReviewResponse {
    pub review: AnalysisReport,
    pub truncated: bool,
}

/// Reviews the current version of a document against the previous one.
/// Accepts `file_current`/`text_current` and `file_previous`/`text_previous`.
#[tracing::instrument(skip(state, multipart))]
pub async fn review_handler<F, L>(
    State(state): State<AppState<F, L>>,
    multipart: Multipart,
) -> Result<Json<ReviewResponse>, ApiError>
where
    F: FileLoader + 'static,
    L: CompletionClient + 'static,
{
    let intake = collect_multipart(multipart, state.file_loader.as_ref()).await?;

    let current = intake
        .slot("file_current", "text_current")
        .ok_or_else(|| ApiError::bad_request("Dokumen versi terbaru tidak ditemukan"))?;
    let previous = intake
        .slot("file_previous", "text_previous")
        .ok_or_else(|| ApiError::bad_request("Dokumen versi sebelumnya tidak ditemukan"))?;

    let prompt = prompt_builder::review(intake.lang, current, previous);

    let raw = state
        .completion_client
        .complete(&prompt.text, prompt.max_tokens, prompt.temperature)
        .await?;

    Ok(Json(ReviewResponse {
        review: response_parser::parse_report(&raw),
        truncated: prompt.truncated,
    }))
}

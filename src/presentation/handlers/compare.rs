use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::application::ports::{CompletionClient, FileLoader};
use crate::application::services::prompt_builder;
use crate::presentation::state::AppState;

use super::error::ApiError;
use super::intake::collect_multipart;

#[derive(Serialize)]
pub struct CompareResponse {
    pub diff: String,
    pub truncated: bool,
}

/// Compares two documents. Accepts `file_a`/`text_a` and `file_b`/`text_b`.
#[tracing::instrument(skip(state, multipart))]
pub async fn compare_handler<F, L>(
    State(state): State<AppState<F, L>>,
    multipart: Multipart,
) -> Result<Json<CompareResponse>, ApiError>
where
    F: FileLoader + 'static,
    L: CompletionClient + 'static,
{
    let intake = collect_multipart(multipart, state.file_loader.as_ref()).await?;

    let left = intake
        .slot("file_a", "text_a")
        .ok_or_else(|| ApiError::bad_request("Dokumen pertama tidak ditemukan"))?;
    let right = intake
        .slot("file_b", "text_b")
        .ok_or_else(|| ApiError::bad_request("Dokumen kedua tidak ditemukan"))?;

    let prompt = prompt_builder::compare(intake.lang, left, right);

    let diff = state
        .completion_client
        .complete(&prompt.text, prompt.max_tokens, prompt.temperature)
        .await?;

    Ok(Json(CompareResponse {
        diff,
        truncated: prompt.truncated,
    }))
}

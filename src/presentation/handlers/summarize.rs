use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{CompletionClient, FileLoader};
use crate::application::services::prompt_builder;
use crate::domain::Language;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error::ApiError;
use super::session::fetch_session_text;

#[derive(Deserialize)]
pub struct SummarizeRequest {
    pub session_id: String,
    #[serde(default)]
    pub lang: Language,
}

#[derive(Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub truncated: bool,
}

#[tracing::instrument(skip(state, request), fields(session_id = %request.session_id))]
pub async fn summarize_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError>
where
    F: FileLoader + 'static,
    L: CompletionClient + 'static,
{
    let doc_text = fetch_session_text(&state.session_store, &request.session_id).await?;

    let prompt = prompt_builder::summarize(request.lang, &doc_text);
    tracing::debug!(prompt = %sanitize_prompt(&prompt.text), truncated = prompt.truncated, "summarize prompt rendered");

    let summary = state
        .completion_client
        .complete(&prompt.text, prompt.max_tokens, prompt.temperature)
        .await?;

    Ok(Json(SummarizeResponse {
        summary,
        truncated: prompt.truncated,
    }))
}

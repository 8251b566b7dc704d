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
pub struct AskRequest {
    pub session_id: String,
    pub question: String,
    #[serde(default)]
    pub lang: Language,
}

#[derive(Serialize)]
pub struct AskResponse {
    pub answer: String,
    pub truncated: bool,
}

#[tracing::instrument(skip(state, request), fields(session_id = %request.session_id))]
pub async fn ask_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError>
where
    F: FileLoader + 'static,
    L: CompletionClient + 'static,
{
    let question = request.question.trim();
    if question.is_empty() {
        return Err(ApiError::bad_request("Pertanyaan tidak boleh kosong"));
    }

    let doc_text = fetch_session_text(&state.session_store, &request.session_id).await?;

    let prompt = prompt_builder::ask(request.lang, &doc_text, question);
    tracing::debug!(question = %sanitize_prompt(question), truncated = prompt.truncated, "ask prompt rendered");

    let answer = state
        .completion_client
        .complete(&prompt.text, prompt.max_tokens, prompt.temperature)
        .await?;

    Ok(Json(AskResponse {
        answer,
        truncated: prompt.truncated,
    }))
}

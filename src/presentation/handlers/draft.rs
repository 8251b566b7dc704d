use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{CompletionClient, FileLoader};
use crate::application::services::{prompt_builder, DraftLength, DraftSpec};
use crate::domain::Language;
use crate::presentation::state::AppState;

use super::error::ApiError;
use super::session::fetch_session_text;

#[derive(Deserialize)]
pub struct DraftRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    pub doc_type: String,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub lang: Language,
}

#[derive(Serialize)]
pub struct DraftResponse {
    pub draft: String,
    pub truncated: bool,
}

/// Drafts a document of the requested type, optionally grounded on the text
/// of a previously uploaded session.
#[tracing::instrument(skip(state, request), fields(doc_type = %request.doc_type))]
pub async fn draft_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Json(request): Json<DraftRequest>,
) -> Result<Json<DraftResponse>, ApiError>
where
    F: FileLoader + 'static,
    L: CompletionClient + 'static,
{
    if request.doc_type.trim().is_empty() {
        return Err(ApiError::bad_request("Jenis dokumen tidak boleh kosong"));
    }

    let length = match &request.length {
        Some(raw) => raw.parse().map_err(|e: String| ApiError::bad_request(e))?,
        None => DraftLength::default(),
    };

    let context = match &request.session_id {
        Some(session_id) => Some(fetch_session_text(&state.session_store, session_id).await?),
        None => None,
    };

    let spec = DraftSpec {
        doc_type: request.doc_type.trim(),
        requirements: request.requirements.as_deref(),
        tone: request.tone.as_deref(),
        length,
    };

    let prompt = prompt_builder::draft(request.lang, &spec, context.as_deref());

    let draft = state
        .completion_client
        .complete(&prompt.text, prompt.max_tokens, prompt.temperature)
        .await?;

    Ok(Json(DraftResponse {
        draft,
        truncated: prompt.truncated,
    }))
}

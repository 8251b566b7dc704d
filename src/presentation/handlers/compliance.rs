use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::application::ports::{CompletionClient, FileLoader};
use crate::application::services::prompt_builder;
use crate::presentation::state::AppState;

use super::error::ApiError;
use super::intake::collect_multipart;

#[derive(Serialize)]
pub struct ComplianceResponse {
    pub compliance: String,
    pub truncated: bool,
}

/// Checks a document against a reference template. Accepts `file`/`text` for
/// the document and `file_template`/`text_template` for the template.
#[tracing::instrument(skip(state, multipart))]
pub async fn compliance_handler<F, L>(
    State(state): State<AppState<F, L>>,
    multipart: Multipart,
) -> Result<Json<ComplianceResponse>, ApiError>
where
    F: FileLoader + 'static,
    L: CompletionClient + 'static,
{
    let intake = collect_multipart(multipart, state.file_loader.as_ref()).await?;

    let document = intake
        .slot("file", "text")
        .ok_or_else(|| ApiError::bad_request("Dokumen tidak ditemukan"))?;
    let template = intake
        .slot("file_template", "text_template")
        .ok_or_else(|| ApiError::bad_request("Templat acuan tidak ditemukan"))?;

    let prompt = prompt_builder::compliance(intake.lang, document, template);

    let compliance = state
        .completion_client
        .complete(&prompt.text, prompt.max_tokens, prompt.temperature)
        .await?;

    Ok(Json(ComplianceResponse {
        compliance,
        truncated: prompt.truncated,
    }))
}

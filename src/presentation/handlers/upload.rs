use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::application::ports::{CompletionClient, FileLoader};
use crate::presentation::state::AppState;

use super::error::ApiError;
use super::intake::collect_multipart;

#[derive(Serialize)]
pub struct UploadResponse {
    pub session_id: String,
    pub num_chars: usize,
}

/// Extracts text from the uploaded file and/or `text` field and stores it in
/// a fresh session for the multi-step flows.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<F, L>(
    State(state): State<AppState<F, L>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError>
where
    F: FileLoader + 'static,
    L: CompletionClient + 'static,
{
    let intake = collect_multipart(multipart, state.file_loader.as_ref()).await?;

    let extracted_text = intake.combined_text();
    if extracted_text.is_empty() {
        return Err(ApiError::bad_request(
            "Kirim file PDF/TXT atau teks pada field 'text'",
        ));
    }

    let num_chars = extracted_text.chars().count();
    let session_id = state.session_store.create(extracted_text).await;

    tracing::info!(session_id = %session_id, num_chars, "document uploaded");

    Ok(Json(UploadResponse {
        session_id: session_id.to_string(),
        num_chars,
    }))
}

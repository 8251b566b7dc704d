use uuid::Uuid;

use crate::application::services::SessionStore;

use super::error::ApiError;

/// Resolves a session id to its stored document text. A malformed id is
/// indistinguishable from an expired or never-created one.
pub async fn fetch_session_text(
    store: &SessionStore,
    session_id: &str,
) -> Result<String, ApiError> {
    let id = Uuid::parse_str(session_id)
        .map_err(|_| ApiError::not_found("Session tidak ditemukan"))?;

    let text = store
        .get(id)
        .await
        .ok_or_else(|| ApiError::not_found("Session tidak ditemukan"))?;

    if text.trim().is_empty() {
        return Err(ApiError::bad_request("Tidak ada teks dalam sesi"));
    }

    Ok(text)
}

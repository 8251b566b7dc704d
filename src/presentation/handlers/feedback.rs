use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::ports::{CompletionClient, FileLoader};
use crate::domain::{ChatId, Feedback, FeedbackValue, MessageId};
use crate::presentation::state::AppState;

use super::error::ApiError;

#[derive(Deserialize)]
pub struct FeedbackRequest {
    #[serde(default)]
    pub chat_id: Option<String>,
    #[serde(default)]
    pub message_id: Option<String>,
    pub value: i8,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Serialize)]
pub struct FeedbackResponse {
    pub ok: bool,
}

fn parse_loose_id(raw: &Option<String>, what: &str) -> Result<Option<Uuid>, ApiError> {
    match raw {
        Some(s) => Uuid::parse_str(s)
            .map(Some)
            .map_err(|_| ApiError::bad_request(format!("Invalid {}: {}", what, s))),
        None => Ok(None),
    }
}

#[tracing::instrument(skip(state, request), fields(value = request.value))]
pub async fn feedback_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, ApiError>
where
    F: FileLoader + 'static,
    L: CompletionClient + 'static,
{
    let value = FeedbackValue::from_vote(request.value)
        .ok_or_else(|| ApiError::bad_request("Nilai feedback harus 1 atau -1"))?;

    let chat_id = parse_loose_id(&request.chat_id, "chat_id")?.map(ChatId::from_uuid);
    let message_id = parse_loose_id(&request.message_id, "message_id")?.map(MessageId::from_uuid);

    let feedback = Feedback::new(chat_id, message_id, value, request.comment);
    state.chat_repository.add_feedback(&feedback).await?;

    Ok(Json(FeedbackResponse { ok: true }))
}

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{CompletionClient, FileLoader};
use crate::presentation::state::AppState;

use super::error::ApiError;

/// Cap on the recent-chat listing.
pub const CHAT_LIST_LIMIT: usize = 50;

#[derive(Serialize)]
pub struct ChatListResponse {
    pub chats: Vec<ChatSummary>,
}

#[derive(Serialize)]
pub struct ChatSummary {
    pub id: String,
    pub title: Option<String>,
    pub confidential: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[tracing::instrument(skip(state))]
pub async fn list_chats_handler<F, L>(
    State(state): State<AppState<F, L>>,
) -> Result<Json<ChatListResponse>, ApiError>
where
    F: FileLoader + 'static,
    L: CompletionClient + 'static,
{
    let chats = state.chat_repository.list_recent(CHAT_LIST_LIMIT).await?;

    Ok(Json(ChatListResponse {
        chats: chats
            .into_iter()
            .map(|c| ChatSummary {
                id: c.id.to_string(),
                title: c.title,
                confidential: c.confidential,
                created_at: c.created_at.to_rfc3339(),
                updated_at: c.updated_at.to_rfc3339(),
            })
            .collect(),
    }))
}

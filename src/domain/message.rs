use chrono::{DateTime, Utc};

use super::{ChatId, MessageId, MessageRole};

/// A single chat turn. Immutable once created.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: MessageId,
    pub chat_id: ChatId,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(chat_id: ChatId, role: MessageRole, content: String) -> Self {
        Self {
            id: MessageId::new(),
            chat_id,
            role,
            content,
            created_at: Utc::now(),
        }
    }
}

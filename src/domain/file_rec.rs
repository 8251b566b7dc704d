use chrono::{DateTime, Utc};

use super::{ChatId, FileRecId};

/// Metadata for a file that contributed to a chat. The file content itself is
/// discarded after extraction; only the original name is kept.
#[derive(Debug, Clone)]
pub struct FileRec {
    pub id: FileRecId,
    pub chat_id: ChatId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl FileRec {
    pub fn new(chat_id: ChatId, name: String) -> Self {
        Self {
            id: FileRecId::new(),
            chat_id,
            name,
            created_at: Utc::now(),
        }
    }
}

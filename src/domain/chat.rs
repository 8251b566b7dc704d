use chrono::{DateTime, Utc};

use super::ChatId;

#[derive(Debug, Clone)]
pub struct Chat {
    pub id: ChatId,
    pub title: Option<String>,
    pub confidential: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Chat {
    pub fn new(title: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ChatId::new(),
            title,
            confidential: false,
            created_at: now,
            updated_at: now,
        }
    }
}

use chrono::{DateTime, Utc};

use super::{ChatId, FeedbackId, MessageId};

/// A signed vote on a chat or message. References are loose: the chat or
/// message may have been deleted since.
#[derive(Debug, Clone)]
pub struct Feedback {
    pub id: FeedbackId,
    pub chat_id: Option<ChatId>,
    pub message_id: Option<MessageId>,
    pub value: FeedbackValue,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    pub fn new(
        chat_id: Option<ChatId>,
        message_id: Option<MessageId>,
        value: FeedbackValue,
        comment: Option<String>,
    ) -> Self {
        Self {
            id: FeedbackId::new(),
            chat_id,
            message_id,
            value,
            comment,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackValue {
    Up,
    Down,
}

impl FeedbackValue {
    /// Accepts only the two-value set {+1, -1}.
    pub fn from_vote(value: i8) -> Option<Self> {
        match value {
            1 => Some(FeedbackValue::Up),
            -1 => Some(FeedbackValue::Down),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> i16 {
        match self {
            FeedbackValue::Up => 1,
            FeedbackValue::Down => -1,
        }
    }
}

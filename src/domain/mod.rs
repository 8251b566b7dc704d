mod analysis;
mod chat;
mod chat_id;
mod document;
mod feedback;
mod feedback_id;
mod file_rec;
mod file_rec_id;
mod language;
mod message;
mod message_id;
mod message_role;

pub use analysis::AnalysisReport;
pub use chat::Chat;
pub use chat_id::ChatId;
pub use document::{ContentType, Document};
pub use feedback::{Feedback, FeedbackValue};
pub use feedback_id::FeedbackId;
pub use file_rec::FileRec;
pub use file_rec_id::FileRecId;
pub use language::Language;
pub use message::Message;
pub use message_id::MessageId;
pub use message_role::MessageRole;

mod analyze;
mod ask;
mod chats;
mod compare;
mod compliance;
mod draft;
mod error;
mod export;
mod feedback;
mod health;
mod intake;
mod review;
mod session;
mod summarize;
mod upload;

pub use analyze::analyze_handler;
pub use ask::ask_handler;
pub use chats::{list_chats_handler, CHAT_LIST_LIMIT};
pub use compare::compare_handler;
pub use compliance::compliance_handler;
pub use draft::draft_handler;
pub use error::{ApiError, ErrorResponse};
pub use export::{
    export_docx_handler, export_draft_docx_handler, export_draft_pdf_handler, export_pdf_handler,
};
pub use feedback::feedback_handler;
pub use health::{health_handler, root_handler, APP_NAME};
pub use review::review_handler;
pub use summarize::summarize_handler;
pub use upload::upload_handler;

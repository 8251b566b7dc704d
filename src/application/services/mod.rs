pub mod prompt_builder;
pub mod response_parser;
mod session_store;

pub use prompt_builder::{AnalysisPreset, DraftLength, DraftSpec, RenderedPrompt};
pub use session_store::SessionStore;

use std::sync::Arc;

use crate::application::ports::{ChatRepository, CompletionClient, FileLoader};
use crate::application::services::SessionStore;
use crate::presentation::config::Settings;

pub struct AppState<F, L>
where
    F: FileLoader,
    L: CompletionClient,
{
    pub file_loader: Arc<F>,
    pub completion_client: Arc<L>,
    pub chat_repository: Arc<dyn ChatRepository>,
    pub session_store: Arc<SessionStore>,
    pub settings: Settings,
}

impl<F, L> Clone for AppState<F, L>
where
    F: FileLoader,
    L: CompletionClient,
{
    fn clone(&self) -> Self {
        Self {
            file_loader: Arc::clone(&self.file_loader),
            completion_client: Arc::clone(&self.completion_client),
            chat_repository: Arc::clone(&self.chat_repository),
            session_store: Arc::clone(&self.session_store),
            settings: self.settings.clone(),
        }
    }
}

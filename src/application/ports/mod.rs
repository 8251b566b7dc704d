mod chat_repository;
mod completion_client;
mod file_loader;
mod repository_error;

pub use chat_repository::ChatRepository;
pub use completion_client::{CompletionClient, CompletionError};
pub use file_loader::{FileLoader, FileLoaderError};
pub use repository_error::RepositoryError;

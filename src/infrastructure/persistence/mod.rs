mod pg_chat_repository;
mod pg_pool;

pub use pg_chat_repository::PgChatRepository;
pub use pg_pool::create_pool;

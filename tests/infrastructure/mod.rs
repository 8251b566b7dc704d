mod anthropic_client_test;
mod export_test;
mod pg_chat_repository_test;
mod text_processing_test;

pub mod test_postgres;

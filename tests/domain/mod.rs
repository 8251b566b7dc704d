mod chat_id_test;
mod content_type_test;
mod feedback_test;
mod message_role_test;

use lexora::application::ports::ChatRepository;
use lexora::domain::{Chat, ChatId, Feedback, FeedbackValue, FileRec, Message, MessageRole};

use super::test_postgres::TestPostgres;

fn analysis_fixture(title: &str) -> (Chat, Vec<Message>, Vec<FileRec>) {
    let chat = Chat::new(Some(title.to_string()));
    let messages = vec![
        Message::new(chat.id, MessageRole::User, "isi dokumen".to_string()),
        Message::new(chat.id, MessageRole::Assistant, "ringkasan".to_string()),
    ];
    let files = vec![FileRec::new(chat.id, "kontrak.pdf".to_string())];
    (chat, messages, files)
}

#[tokio::test]
#[ignore = "requires docker"]
async fn given_recorded_analysis_then_chat_messages_and_files_are_persisted() {
    let pg = TestPostgres::new().await;
    let (chat, messages, files) = analysis_fixture("Analisa Dokumen");

    pg.chat_repository
        .record_analysis(&chat, &messages, &files)
        .await
        .unwrap();

    let stored = pg.chat_repository.get_chat(chat.id).await.unwrap().unwrap();
    assert_eq!(stored.title.as_deref(), Some("Analisa Dokumen"));
    assert!(!stored.confidential);

    let stored_messages = pg.chat_repository.get_messages(chat.id).await.unwrap();
    assert_eq!(stored_messages.len(), 2);
    assert_eq!(stored_messages[0].role, MessageRole::User);
    assert_eq!(stored_messages[1].role, MessageRole::Assistant);
    assert_eq!(stored_messages[1].content, "ringkasan");
}

#[tokio::test]
#[ignore = "requires docker"]
async fn given_unknown_chat_id_then_lookup_returns_none() {
    let pg = TestPostgres::new().await;

    let result = pg.chat_repository.get_chat(ChatId::new()).await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn given_several_chats_then_listing_returns_newest_first_up_to_the_limit() {
    let pg = TestPostgres::new().await;

    for i in 0..3 {
        let (chat, messages, files) = analysis_fixture(&format!("Chat {i}"));
        pg.chat_repository
            .record_analysis(&chat, &messages, &files)
            .await
            .unwrap();
    }

    let listed = pg.chat_repository.list_recent(2).await.unwrap();

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].title.as_deref(), Some("Chat 2"));
    assert_eq!(listed[1].title.as_deref(), Some("Chat 1"));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn given_feedback_on_a_deleted_chat_then_it_is_still_accepted() {
    let pg = TestPostgres::new().await;

    // No chat row with this id exists; references are deliberately loose.
    let feedback = Feedback::new(
        Some(ChatId::new()),
        None,
        FeedbackValue::Down,
        Some("kurang akurat".to_string()),
    );

    pg.chat_repository.add_feedback(&feedback).await.unwrap();

    let (value, comment): (i16, Option<String>) =
        sqlx::query_as("SELECT value, comment FROM feedback WHERE id = $1")
            .bind(feedback.id.as_uuid())
            .fetch_one(&pg.pool)
            .await
            .unwrap();

    assert_eq!(value, -1);
    assert_eq!(comment.as_deref(), Some("kurang akurat"));
}

use std::time::Duration;

use lexora::application::services::SessionStore;

#[tokio::test]
async fn given_created_session_then_text_is_readable_until_ttl() {
    let store = SessionStore::new(Duration::from_secs(60));

    let id = store.create("isi dokumen".to_string()).await;

    assert_eq!(store.get(id).await.as_deref(), Some("isi dokumen"));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn given_unknown_id_then_lookup_returns_none() {
    let store = SessionStore::new(Duration::from_secs(60));

    assert!(store.get(uuid::Uuid::new_v4()).await.is_none());
}

#[tokio::test]
async fn given_expired_entry_then_lookup_misses_before_any_sweep() {
    let store = SessionStore::new(Duration::ZERO);

    let id = store.create("stale".to_string()).await;

    assert!(store.get(id).await.is_none());
    // The entry still occupies memory until swept.
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn given_expired_entries_then_sweep_reclaims_only_those() {
    let live = SessionStore::new(Duration::from_secs(60));
    let dead = SessionStore::new(Duration::ZERO);

    live.create("keep".to_string()).await;
    dead.create("drop".to_string()).await;
    dead.create("drop too".to_string()).await;

    assert_eq!(live.sweep().await, 0);
    assert_eq!(dead.sweep().await, 2);
    assert!(dead.is_empty().await);
    assert_eq!(live.len().await, 1);
}

#[tokio::test]
async fn given_two_sessions_then_texts_do_not_cross() {
    let store = SessionStore::new(Duration::from_secs(60));

    let a = store.create("alpha".to_string()).await;
    let b = store.create("beta".to_string()).await;

    assert_eq!(store.get(a).await.as_deref(), Some("alpha"));
    assert_eq!(store.get(b).await.as_deref(), Some("beta"));
}

use lexora::domain::ChatId;

#[test]
fn given_fresh_ids_then_they_are_distinct() {
    assert_ne!(ChatId::new(), ChatId::new());
}

#[test]
fn given_a_uuid_then_wrapping_round_trips() {
    let raw = uuid::Uuid::new_v4();
    let id = ChatId::from_uuid(raw);

    assert_eq!(id.as_uuid(), raw);
    assert_eq!(id.to_string(), raw.to_string());
}

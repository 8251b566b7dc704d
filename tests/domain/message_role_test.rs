use lexora::domain::MessageRole;

#[test]
fn given_stored_role_strings_then_parsing_round_trips() {
    for role in [MessageRole::User, MessageRole::Assistant] {
        assert_eq!(role.as_str().parse::<MessageRole>(), Ok(role));
    }
}

#[test]
fn given_unknown_role_string_then_parsing_fails() {
    assert!("system".parse::<MessageRole>().is_err());
    assert!("User".parse::<MessageRole>().is_err());
}

use lexora::domain::FeedbackValue;

#[test]
fn given_signed_unit_votes_then_they_map_to_up_and_down() {
    assert_eq!(FeedbackValue::from_vote(1), Some(FeedbackValue::Up));
    assert_eq!(FeedbackValue::from_vote(-1), Some(FeedbackValue::Down));
}

#[test]
fn given_out_of_range_votes_then_conversion_rejects_them() {
    assert_eq!(FeedbackValue::from_vote(0), None);
    assert_eq!(FeedbackValue::from_vote(2), None);
    assert_eq!(FeedbackValue::from_vote(-2), None);
}

#[test]
fn given_feedback_values_then_storage_form_round_trips() {
    assert_eq!(FeedbackValue::Up.as_i16(), 1);
    assert_eq!(FeedbackValue::Down.as_i16(), -1);
}

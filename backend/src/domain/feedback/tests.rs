//! Validator boundaries and record ordering.

use chrono::{Duration, TimeZone, Utc};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;

#[fixture]
fn candidate() -> FeedbackCandidate {
    FeedbackCandidate {
        subject: "Great app".to_owned(),
        message: "Really enjoying the new dashboard.".to_owned(),
        rating: RatingInput::from(5_i64),
    }
}

fn with_subject(mut candidate: FeedbackCandidate, subject: String) -> FeedbackCandidate {
    candidate.subject = subject;
    candidate
}

fn with_message(mut candidate: FeedbackCandidate, message: String) -> FeedbackCandidate {
    candidate.message = message;
    candidate
}

fn with_rating(mut candidate: FeedbackCandidate, rating: Value) -> FeedbackCandidate {
    candidate.rating = RatingInput::new(rating);
    candidate
}

#[rstest]
fn valid_candidate_produces_trimmed_draft(candidate: FeedbackCandidate) {
    let padded = FeedbackCandidate {
        subject: format!("  {}  ", candidate.subject),
        message: format!("\n{}\t", candidate.message),
        ..candidate.clone()
    };
    let draft = validate_feedback(&padded).expect("valid submission");
    assert_eq!(draft.subject.as_ref(), "Great app");
    assert_eq!(draft.message.as_ref(), "Really enjoying the new dashboard.");
    assert_eq!(draft.rating.value(), 5);
}

#[rstest]
#[case(2, false)]
#[case(3, true)]
#[case(200, true)]
#[case(201, false)]
fn subject_length_boundaries(
    candidate: FeedbackCandidate,
    #[case] length: usize,
    #[case] accepted: bool,
) {
    let result = validate_feedback(&with_subject(candidate, "s".repeat(length)));
    match (accepted, result) {
        (true, Ok(draft)) => assert_eq!(draft.subject.as_ref().chars().count(), length),
        (false, Err(err)) => assert_eq!(err.field(), FeedbackField::Subject),
        (expected, other) => panic!("expected accepted={expected}, got {other:?}"),
    }
}

#[rstest]
#[case(9, false)]
#[case(10, true)]
#[case(1000, true)]
#[case(1001, false)]
fn message_length_boundaries(
    candidate: FeedbackCandidate,
    #[case] length: usize,
    #[case] accepted: bool,
) {
    let result = validate_feedback(&with_message(candidate, "m".repeat(length)));
    match (accepted, result) {
        (true, Ok(draft)) => assert_eq!(draft.message.as_ref().chars().count(), length),
        (false, Err(err)) => assert_eq!(err.field(), FeedbackField::Message),
        (expected, other) => panic!("expected accepted={expected}, got {other:?}"),
    }
}

#[rstest]
fn whitespace_padding_does_not_count_towards_length(candidate: FeedbackCandidate) {
    let err = validate_feedback(&with_subject(candidate, "   ab   ".to_owned()))
        .expect_err("two characters after trim");
    assert_eq!(
        err.violation(),
        FeedbackViolation::TooShort { min: SUBJECT_MIN }
    );
}

#[rstest]
#[case("\u{FEFF}ab")]
#[case("ab\u{FEFF}")]
#[case("\u{FEFF} ab \u{00A0}")]
fn byte_order_marks_are_trimmed_like_whitespace(
    candidate: FeedbackCandidate,
    #[case] subject: &str,
) {
    let err = validate_feedback(&with_subject(candidate, subject.to_owned()))
        .expect_err("two visible characters");
    assert_eq!(
        err.violation(),
        FeedbackViolation::TooShort { min: SUBJECT_MIN }
    );
}

#[rstest]
fn stored_text_drops_surrounding_byte_order_marks(candidate: FeedbackCandidate) {
    let draft = validate_feedback(&with_subject(candidate, "\u{FEFF}Great app".to_owned()))
        .expect("valid subject");
    assert_eq!(draft.subject.as_ref(), "Great app");
}

#[rstest]
fn length_counts_characters_not_bytes(candidate: FeedbackCandidate) {
    let draft = validate_feedback(&with_subject(candidate, "ééé".to_owned()))
        .expect("three characters");
    assert_eq!(draft.subject.as_ref(), "ééé");
}

#[rstest]
#[case(json!(0), Some(FeedbackViolation::OutOfRange { min: 1, max: 5, actual: 0 }))]
#[case(json!(1), None)]
#[case(json!(5), None)]
#[case(json!(6), Some(FeedbackViolation::OutOfRange { min: 1, max: 5, actual: 6 }))]
#[case(json!(-3), Some(FeedbackViolation::OutOfRange { min: 1, max: 5, actual: -3 }))]
#[case(json!(4.0), None)]
#[case(json!(3.5), Some(FeedbackViolation::NotAnInteger))]
#[case(json!("4"), Some(FeedbackViolation::NotAnInteger))]
#[case(Value::Null, Some(FeedbackViolation::NotAnInteger))]
fn rating_bounds(
    candidate: FeedbackCandidate,
    #[case] rating: Value,
    #[case] expected: Option<FeedbackViolation>,
) {
    let result = validate_feedback(&with_rating(candidate, rating));
    match (expected, result) {
        (None, Ok(_)) => {}
        (Some(violation), Err(err)) => {
            assert_eq!(err.field(), FeedbackField::Rating);
            assert_eq!(err.violation(), violation);
        }
        (expected, other) => panic!("expected {expected:?}, got {other:?}"),
    }
}

#[rstest]
#[case(0)]
#[case(6)]
#[case(255)]
#[case(256)]
#[case(-1)]
#[case(i64::MAX)]
fn rating_outside_bounds_reports_actual_value(#[case] value: i64) {
    let err = Rating::new(value).expect_err("out of range");
    assert_eq!(
        err.violation(),
        FeedbackViolation::OutOfRange {
            min: RATING_MIN,
            max: RATING_MAX,
            actual: value,
        }
    );
}

#[rstest]
fn huge_unsigned_rating_is_out_of_range(candidate: FeedbackCandidate) {
    let err = validate_feedback(&with_rating(candidate, json!(u64::MAX)))
        .expect_err("out of range");
    assert_eq!(err.violation().code(), "out_of_range");
}

#[rstest]
fn checks_run_in_fixed_order(candidate: FeedbackCandidate) {
    let all_bad = FeedbackCandidate {
        subject: "x".to_owned(),
        message: "short".to_owned(),
        rating: RatingInput::from(9_i64),
    };
    assert_eq!(
        validate_feedback(&all_bad).expect_err("invalid").field(),
        FeedbackField::Subject
    );

    let message_and_rating_bad = FeedbackCandidate {
        subject: candidate.subject.clone(),
        ..all_bad
    };
    assert_eq!(
        validate_feedback(&message_and_rating_bad)
            .expect_err("invalid")
            .field(),
        FeedbackField::Message
    );
}

#[rstest]
#[case(FeedbackField::Subject, FeedbackViolation::TooShort { min: 3 }, "Subject must be at least 3 characters")]
#[case(FeedbackField::Subject, FeedbackViolation::TooLong { max: 200 }, "Subject too long")]
#[case(FeedbackField::Message, FeedbackViolation::TooShort { min: 10 }, "Message must be at least 10 characters")]
#[case(FeedbackField::Message, FeedbackViolation::TooLong { max: 1000 }, "Message too long")]
#[case(FeedbackField::Rating, FeedbackViolation::OutOfRange { min: 1, max: 5, actual: 0 }, "Please select a rating")]
#[case(FeedbackField::Rating, FeedbackViolation::OutOfRange { min: 1, max: 5, actual: 6 }, "Invalid rating")]
#[case(FeedbackField::Rating, FeedbackViolation::NotAnInteger, "Invalid rating")]
fn messages_match_form_copy(
    #[case] field: FeedbackField,
    #[case] violation: FeedbackViolation,
    #[case] expected: &str,
) {
    assert_eq!(
        FeedbackValidationError::new(field, violation).to_string(),
        expected
    );
}

#[rstest]
fn validation_is_deterministic(candidate: FeedbackCandidate) {
    assert_eq!(validate_feedback(&candidate), validate_feedback(&candidate));
}

#[rstest]
#[case("all", RatingFilter::All)]
#[case(" ALL ", RatingFilter::All)]
#[case("3", RatingFilter::Exactly(Rating::new(3).expect("valid rating")))]
fn rating_filter_parses(#[case] raw: &str, #[case] expected: RatingFilter) {
    assert_eq!(raw.parse::<RatingFilter>().expect("valid filter"), expected);
}

#[rstest]
#[case("0")]
#[case("6")]
#[case("2.5")]
#[case("five")]
fn rating_filter_rejects_invalid_values(#[case] raw: &str) {
    assert!(raw.parse::<RatingFilter>().is_err());
}

#[rstest]
fn rating_filter_matches_exactly() {
    let four = Rating::new(4).expect("valid rating");
    let five = Rating::new(5).expect("valid rating");
    assert!(RatingFilter::All.matches(four));
    assert!(RatingFilter::Exactly(four).matches(four));
    assert!(!RatingFilter::Exactly(four).matches(five));
}

#[rstest]
fn newest_first_orders_by_time_then_id(candidate: FeedbackCandidate) {
    let owner = UserId::random();
    let draft = validate_feedback(&candidate).expect("valid submission");
    let base = Utc
        .with_ymd_and_hms(2025, 1, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp");
    let low_id = FeedbackId::from(uuid::Uuid::from_u128(1));
    let high_id = FeedbackId::from(uuid::Uuid::from_u128(2));

    let older = Feedback::from_draft(low_id, owner.clone(), draft.clone(), base);
    let tie_low = Feedback::from_draft(low_id, owner.clone(), draft.clone(), base + Duration::seconds(5));
    let tie_high = Feedback::from_draft(high_id, owner, draft, base + Duration::seconds(5));

    let mut records = vec![older.clone(), tie_low.clone(), tie_high.clone()];
    records.sort_by(Feedback::newest_first);

    assert_eq!(records, vec![tie_high, tie_low, older]);
}

#[rstest]
fn feedback_serialises_camel_case(candidate: FeedbackCandidate) {
    let id = FeedbackId::from(uuid::Uuid::nil());
    let owner = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("fixture id");
    let created_at = Utc
        .with_ymd_and_hms(2025, 3, 4, 5, 6, 7)
        .single()
        .expect("valid timestamp");
    let draft = validate_feedback(&candidate).expect("valid submission");
    let feedback = Feedback::from_draft(id, owner, draft, created_at);

    let value = serde_json::to_value(&feedback).expect("serialise feedback");

    assert_eq!(
        value,
        json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "owner": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "subject": "Great app",
            "message": "Really enjoying the new dashboard.",
            "rating": 5,
            "createdAt": "2025-03-04T05:06:07Z",
        })
    );
}

#[rstest]
fn stored_rows_with_invalid_values_are_rejected() {
    let payload = json!({
        "id": "00000000-0000-0000-0000-000000000000",
        "owner": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
        "subject": "ok",
        "message": "Really enjoying the new dashboard.",
        "rating": 5,
        "createdAt": "2025-03-04T05:06:07Z",
    });
    assert!(serde_json::from_value::<Feedback>(payload).is_err());
}

//! Validation of untrusted feedback submissions.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{FeedbackDraft, Message, Rating, Subject};

pub const SUBJECT_MIN: usize = 3;
pub const SUBJECT_MAX: usize = 200;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 1000;
pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 5;

/// Field of a submission that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackField {
    Subject,
    Message,
    Rating,
}

impl FeedbackField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Message => "message",
            Self::Rating => "rating",
        }
    }
}

/// Specific bound a field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackViolation {
    TooShort { min: usize },
    TooLong { max: usize },
    OutOfRange { min: u8, max: u8, actual: i64 },
    NotAnInteger,
}

impl FeedbackViolation {
    /// Machine-readable code carried in error details.
    pub fn code(self) -> &'static str {
        match self {
            Self::TooShort { .. } => "too_short",
            Self::TooLong { .. } => "too_long",
            Self::OutOfRange { .. } => "out_of_range",
            Self::NotAnInteger => "not_an_integer",
        }
    }
}

/// First validation failure found in a submission.
///
/// # Examples
/// ```
/// use feedback_backend::domain::feedback::{
///     FeedbackCandidate, FeedbackField, RatingInput, validate_feedback,
/// };
///
/// let candidate = FeedbackCandidate {
///     subject: "Hi".into(),
///     message: "Long enough message".into(),
///     rating: RatingInput::from(4_i64),
/// };
/// let err = validate_feedback(&candidate).unwrap_err();
/// assert_eq!(err.field(), FeedbackField::Subject);
/// assert_eq!(err.to_string(), "Subject must be at least 3 characters");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackValidationError {
    field: FeedbackField,
    violation: FeedbackViolation,
}

impl FeedbackValidationError {
    pub fn new(field: FeedbackField, violation: FeedbackViolation) -> Self {
        Self { field, violation }
    }

    pub fn field(&self) -> FeedbackField {
        self.field
    }

    pub fn violation(&self) -> FeedbackViolation {
        self.violation
    }
}

impl fmt::Display for FeedbackValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use FeedbackField as Field;
        use FeedbackViolation as V;

        match (self.field, self.violation) {
            (Field::Subject, V::TooShort { min }) => {
                write!(f, "Subject must be at least {min} characters")
            }
            (Field::Subject, _) => f.write_str("Subject too long"),
            (Field::Message, V::TooShort { min }) => {
                write!(f, "Message must be at least {min} characters")
            }
            (Field::Message, _) => f.write_str("Message too long"),
            (Field::Rating, V::OutOfRange { min, actual, .. }) if actual < i64::from(min) => {
                f.write_str("Please select a rating")
            }
            (Field::Rating, _) => f.write_str("Invalid rating"),
        }
    }
}

impl std::error::Error for FeedbackValidationError {}

/// Raw rating exactly as the client sent it.
///
/// Kept as a JSON value so fractional, textual, or missing ratings reach the
/// validator instead of failing during deserialisation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingInput(Value);

impl RatingInput {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    fn to_integer(&self) -> Option<i64> {
        let Value::Number(number) = &self.0 else {
            return None;
        };
        if let Some(value) = number.as_i64() {
            return Some(value);
        }
        if number.as_u64().is_some() {
            return Some(i64::MAX);
        }
        number
            .as_f64()
            .filter(|value| value.is_finite() && value.fract() == 0.0)
            .map(|value| value as i64)
    }
}

impl From<i64> for RatingInput {
    fn from(value: i64) -> Self {
        Self(Value::from(value))
    }
}

impl From<f64> for RatingInput {
    fn from(value: f64) -> Self {
        Self(Value::from(value))
    }
}

/// Untrusted submission as received from a client.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedbackCandidate {
    pub subject: String,
    pub message: String,
    pub rating: RatingInput,
}

/// Validate a submission, reporting only the first violation.
///
/// Checks run in a fixed order: subject length, message length, then rating.
/// Text is trimmed before counting characters and the draft keeps the trimmed
/// form.
pub fn validate_feedback(
    candidate: &FeedbackCandidate,
) -> Result<FeedbackDraft, FeedbackValidationError> {
    let subject = Subject::new(&candidate.subject)?;
    let message = Message::new(&candidate.message)?;
    let rating = candidate
        .rating
        .to_integer()
        .ok_or_else(|| {
            FeedbackValidationError::new(FeedbackField::Rating, FeedbackViolation::NotAnInteger)
        })
        .and_then(Rating::new)?;

    Ok(FeedbackDraft {
        subject,
        message,
        rating,
    })
}

impl TryFrom<&FeedbackCandidate> for FeedbackDraft {
    type Error = FeedbackValidationError;

    fn try_from(candidate: &FeedbackCandidate) -> Result<Self, Self::Error> {
        validate_feedback(candidate)
    }
}

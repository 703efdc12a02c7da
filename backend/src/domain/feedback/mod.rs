//! Feedback records and the values they are built from.
//!
//! A [`Feedback`] record is created once from a validated [`FeedbackDraft`]
//! and never edited afterwards. Construction helpers re-check stored values so
//! rows read back from storage obey the same bounds as fresh submissions.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{DisplayName, EmailAddress, UserId};

mod validation;

pub use validation::{
    FeedbackCandidate, FeedbackField, FeedbackValidationError, FeedbackViolation, MESSAGE_MAX,
    MESSAGE_MIN, RATING_MAX, RATING_MIN, RatingInput, SUBJECT_MAX, SUBJECT_MIN,
    validate_feedback,
};

/// Identifier of a feedback record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(Uuid);

impl FeedbackId {
    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for FeedbackId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strip leading and trailing whitespace, byte order marks included.
fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

macro_rules! bounded_text {
    ($(#[$meta:meta])* $name:ident, $field:expr, $min:expr, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Trim and length-check the input.
            pub fn new(raw: impl AsRef<str>) -> Result<Self, FeedbackValidationError> {
                let trimmed = trim_input(raw.as_ref());
                let length = trimmed.chars().count();
                if length < $min {
                    return Err(FeedbackValidationError::new(
                        $field,
                        FeedbackViolation::TooShort { min: $min },
                    ));
                }
                if length > $max {
                    return Err(FeedbackValidationError::new(
                        $field,
                        FeedbackViolation::TooLong { max: $max },
                    ));
                }
                Ok(Self(trimmed.to_owned()))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_ref())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = FeedbackValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

bounded_text!(
    /// Short headline of a feedback record.
    Subject,
    FeedbackField::Subject,
    SUBJECT_MIN,
    SUBJECT_MAX
);

bounded_text!(
    /// Body text of a feedback record.
    Message,
    FeedbackField::Message,
    MESSAGE_MIN,
    MESSAGE_MAX
);

/// Star rating between [`RATING_MIN`] and [`RATING_MAX`] inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    /// Range-check an integer rating.
    pub fn new(value: i64) -> Result<Self, FeedbackValidationError> {
        u8::try_from(value)
            .ok()
            .filter(|rating| (RATING_MIN..=RATING_MAX).contains(rating))
            .map(Self)
            .ok_or_else(|| {
                FeedbackValidationError::new(
                    FeedbackField::Rating,
                    FeedbackViolation::OutOfRange {
                        min: RATING_MIN,
                        max: RATING_MAX,
                        actual: value,
                    },
                )
            })
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<Rating> for i64 {
    fn from(value: Rating) -> Self {
        i64::from(value.0)
    }
}

impl TryFrom<i64> for Rating {
    type Error = FeedbackValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Normalised, validated submission ready for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub subject: Subject,
    pub message: Message,
    pub rating: Rating,
}

/// Stored feedback record.
///
/// ## Invariants
/// - `owner` is set once from the session that submitted the record.
/// - `subject`, `message`, and `rating` satisfy the validator bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[schema(value_type = String, format = Uuid)]
    id: FeedbackId,
    #[schema(value_type = String, format = Uuid)]
    owner: UserId,
    #[schema(value_type = String, min_length = 3, max_length = 200)]
    subject: Subject,
    #[schema(value_type = String, min_length = 10, max_length = 1000)]
    message: Message,
    #[schema(value_type = u8, minimum = 1, maximum = 5)]
    rating: Rating,
    created_at: DateTime<Utc>,
}

impl Feedback {
    /// Assemble a record from a validated draft plus storage-assigned fields.
    pub fn from_draft(
        id: FeedbackId,
        owner: UserId,
        draft: FeedbackDraft,
        created_at: DateTime<Utc>,
    ) -> Self {
        let FeedbackDraft {
            subject,
            message,
            rating,
        } = draft;
        Self {
            id,
            owner,
            subject,
            message,
            rating,
            created_at,
        }
    }

    pub fn id(&self) -> FeedbackId {
        self.id
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Listing order: newest first, ties broken by id descending.
    pub fn newest_first(a: &Self, b: &Self) -> Ordering {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    }
}

/// Submitter details shown on the admin listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Submitter {
    #[schema(value_type = String, example = "Ada Lovelace")]
    pub display_name: DisplayName,
    #[schema(value_type = String, example = "ada@feedbackhub.test")]
    pub email: EmailAddress,
}

/// Feedback joined with the submitter's directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackWithSubmitter {
    #[serde(flatten)]
    pub feedback: Feedback,
    pub submitter: Submitter,
}

/// Exact-match rating filter used by the admin listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingFilter {
    #[default]
    All,
    Exactly(Rating),
}

impl RatingFilter {
    pub fn matches(self, rating: Rating) -> bool {
        match self {
            Self::All => true,
            Self::Exactly(expected) => expected == rating,
        }
    }
}

/// Error returned when a rating filter string is neither `all` nor `1..=5`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("rating filter must be \"all\" or an integer from 1 to 5, got {0:?}")]
pub struct RatingFilterParseError(pub String);

impl std::str::FromStr for RatingFilter {
    type Err = RatingFilterParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed
            .parse::<i64>()
            .ok()
            .and_then(|value| Rating::new(value).ok())
            .map(Self::Exactly)
            .ok_or_else(|| RatingFilterParseError(raw.to_owned()))
    }
}

#[cfg(test)]
mod tests;

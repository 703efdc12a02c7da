//! Shared parsing helpers for path and query values.
//!
//! Body validation lives in the domain; these helpers only cover the
//! identifiers and filters that arrive as raw strings in the URL.

use serde_json::json;
use uuid::Uuid;

use crate::domain::{Error, FeedbackId, RatingFilter};

/// Validation error codes for URL parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorCode {
    InvalidUuid,
    InvalidRatingFilter,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidRatingFilter => "invalid_rating_filter",
        }
    }
}

/// Newtype wrapper for wire field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn invalid_value(field: FieldName, code: ErrorCode, message: String, value: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

pub(crate) fn parse_feedback_id(value: &str, field: FieldName) -> Result<FeedbackId, Error> {
    Uuid::parse_str(value).map(FeedbackId::from).map_err(|_| {
        invalid_value(
            field,
            ErrorCode::InvalidUuid,
            format!("{} must be a valid UUID", field.as_str()),
            value,
        )
    })
}

/// Parse an optional `rating` query value; absent means every rating.
pub(crate) fn parse_rating_filter(
    value: Option<&str>,
    field: FieldName,
) -> Result<RatingFilter, Error> {
    let Some(raw) = value else {
        return Ok(RatingFilter::All);
    };
    raw.parse::<RatingFilter>().map_err(|_| {
        invalid_value(
            field,
            ErrorCode::InvalidRatingFilter,
            format!("{} must be all or 1-5", field.as_str()),
            raw,
        )
    })
}

//! Domain primitives, policies, and services.
//!
//! Purpose: hold the feedback rules independent of HTTP and storage.
//! Inbound adapters call the driving ports in [`ports`]; outbound adapters
//! implement the driven ones.
//!
//! Public surface:
//! - [`Feedback`] and its value types, plus [`validate_feedback`].
//! - [`Session`], [`Role`], [`AccessState`] and the [`access`] policy.
//! - [`FeedbackService`] implementing the feedback driving ports.
//! - [`Error`] / [`ErrorCode`] shared by every layer.

pub mod access;
pub mod auth;
pub mod error;
pub mod feedback;
pub mod feedback_service;
pub mod navigation;
pub mod ports;
pub mod session;
pub mod trace_id;
pub mod user;

pub use self::access::{AccessPolicy, Action};
pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::feedback::{
    Feedback, FeedbackCandidate, FeedbackDraft, FeedbackField, FeedbackId,
    FeedbackValidationError, FeedbackViolation, FeedbackWithSubmitter, Message, Rating,
    RatingFilter, RatingFilterParseError, RatingInput, Subject, Submitter, validate_feedback,
};
pub use self::feedback_service::FeedbackService;
pub use self::navigation::Navigation;
pub use self::session::{AccessState, Session};
pub use self::trace_id::TraceId;
pub use self::user::{DisplayName, EmailAddress, Role, User, UserId, UserValidationError};

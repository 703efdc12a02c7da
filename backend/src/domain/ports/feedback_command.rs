//! Driving port for feedback mutations.
//!
//! Every request carries the caller's session explicitly. Responses include
//! the refreshed listing so clients replace their view instead of merging.

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{
    Error, Feedback, FeedbackCandidate, FeedbackId, FeedbackWithSubmitter, RatingFilter, Session,
};

/// Request to submit feedback as the session owner.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitFeedbackRequest {
    pub session: Option<Session>,
    pub candidate: FeedbackCandidate,
}

/// Created record plus the caller's refreshed history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackResponse {
    pub created: Feedback,
    pub feedback: Vec<Feedback>,
}

/// Admin request to delete a record.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteFeedbackRequest {
    pub session: Option<Session>,
    pub feedback_id: FeedbackId,
    /// Filter applied to the refreshed listing.
    pub filter: RatingFilter,
}

/// Admin listing joined with submitter details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminFeedbackResponse {
    pub feedback: Vec<FeedbackWithSubmitter>,
    /// Number of records before the rating filter was applied.
    pub total: usize,
}

/// Driving port for feedback write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackCommand: Send + Sync {
    /// Validate and store a submission, then re-read the caller's history.
    ///
    /// Fails with `Unauthorized` without a session and `InvalidRequest` when
    /// validation rejects the candidate; storage is untouched in both cases.
    async fn submit(&self, request: SubmitFeedbackRequest)
    -> Result<SubmitFeedbackResponse, Error>;

    /// Delete a record as an administrator, then re-read the full listing.
    ///
    /// Non-admin callers are rejected before the repository is consulted.
    async fn delete(&self, request: DeleteFeedbackRequest)
    -> Result<AdminFeedbackResponse, Error>;
}

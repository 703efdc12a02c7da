//! Driving port for feedback listings.

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Error, Feedback, RatingFilter, Session};

use super::AdminFeedbackResponse;

/// Request for the caller's own history.
#[derive(Debug, Clone, PartialEq)]
pub struct ListOwnFeedbackRequest {
    pub session: Option<Session>,
}

/// Caller's own history, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnFeedbackResponse {
    pub feedback: Vec<Feedback>,
}

/// Admin request for every record.
#[derive(Debug, Clone, PartialEq)]
pub struct ListAllFeedbackRequest {
    pub session: Option<Session>,
    pub filter: RatingFilter,
}

/// Driving port for feedback read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackQuery: Send + Sync {
    /// List the session owner's records.
    async fn list_own(&self, request: ListOwnFeedbackRequest)
    -> Result<OwnFeedbackResponse, Error>;

    /// List every record for an administrator, filtered by exact rating.
    async fn list_all(&self, request: ListAllFeedbackRequest)
    -> Result<AdminFeedbackResponse, Error>;
}

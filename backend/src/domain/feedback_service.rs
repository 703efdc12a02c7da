//! Feedback use-cases behind the driving ports.
//!
//! Order of work for every operation: access policy, then validation (on
//! submit), then storage. Listings after a mutation are full re-reads.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::access::{AccessPolicy, Action};
use crate::domain::ports::{
    AdminFeedbackResponse, DeleteFeedbackRequest, FeedbackCommand, FeedbackQuery,
    FeedbackRepository, FeedbackRepositoryError, ListAllFeedbackRequest, ListOwnFeedbackRequest,
    OwnFeedbackResponse, SubmitFeedbackRequest, SubmitFeedbackResponse,
};
use crate::domain::{Error, FeedbackValidationError, RatingFilter, validate_feedback};

fn map_repository_error(error: FeedbackRepositoryError) -> Error {
    match error {
        FeedbackRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("feedback repository unavailable: {message}"))
        }
        FeedbackRepositoryError::Query { message } => {
            Error::internal(format!("feedback repository error: {message}"))
        }
        FeedbackRepositoryError::NotFound { id } => {
            Error::not_found(format!("feedback {id} not found"))
        }
    }
}

fn map_validation_error(error: FeedbackValidationError) -> Error {
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": error.field().as_str(),
        "code": error.violation().code(),
    }))
}

/// Service implementing [`FeedbackCommand`] and [`FeedbackQuery`].
pub struct FeedbackService<R: ?Sized> {
    feedback_repo: Arc<R>,
}

impl<R: ?Sized> Clone for FeedbackService<R> {
    fn clone(&self) -> Self {
        Self {
            feedback_repo: Arc::clone(&self.feedback_repo),
        }
    }
}

impl<R: ?Sized> FeedbackService<R> {
    /// Create a service over the given repository.
    pub fn new(feedback_repo: Arc<R>) -> Self {
        Self { feedback_repo }
    }
}

impl<R> FeedbackService<R>
where
    R: FeedbackRepository + ?Sized,
{
    async fn admin_listing(&self, filter: RatingFilter) -> Result<AdminFeedbackResponse, Error> {
        let all = self
            .feedback_repo
            .list_all()
            .await
            .map_err(map_repository_error)?;
        let total = all.len();
        let feedback = all
            .into_iter()
            .filter(|row| filter.matches(row.feedback.rating()))
            .collect();
        Ok(AdminFeedbackResponse { feedback, total })
    }
}

#[async_trait]
impl<R> FeedbackCommand for FeedbackService<R>
where
    R: FeedbackRepository + ?Sized,
{
    async fn submit(
        &self,
        request: SubmitFeedbackRequest,
    ) -> Result<SubmitFeedbackResponse, Error> {
        let session = AccessPolicy::authorize(request.session.as_ref(), Action::Submit)?;
        let draft = validate_feedback(&request.candidate).map_err(map_validation_error)?;

        let created = self
            .feedback_repo
            .insert(&draft, session.user_id())
            .await
            .map_err(map_repository_error)?;
        info!(
            feedback_id = %created.id(),
            user_id = %session.user_id(),
            rating = created.rating().value(),
            "feedback submitted"
        );

        let feedback = self
            .feedback_repo
            .list_by_owner(session.user_id())
            .await
            .map_err(map_repository_error)?;

        Ok(SubmitFeedbackResponse { created, feedback })
    }

    async fn delete(&self, request: DeleteFeedbackRequest) -> Result<AdminFeedbackResponse, Error> {
        let session = AccessPolicy::authorize(request.session.as_ref(), Action::Delete)?;

        self.feedback_repo
            .delete_by_id(&request.feedback_id)
            .await
            .map_err(map_repository_error)?;
        info!(
            feedback_id = %request.feedback_id,
            admin_id = %session.user_id(),
            "feedback deleted"
        );

        self.admin_listing(request.filter).await
    }
}

#[async_trait]
impl<R> FeedbackQuery for FeedbackService<R>
where
    R: FeedbackRepository + ?Sized,
{
    async fn list_own(&self, request: ListOwnFeedbackRequest) -> Result<OwnFeedbackResponse, Error> {
        let session = AccessPolicy::authorize(request.session.as_ref(), Action::ViewOwn)?;
        let feedback = self
            .feedback_repo
            .list_by_owner(session.user_id())
            .await
            .map_err(map_repository_error)?;
        Ok(OwnFeedbackResponse { feedback })
    }

    async fn list_all(
        &self,
        request: ListAllFeedbackRequest,
    ) -> Result<AdminFeedbackResponse, Error> {
        AccessPolicy::authorize(request.session.as_ref(), Action::ViewAll)?;
        self.admin_listing(request.filter).await
    }
}

#[cfg(test)]
#[path = "feedback_service_tests.rs"]
mod tests;

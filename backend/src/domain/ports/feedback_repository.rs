//! Port for feedback persistence.
//!
//! Adapters assign `id` and `created_at` on insert and return listings newest
//! first (ties broken by id descending). The port performs no access checks;
//! callers gate every operation through the access policy first.

use async_trait::async_trait;

use crate::domain::{Feedback, FeedbackDraft, FeedbackId, FeedbackWithSubmitter, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by feedback repository adapters.
    pub enum FeedbackRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "feedback repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "feedback repository query failed: {message}",
        /// No record matched the identifier.
        NotFound { id: FeedbackId } =>
            "feedback {id} not found",
    }
}

/// Storage operations for feedback records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Persist a validated draft owned by `owner` and return the stored record.
    async fn insert(
        &self,
        draft: &FeedbackDraft,
        owner: &UserId,
    ) -> Result<Feedback, FeedbackRepositoryError>;

    /// Records owned by `owner`, newest first.
    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Feedback>, FeedbackRepositoryError>;

    /// Every record joined with its submitter, newest first.
    async fn list_all(&self) -> Result<Vec<FeedbackWithSubmitter>, FeedbackRepositoryError>;

    /// Remove a record; unknown ids fail with [`FeedbackRepositoryError::NotFound`].
    async fn delete_by_id(&self, id: &FeedbackId) -> Result<(), FeedbackRepositoryError>;
}

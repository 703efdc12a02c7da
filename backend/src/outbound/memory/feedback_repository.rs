//! In-memory feedback store.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{FeedbackRepository, FeedbackRepositoryError, UserRepository};
use crate::domain::{
    Feedback, FeedbackDraft, FeedbackId, FeedbackWithSubmitter, Submitter, UserId,
};

/// Feedback records held in process memory.
pub struct InMemoryFeedbackRepository {
    records: RwLock<Vec<Feedback>>,
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl InMemoryFeedbackRepository {
    /// Create an empty store that joins submitters from `users`.
    pub fn new(users: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            users,
            clock,
        }
    }

    fn snapshot(&self) -> Result<Vec<Feedback>, FeedbackRepositoryError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        let mut snapshot = records.clone();
        snapshot.sort_by(Feedback::newest_first);
        Ok(snapshot)
    }
}

fn poisoned() -> FeedbackRepositoryError {
    FeedbackRepositoryError::query("feedback store lock poisoned")
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn insert(
        &self,
        draft: &FeedbackDraft,
        owner: &UserId,
    ) -> Result<Feedback, FeedbackRepositoryError> {
        let record = Feedback::from_draft(
            FeedbackId::random(),
            owner.clone(),
            draft.clone(),
            self.clock.utc(),
        );
        let mut records = self.records.write().map_err(|_| poisoned())?;
        records.push(record.clone());
        Ok(record)
    }

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Feedback>, FeedbackRepositoryError> {
        let mut owned = self.snapshot()?;
        owned.retain(|record| record.owner() == owner);
        Ok(owned)
    }

    async fn list_all(&self) -> Result<Vec<FeedbackWithSubmitter>, FeedbackRepositoryError> {
        let records = self.snapshot()?;
        let mut rows = Vec::with_capacity(records.len());
        for feedback in records {
            let user = self
                .users
                .find_by_id(feedback.owner())
                .await
                .map_err(|err| FeedbackRepositoryError::query(err.to_string()))?
                .ok_or_else(|| {
                    FeedbackRepositoryError::query(format!(
                        "submitter {} missing from directory",
                        feedback.owner()
                    ))
                })?;
            rows.push(FeedbackWithSubmitter {
                feedback,
                submitter: Submitter {
                    display_name: user.display_name().clone(),
                    email: user.email().clone(),
                },
            });
        }
        Ok(rows)
    }

    async fn delete_by_id(&self, id: &FeedbackId) -> Result<(), FeedbackRepositoryError> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        let before = records.len();
        records.retain(|record| record.id() != *id);
        if records.len() == before {
            return Err(FeedbackRepositoryError::not_found(*id));
        }
        Ok(())
    }
}

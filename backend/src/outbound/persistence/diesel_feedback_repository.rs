//! PostgreSQL-backed `FeedbackRepository`.
//!
//! Rows are re-validated through the domain constructors on read, so a row
//! that slipped past the CHECK constraints surfaces as a query error rather
//! than an invalid record.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{FeedbackRepository, FeedbackRepositoryError};
use crate::domain::{
    DisplayName, EmailAddress, Feedback, FeedbackDraft, FeedbackId, FeedbackWithSubmitter,
    Message, Rating, Subject, Submitter, UserId,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{FeedbackRow, NewFeedbackRow, SubmitterRow};
use super::pool::{DbPool, PoolError};
use super::schema::{feedback, users};

/// Diesel-backed feedback store.
#[derive(Clone)]
pub struct DieselFeedbackRepository {
    pool: DbPool,
}

impl DieselFeedbackRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> FeedbackRepositoryError {
    map_basic_pool_error(error, FeedbackRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> FeedbackRepositoryError {
    map_basic_diesel_error(
        error,
        FeedbackRepositoryError::query,
        FeedbackRepositoryError::connection,
    )
}

fn invalid_row(err: impl std::fmt::Display) -> FeedbackRepositoryError {
    FeedbackRepositoryError::query(format!("invalid feedback row: {err}"))
}

fn row_to_feedback(row: FeedbackRow) -> Result<Feedback, FeedbackRepositoryError> {
    let FeedbackRow {
        id,
        user_id,
        subject,
        message,
        rating,
        created_at,
    } = row;

    let draft = FeedbackDraft {
        subject: Subject::new(subject).map_err(invalid_row)?,
        message: Message::new(message).map_err(invalid_row)?,
        rating: Rating::new(i64::from(rating)).map_err(invalid_row)?,
    };
    Ok(Feedback::from_draft(
        FeedbackId::from(id),
        UserId::from(user_id),
        draft,
        created_at,
    ))
}

fn row_to_submitter(row: SubmitterRow) -> Result<Submitter, FeedbackRepositoryError> {
    Ok(Submitter {
        display_name: DisplayName::new(row.display_name).map_err(invalid_row)?,
        email: EmailAddress::new(row.email).map_err(invalid_row)?,
    })
}

fn rating_column(rating: Rating) -> i16 {
    i16::from(rating.value())
}

#[async_trait]
impl FeedbackRepository for DieselFeedbackRepository {
    async fn insert(
        &self,
        draft: &FeedbackDraft,
        owner: &UserId,
    ) -> Result<Feedback, FeedbackRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewFeedbackRow {
            id: *FeedbackId::random().as_uuid(),
            user_id: *owner.as_uuid(),
            subject: draft.subject.as_ref(),
            message: draft.message.as_ref(),
            rating: rating_column(draft.rating),
        };

        let stored = diesel::insert_into(feedback::table)
            .values(&row)
            .returning(FeedbackRow::as_returning())
            .get_result::<FeedbackRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_feedback(stored)
    }

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Feedback>, FeedbackRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<FeedbackRow> = feedback::table
            .filter(feedback::user_id.eq(owner.as_uuid()))
            .order((feedback::created_at.desc(), feedback::id.desc()))
            .select(FeedbackRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_feedback).collect()
    }

    async fn list_all(&self) -> Result<Vec<FeedbackWithSubmitter>, FeedbackRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(FeedbackRow, SubmitterRow)> = feedback::table
            .inner_join(users::table)
            .order((feedback::created_at.desc(), feedback::id.desc()))
            .select((FeedbackRow::as_select(), SubmitterRow::as_select()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter()
            .map(|(feedback, submitter)| {
                Ok(FeedbackWithSubmitter {
                    feedback: row_to_feedback(feedback)?,
                    submitter: row_to_submitter(submitter)?,
                })
            })
            .collect()
    }

    async fn delete_by_id(&self, id: &FeedbackId) -> Result<(), FeedbackRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(feedback::table.filter(feedback::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(FeedbackRepositoryError::not_found(*id));
        }
        Ok(())
    }
}

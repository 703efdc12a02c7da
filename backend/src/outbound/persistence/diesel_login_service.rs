//! `LoginService` that checks the built-in accounts and keeps their
//! directory rows in PostgreSQL current.
//!
//! Feedback rows reference `users.id`, so the account row is upserted on
//! every successful sign-in before a session is issued.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{FixtureAccount, LoginService, UserPersistenceError, UserRepository};
use crate::domain::{Error, LoginCredentials, Session};

/// Login adapter backed by a persistent user directory.
#[derive(Clone)]
pub struct DieselLoginService {
    user_repository: Arc<dyn UserRepository>,
}

impl DieselLoginService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }
}

fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

#[async_trait]
impl LoginService for DieselLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Session, Error> {
        let account = FixtureAccount::matching(credentials)
            .ok_or_else(|| Error::unauthorized("invalid credentials"))?;
        let user = account.user()?;

        self.user_repository
            .upsert(&user)
            .await
            .map_err(map_user_persistence_error)?;
        info!(user_id = %user.id(), role = user.role().as_str(), "directory entry refreshed");

        Ok(Session::from(&user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockUserRepository;
    use rstest::rstest;

    fn credentials(email: &str, password: &str) -> LoginCredentials {
        LoginCredentials::try_from_parts(email, password).expect("valid test credentials")
    }

    #[rstest]
    #[tokio::test]
    async fn known_account_is_upserted_before_session_is_issued() {
        let mut repo = MockUserRepository::new();
        repo.expect_upsert()
            .withf(|user| user.email().as_ref() == "ada@feedbackhub.test")
            .times(1)
            .returning(|_| Ok(()));
        let service = DieselLoginService::new(Arc::new(repo));

        let session = service
            .authenticate(&credentials("ada@feedbackhub.test", "password"))
            .await
            .expect("fixture credentials authenticate");

        assert!(!session.is_admin());
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_credentials_skip_the_directory() {
        let mut repo = MockUserRepository::new();
        repo.expect_upsert().times(0);
        let service = DieselLoginService::new(Arc::new(repo));

        let err = service
            .authenticate(&credentials("ada@feedbackhub.test", "nope"))
            .await
            .expect_err("wrong password");

        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }

    #[rstest]
    #[case(UserPersistenceError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(UserPersistenceError::query("bad sql"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn directory_failures_are_mapped(
        #[case] failure: UserPersistenceError,
        #[case] expected: ErrorCode,
    ) {
        let mut repo = MockUserRepository::new();
        repo.expect_upsert()
            .times(1)
            .return_once(move |_| Err(failure));
        let service = DieselLoginService::new(Arc::new(repo));

        let err = service
            .authenticate(&credentials("admin@feedbackhub.test", "password"))
            .await
            .expect_err("directory failure");

        assert_eq!(err.code(), expected);
    }
}

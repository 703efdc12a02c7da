//! Driving port for sign-in.
//!
//! Inbound adapters call [`LoginService::authenticate`] and store the returned
//! [`Session`] in the cookie; they never see how identities are checked.

use async_trait::async_trait;

use crate::domain::{
    DisplayName, EmailAddress, Error, LoginCredentials, Role, Session, User, UserId,
    UserValidationError,
};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the session to establish.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Session, Error>;
}

/// Built-in development account.
#[derive(Debug, Clone, Copy)]
pub struct FixtureAccount {
    pub id: &'static str,
    pub display_name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
}

/// Accounts accepted by the fixture and Diesel login adapters.
pub static FIXTURE_ACCOUNTS: [FixtureAccount; 2] = [
    FixtureAccount {
        id: "123e4567-e89b-12d3-a456-426614174000",
        display_name: "Admin",
        email: "admin@feedbackhub.test",
        password: "password",
        role: Role::Admin,
    },
    FixtureAccount {
        id: "3fa85f64-5717-4562-b3fc-2c963f66afa6",
        display_name: "Ada Lovelace",
        email: "ada@feedbackhub.test",
        password: "password",
        role: Role::User,
    },
];

impl FixtureAccount {
    /// Find the account matching both email and password.
    pub fn matching(credentials: &LoginCredentials) -> Option<&'static FixtureAccount> {
        FIXTURE_ACCOUNTS.iter().find(|account| {
            account.email == credentials.email().as_ref()
                && account.password == credentials.password()
        })
    }

    /// Directory entry for the account.
    pub fn user(&self) -> Result<User, Error> {
        let invalid =
            |err: UserValidationError| Error::internal(format!("invalid fixture account: {err}"));
        Ok(User::new(
            UserId::new(self.id).map_err(invalid)?,
            DisplayName::new(self.display_name).map_err(invalid)?,
            EmailAddress::new(self.email).map_err(invalid)?,
            self.role,
        ))
    }
}

/// In-memory authenticator backed by [`FIXTURE_ACCOUNTS`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Session, Error> {
        let account = FixtureAccount::matching(credentials)
            .ok_or_else(|| Error::unauthorized("invalid credentials"))?;
        Ok(Session::from(&account.user()?))
    }
}

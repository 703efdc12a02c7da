//! Authenticated session as seen by the domain.
//!
//! A session exists only between sign-in and sign-out. Its absence means the
//! caller is anonymous; services receive it explicitly rather than reading
//! any ambient state.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{EmailAddress, Role, User, UserId};

/// Identity of the signed-in caller.
///
/// # Examples
/// ```
/// use feedback_backend::domain::{EmailAddress, Role, Session, UserId};
///
/// let session = Session::new(
///     UserId::random(),
///     EmailAddress::new("ada@feedbackhub.test").unwrap(),
///     Role::User,
/// );
/// assert!(!session.is_admin());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    user_id: UserId,
    #[schema(value_type = String, example = "ada@feedbackhub.test")]
    email: EmailAddress,
    role: Role,
}

impl Session {
    pub fn new(user_id: UserId, email: EmailAddress, role: Role) -> Self {
        Self {
            user_id,
            email,
            role,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Whether the caller holds the administrator role.
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

impl From<&User> for Session {
    fn from(user: &User) -> Self {
        Self::new(user.id().clone(), user.email().clone(), user.role())
    }
}

/// Access state derived from the presence and role of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccessState {
    Anonymous,
    AuthenticatedUser,
    AuthenticatedAdmin,
}

impl AccessState {
    /// Classify an optional session.
    pub fn of(session: Option<&Session>) -> Self {
        match session.map(Session::role) {
            None => Self::Anonymous,
            Some(Role::User) => Self::AuthenticatedUser,
            Some(Role::Admin) => Self::AuthenticatedAdmin,
        }
    }

    pub fn is_authenticated(self) -> bool {
        !matches!(self, Self::Anonymous)
    }
}

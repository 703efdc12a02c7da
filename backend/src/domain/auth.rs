//! Sign-in credentials.
//!
//! Handlers turn raw payload strings into [`LoginCredentials`] before talking
//! to the login port, so adapters never see blank or malformed input.

use zeroize::Zeroizing;

use super::{EmailAddress, UserValidationError};

/// Error returned when sign-in payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    #[error("email must be a valid address: {0}")]
    InvalidEmail(#[source] UserValidationError),
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated credentials used by authentication services.
///
/// ## Invariants
/// - `email` is a normalised [`EmailAddress`].
/// - `password` is non-empty; caller-provided whitespace is retained.
///
/// # Examples
/// ```
/// use feedback_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("Ada@FeedbackHub.test", "password").unwrap();
/// assert_eq!(creds.email().as_ref(), "ada@feedbackhub.test");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let email = EmailAddress::new(email).map_err(LoginValidationError::InvalidEmail)?;
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

//! Access policy for feedback actions.
//!
//! The policy is a pure function of the caller's session and the requested
//! action. Services call [`AccessPolicy::authorize`] before touching storage
//! so denied callers never reach a repository.

use tracing::debug;

use super::{Error, Session, UserId};

/// Action a caller wants to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Submit a new feedback record.
    Submit,
    /// List the caller's own records.
    ViewOwn,
    /// List every record (admin review).
    ViewAll,
    /// Delete any record (admin review).
    Delete,
}

impl Action {
    fn requires_admin(self) -> bool {
        matches!(self, Self::ViewAll | Self::Delete)
    }
}

/// Decide whether `session` may perform `action`.
///
/// `resource_owner` is accepted so call sites read the same for owned and
/// unowned resources; it does not influence the decision. Scoping the own
/// list to the caller is the repository query's job.
///
/// # Examples
/// ```
/// use feedback_backend::domain::access::{Action, allow};
///
/// assert!(!allow(None, Action::Submit, None));
/// ```
pub fn allow(session: Option<&Session>, action: Action, resource_owner: Option<&UserId>) -> bool {
    let allowed = match session {
        None => false,
        Some(session) => !action.requires_admin() || session.is_admin(),
    };
    debug!(
        ?action,
        user_id = session.map(|s| s.user_id().to_string()),
        resource_owner = resource_owner.map(ToString::to_string),
        allowed,
        "access decision"
    );
    allowed
}

/// Gate turning access decisions into domain errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct AccessPolicy;

impl AccessPolicy {
    /// Return the session when the action is allowed.
    ///
    /// Anonymous callers get [`Error::unauthorized`]; signed-in callers that
    /// lack the role get [`Error::forbidden`].
    pub fn authorize(session: Option<&Session>, action: Action) -> Result<&Session, Error> {
        let Some(active) = session else {
            return Err(Error::unauthorized("sign in required"));
        };
        if allow(session, action, None) {
            Ok(active)
        } else {
            Err(Error::forbidden("administrator access required"))
        }
    }
}

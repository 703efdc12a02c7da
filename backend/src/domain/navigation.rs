//! Landing-page call to action and navigation entries.
//!
//! Derived from the access state alone; no data is loaded.

use serde::Serialize;
use utoipa::ToSchema;

use super::{AccessState, Session};

/// Client route for the authenticated dashboard.
pub const DASHBOARD_PATH: &str = "/dashboard";
/// Client route for the admin review page.
pub const ADMIN_PATH: &str = "/admin";
/// Client route for the sign-in page.
pub const AUTH_PATH: &str = "/auth";

/// What a navigation entry does when chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NavKind {
    Link,
    SignOut,
}

/// Single navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavEntry {
    pub label: &'static str,
    pub kind: NavKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<&'static str>,
}

impl NavEntry {
    const fn link(label: &'static str, target: &'static str) -> Self {
        Self {
            label,
            kind: NavKind::Link,
            target: Some(target),
        }
    }

    const fn sign_out() -> Self {
        Self {
            label: "Sign Out",
            kind: NavKind::SignOut,
            target: None,
        }
    }
}

/// Navigation shown for the caller's access state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub access: AccessState,
    /// Target of the landing page's primary button.
    pub primary_action: &'static str,
    pub entries: Vec<NavEntry>,
}

impl Navigation {
    /// Build navigation for an optional session.
    ///
    /// # Examples
    /// ```
    /// use feedback_backend::domain::navigation::{AUTH_PATH, Navigation};
    ///
    /// let nav = Navigation::for_session(None);
    /// assert_eq!(nav.primary_action, AUTH_PATH);
    /// ```
    pub fn for_session(session: Option<&Session>) -> Self {
        let access = AccessState::of(session);
        let (primary_action, entries) = match access {
            AccessState::Anonymous => (AUTH_PATH, vec![NavEntry::link("Get Started", AUTH_PATH)]),
            AccessState::AuthenticatedUser => (
                DASHBOARD_PATH,
                vec![
                    NavEntry::link("Dashboard", DASHBOARD_PATH),
                    NavEntry::sign_out(),
                ],
            ),
            AccessState::AuthenticatedAdmin => (
                DASHBOARD_PATH,
                vec![
                    NavEntry::link("Dashboard", DASHBOARD_PATH),
                    NavEntry::link("Admin", ADMIN_PATH),
                    NavEntry::sign_out(),
                ],
            ),
        };
        Self {
            access,
            primary_action,
            entries,
        }
    }
}

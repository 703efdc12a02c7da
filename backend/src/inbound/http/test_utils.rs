//! Test helpers for inbound HTTP components.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use mockable::DefaultClock;
use std::sync::Arc;

use crate::domain::FeedbackService;
use crate::domain::ports::{FeedbackRepository, FixtureLoginService};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{InMemoryFeedbackRepository, InMemoryUserRepository};

/// Session middleware with a fresh key and an insecure cookie named `session`.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Extract the session cookie set by a response.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

/// HTTP state over the in-memory adapters and the fixture login.
pub fn memory_state() -> HttpState {
    let users = Arc::new(
        InMemoryUserRepository::with_fixture_accounts().expect("fixture accounts are valid"),
    );
    let repo: Arc<dyn FeedbackRepository> =
        Arc::new(InMemoryFeedbackRepository::new(users, Arc::new(DefaultClock)));
    let service = Arc::new(FeedbackService::new(repo));
    HttpState::new(Arc::new(FixtureLoginService), service.clone(), service)
}

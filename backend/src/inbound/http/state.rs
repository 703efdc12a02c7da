//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see driving ports, so
//! they can be exercised with mocks and without I/O.

use std::sync::Arc;

use crate::domain::ports::{FeedbackCommand, FeedbackQuery, LoginService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub feedback_command: Arc<dyn FeedbackCommand>,
    pub feedback_query: Arc<dyn FeedbackQuery>,
}

impl HttpState {
    /// Bundle the ports consumed by the HTTP handlers.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use feedback_backend::domain::FeedbackService;
    /// use feedback_backend::domain::ports::{FeedbackRepository, FixtureLoginService};
    /// use feedback_backend::inbound::http::state::HttpState;
    /// use feedback_backend::outbound::memory::{InMemoryFeedbackRepository, InMemoryUserRepository};
    /// use mockable::DefaultClock;
    ///
    /// let users = Arc::new(InMemoryUserRepository::with_fixture_accounts().unwrap());
    /// let repo: Arc<dyn FeedbackRepository> =
    ///     Arc::new(InMemoryFeedbackRepository::new(users, Arc::new(DefaultClock)));
    /// let service = Arc::new(FeedbackService::new(repo));
    /// let state = HttpState::new(Arc::new(FixtureLoginService), service.clone(), service);
    /// let _login = state.login.clone();
    /// ```
    pub fn new(
        login: Arc<dyn LoginService>,
        feedback_command: Arc<dyn FeedbackCommand>,
        feedback_query: Arc<dyn FeedbackQuery>,
    ) -> Self {
        Self {
            login,
            feedback_command,
            feedback_query,
        }
    }
}

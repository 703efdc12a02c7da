//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod feedback_command;
mod feedback_query;
mod feedback_repository;
mod login_service;
mod user_repository;

#[cfg(test)]
pub use feedback_command::MockFeedbackCommand;
pub use feedback_command::{
    AdminFeedbackResponse, DeleteFeedbackRequest, FeedbackCommand, SubmitFeedbackRequest,
    SubmitFeedbackResponse,
};
#[cfg(test)]
pub use feedback_query::MockFeedbackQuery;
pub use feedback_query::{
    FeedbackQuery, ListAllFeedbackRequest, ListOwnFeedbackRequest, OwnFeedbackResponse,
};
#[cfg(test)]
pub use feedback_repository::MockFeedbackRepository;
pub use feedback_repository::{FeedbackRepository, FeedbackRepositoryError};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{FIXTURE_ACCOUNTS, FixtureAccount, FixtureLoginService, LoginService};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};

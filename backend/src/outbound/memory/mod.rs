//! In-process adapters used when no database is configured.
//!
//! State lives behind `std::sync::RwLock`s and is lost on restart. These
//! adapters back local development and the HTTP integration tests.

mod feedback_repository;
mod user_repository;

pub use feedback_repository::InMemoryFeedbackRepository;
pub use user_repository::InMemoryUserRepository;

//! Builds the HTTP state from the configured storage backend.
//!
//! With a database pool the Diesel adapters back every port; without one the
//! server runs on in-memory stores seeded with the built-in accounts.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use feedback_backend::domain::FeedbackService;
use feedback_backend::domain::ports::{FeedbackRepository, FixtureLoginService, LoginService};
use feedback_backend::inbound::http::state::HttpState;
use feedback_backend::outbound::memory::{InMemoryFeedbackRepository, InMemoryUserRepository};
use feedback_backend::outbound::persistence::{
    DbPool, DieselFeedbackRepository, DieselLoginService, DieselUserRepository,
};

use super::ServerConfig;

/// Driven-side adapters selected for this process.
struct StoragePorts {
    login: Arc<dyn LoginService>,
    feedback: Arc<dyn FeedbackRepository>,
}

fn memory_ports() -> std::io::Result<StoragePorts> {
    let users = Arc::new(
        InMemoryUserRepository::with_fixture_accounts()
            .map_err(|err| std::io::Error::other(format!("fixture accounts: {err}")))?,
    );
    Ok(StoragePorts {
        login: Arc::new(FixtureLoginService),
        feedback: Arc::new(InMemoryFeedbackRepository::new(
            users,
            Arc::new(DefaultClock),
        )),
    })
}

fn diesel_ports(pool: &DbPool) -> StoragePorts {
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    StoragePorts {
        login: Arc::new(DieselLoginService::new(users)),
        feedback: Arc::new(DieselFeedbackRepository::new(pool.clone())),
    }
}

fn select_ports<Pool>(
    pool: &Option<Pool>,
    make_db_ports: impl FnOnce(&Pool) -> StoragePorts,
) -> std::io::Result<StoragePorts> {
    match pool {
        Some(pool) => Ok(make_db_ports(pool)),
        None => memory_ports(),
    }
}

fn http_state_from(ports: StoragePorts) -> HttpState {
    let service = Arc::new(FeedbackService::new(ports.feedback));
    HttpState::new(ports.login, service.clone(), service)
}

/// Assemble handler state for the configured backend.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let ports = select_ports(&config.db_pool, diesel_ports)?;
    Ok(web::Data::new(http_state_from(ports)))
}

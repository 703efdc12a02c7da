//! HTTP inbound adapter exposing the REST endpoints.
//!
//! Handlers only depend on the driving ports bundled in [`state::HttpState`]
//! and read the caller's identity through [`session::SessionContext`].

pub mod admin;
pub mod error;
pub mod feedback;
pub mod health;
pub mod navigation;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
mod validation;

pub use error::{ApiResult, json_error_handler};

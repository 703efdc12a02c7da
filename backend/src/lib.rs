//! FeedbackHub backend: session-authenticated feedback collection with an
//! administrator review surface.
//!
//! - [`domain`]: validation, access policy, and the feedback service
//! - [`inbound`]: HTTP adapter (Actix handlers, sessions, error mapping)
//! - [`outbound`]: in-memory and PostgreSQL storage adapters

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;

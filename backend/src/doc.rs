//! OpenAPI document for the REST API.
//!
//! Served by Swagger UI in debug builds and printed by the `openapi-dump`
//! binary for client generation.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::navigation::{NavEntry, NavKind};
use crate::domain::ports::{AdminFeedbackResponse, OwnFeedbackResponse, SubmitFeedbackResponse};
use crate::domain::{
    AccessState, Error, ErrorCode, Feedback, FeedbackWithSubmitter, Navigation, Role, Session,
    Submitter,
};
use crate::inbound::http::feedback::FeedbackRequest;
use crate::inbound::http::users::LoginRequest;

/// Registers the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "FeedbackHub API",
        description = "Session-authenticated feedback submission and admin review."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::current_session,
        crate::inbound::http::feedback::list_own_feedback,
        crate::inbound::http::feedback::submit_feedback,
        crate::inbound::http::admin::list_all_feedback,
        crate::inbound::http::admin::delete_feedback,
        crate::inbound::http::navigation::navigation,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Session,
        Role,
        AccessState,
        Feedback,
        Submitter,
        FeedbackWithSubmitter,
        OwnFeedbackResponse,
        SubmitFeedbackResponse,
        AdminFeedbackResponse,
        Navigation,
        NavEntry,
        NavKind,
        LoginRequest,
        FeedbackRequest,
    )),
    tags(
        (name = "session", description = "Sign-in, sign-out, and the current session"),
        (name = "feedback", description = "Submitting and reviewing one's own feedback"),
        (name = "admin", description = "Administrator review of all feedback"),
        (name = "navigation", description = "Landing page call to action and menu"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

//! Admin review handlers.
//!
//! ```text
//! GET /api/v1/admin/feedback?rating=all|1..5
//! DELETE /api/v1/admin/feedback/{id}?rating=all|1..5
//! ```
//!
//! Role checks happen in the feedback service, before storage is touched.

use actix_web::{delete, get, web};
use serde::Deserialize;

use crate::domain::Error;
use crate::domain::ports::{AdminFeedbackResponse, DeleteFeedbackRequest, ListAllFeedbackRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_feedback_id, parse_rating_filter};

/// Query string accepted by the admin listing endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct RatingQuery {
    pub rating: Option<String>,
}

/// List every submission with its submitter, filtered by exact rating.
#[utoipa::path(
    get,
    path = "/api/v1/admin/feedback",
    params(
        ("rating" = Option<String>, Query, description = "`all` (default) or an exact rating 1-5")
    ),
    responses(
        (status = 200, description = "All feedback", body = AdminFeedbackResponse),
        (status = 400, description = "Invalid rating filter", body = Error),
        (status = 401, description = "Not signed in", body = Error),
        (status = 403, description = "Administrator access required", body = Error),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["admin"],
    operation_id = "listAllFeedback",
    security(("SessionCookie" = []))
)]
#[get("/admin/feedback")]
pub async fn list_all_feedback(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<RatingQuery>,
) -> ApiResult<web::Json<AdminFeedbackResponse>> {
    let filter = parse_rating_filter(query.rating.as_deref(), FieldName::new("rating"))?;
    let response = state
        .feedback_query
        .list_all(ListAllFeedbackRequest {
            session: session.current_session()?,
            filter,
        })
        .await?;
    Ok(web::Json(response))
}

/// Delete a submission and return the refreshed listing.
#[utoipa::path(
    delete,
    path = "/api/v1/admin/feedback/{id}",
    params(
        ("id" = String, Path, description = "Feedback identifier"),
        ("rating" = Option<String>, Query, description = "Filter applied to the refreshed listing")
    ),
    responses(
        (status = 200, description = "Refreshed listing", body = AdminFeedbackResponse),
        (status = 400, description = "Invalid identifier or filter", body = Error),
        (status = 401, description = "Not signed in", body = Error),
        (status = 403, description = "Administrator access required", body = Error),
        (status = 404, description = "Feedback not found", body = Error),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["admin"],
    operation_id = "deleteFeedback",
    security(("SessionCookie" = []))
)]
#[delete("/admin/feedback/{id}")]
pub async fn delete_feedback(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    query: web::Query<RatingQuery>,
) -> ApiResult<web::Json<AdminFeedbackResponse>> {
    let feedback_id = parse_feedback_id(&path.into_inner(), FieldName::new("id"))?;
    let filter = parse_rating_filter(query.rating.as_deref(), FieldName::new("rating"))?;
    let response = state
        .feedback_command
        .delete(DeleteFeedbackRequest {
            session: session.current_session()?,
            feedback_id,
            filter,
        })
        .await?;
    Ok(web::Json(response))
}

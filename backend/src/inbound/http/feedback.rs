//! Dashboard feedback handlers.
//!
//! ```text
//! GET /api/v1/feedback
//! POST /api/v1/feedback {"subject":"Great app","message":"Works well for me","rating":5}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{
    ListOwnFeedbackRequest, OwnFeedbackResponse, SubmitFeedbackRequest, SubmitFeedbackResponse,
};
use crate::domain::{Error, FeedbackCandidate, RatingInput};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Submission body for `POST /api/v1/feedback`.
///
/// Fields are taken as sent; missing fields fall through to the validator so
/// clients receive the same messages a form would show.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedbackRequest {
    #[schema(example = "Great app")]
    pub subject: String,
    #[schema(example = "Works well for me on every device.")]
    pub message: String,
    #[schema(value_type = i32, minimum = 1, maximum = 5, example = 5)]
    pub rating: RatingInput,
}

impl From<FeedbackRequest> for FeedbackCandidate {
    fn from(value: FeedbackRequest) -> Self {
        Self {
            subject: value.subject,
            message: value.message,
            rating: value.rating,
        }
    }
}

/// List the caller's own feedback, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/feedback",
    responses(
        (status = 200, description = "Own feedback", body = OwnFeedbackResponse),
        (status = 401, description = "Not signed in", body = Error),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["feedback"],
    operation_id = "listOwnFeedback"
)]
#[get("/feedback")]
pub async fn list_own_feedback(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<OwnFeedbackResponse>> {
    let response = state
        .feedback_query
        .list_own(ListOwnFeedbackRequest {
            session: session.current_session()?,
        })
        .await?;
    Ok(web::Json(response))
}

/// Validate and store a submission owned by the caller.
///
/// The response carries the created record and the refreshed history.
#[utoipa::path(
    post,
    path = "/api/v1/feedback",
    request_body = FeedbackRequest,
    responses(
        (status = 201, description = "Feedback stored", body = SubmitFeedbackResponse),
        (status = 400, description = "Validation failed", body = Error),
        (status = 401, description = "Not signed in", body = Error),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["feedback"],
    operation_id = "submitFeedback"
)]
#[post("/feedback")]
pub async fn submit_feedback(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<FeedbackRequest>,
) -> ApiResult<HttpResponse> {
    let response = state
        .feedback_command
        .submit(SubmitFeedbackRequest {
            session: session.current_session()?,
            candidate: payload.into_inner().into(),
        })
        .await?;
    Ok(HttpResponse::Created().json(response))
}

#[cfg(test)]
mod tests;

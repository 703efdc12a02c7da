//! Tests for the dashboard feedback handlers.

use super::*;
use crate::domain::ports::{MockFeedbackCommand, MockFeedbackQuery, MockLoginService};
use crate::inbound::http::test_utils::{memory_state, session_cookie, test_session_middleware};
use crate::inbound::http::users::login;
use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(test_session_middleware())
        .service(
            web::scope("/api/v1")
                .service(login)
                .service(list_own_feedback)
                .service(submit_feedback),
        )
}

async fn sign_in(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    email: &str,
) -> Cookie<'static> {
    let response = actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({"email": email, "password": "password"}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    session_cookie(&response)
}

fn submit(cookie: Option<Cookie<'static>>, body: Value) -> actix_http::Request {
    let request = actix_test::TestRequest::post()
        .uri("/api/v1/feedback")
        .set_json(body);
    match cookie {
        Some(cookie) => request.cookie(cookie),
        None => request,
    }
    .to_request()
}

#[rstest]
#[actix_web::test]
async fn submit_returns_created_record_and_history() {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let cookie = sign_in(&app, "ada@feedbackhub.test").await;

    let response = actix_test::call_service(
        &app,
        submit(
            Some(cookie.clone()),
            json!({"subject": "  Great app ", "message": "Works well for me", "rating": 5}),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["created"]["subject"], "Great app");
    assert_eq!(body["created"]["rating"], 5);
    assert_eq!(body["created"]["owner"], "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    assert!(body["created"].get("createdAt").is_some());
    assert_eq!(body["feedback"].as_array().map(Vec::len), Some(1));

    let listed = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/feedback")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(listed.status(), StatusCode::OK);
    let listing: Value = actix_test::read_body_json(listed).await;
    assert_eq!(listing["feedback"][0]["id"], body["created"]["id"]);
}

#[rstest]
#[case(json!({"subject": "ab", "message": "Works well for me", "rating": 5}), "subject", "too_short", "Subject must be at least 3 characters")]
#[case(json!({"subject": "Great app", "message": "short", "rating": 5}), "message", "too_short", "Message must be at least 10 characters")]
#[case(json!({"subject": "Great app", "message": "Works well for me", "rating": 0}), "rating", "out_of_range", "Please select a rating")]
#[case(json!({"subject": "Great app", "message": "Works well for me", "rating": 6}), "rating", "out_of_range", "Invalid rating")]
#[case(json!({"subject": "Great app", "message": "Works well for me", "rating": 3.5}), "rating", "not_an_integer", "Invalid rating")]
#[case(json!({"subject": "Great app", "message": "Works well for me"}), "rating", "not_an_integer", "Invalid rating")]
#[actix_web::test]
async fn invalid_submissions_are_rejected_with_field_details(
    #[case] body: Value,
    #[case] field: &str,
    #[case] code: &str,
    #[case] message: &str,
) {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let cookie = sign_in(&app, "ada@feedbackhub.test").await;

    let response = actix_test::call_service(&app, submit(Some(cookie.clone()), body)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value["code"], "invalid_request");
    assert_eq!(value["message"], message);
    assert_eq!(value["details"]["field"], field);
    assert_eq!(value["details"]["code"], code);

    let listed = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/feedback")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let listing: Value = actix_test::read_body_json(listed).await;
    assert_eq!(listing["feedback"], json!([]));
}

#[rstest]
#[actix_web::test]
async fn anonymous_callers_are_unauthorised() {
    let app = actix_test::init_service(test_app(memory_state())).await;

    let post = actix_test::call_service(
        &app,
        submit(
            None,
            json!({"subject": "Great app", "message": "Works well for me", "rating": 4}),
        ),
    )
    .await;
    assert_eq!(post.status(), StatusCode::UNAUTHORIZED);

    let get = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/feedback")
            .to_request(),
    )
    .await;
    assert_eq!(get.status(), StatusCode::UNAUTHORIZED);
}

#[rstest]
#[actix_web::test]
async fn histories_are_scoped_to_their_owner() {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let ada = sign_in(&app, "ada@feedbackhub.test").await;
    let admin = sign_in(&app, "admin@feedbackhub.test").await;

    actix_test::call_service(
        &app,
        submit(
            Some(ada),
            json!({"subject": "Great app", "message": "Works well for me", "rating": 4}),
        ),
    )
    .await;

    let listed = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/feedback")
            .cookie(admin)
            .to_request(),
    )
    .await;
    let listing: Value = actix_test::read_body_json(listed).await;
    assert_eq!(listing["feedback"], json!([]));
}

#[rstest]
#[actix_web::test]
async fn storage_outage_maps_to_service_unavailable() {
    let mut query = MockFeedbackQuery::new();
    query
        .expect_list_own()
        .times(1)
        .returning(|_| Err(Error::service_unavailable("feedback repository unavailable")));
    let state = HttpState::new(
        Arc::new(MockLoginService::new()),
        Arc::new(MockFeedbackCommand::new()),
        Arc::new(query),
    );
    let app = actix_test::init_service(test_app(state)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/feedback")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

//! Landing navigation handler.
//!
//! ```text
//! GET /api/v1/navigation
//! ```

use actix_web::{get, web};

use crate::domain::Navigation;
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;

/// Primary call to action and menu entries for the caller's access state.
#[utoipa::path(
    get,
    path = "/api/v1/navigation",
    responses((status = 200, description = "Navigation for the caller", body = Navigation)),
    tags = ["navigation"],
    operation_id = "navigation",
    security([])
)]
#[get("/navigation")]
pub async fn navigation(session: SessionContext) -> ApiResult<web::Json<Navigation>> {
    let current = session.current_session()?;
    Ok(web::Json(Navigation::for_session(current.as_ref())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{memory_state, session_cookie, test_session_middleware};
    use crate::inbound::http::users::login;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case(None, "/auth", vec!["Get Started"])]
    #[case(Some("ada@feedbackhub.test"), "/dashboard", vec!["Dashboard", "Sign Out"])]
    #[case(Some("admin@feedbackhub.test"), "/dashboard", vec!["Dashboard", "Admin", "Sign Out"])]
    #[actix_web::test]
    async fn navigation_follows_access_state(
        #[case] email: Option<&str>,
        #[case] primary: &str,
        #[case] labels: Vec<&str>,
    ) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(memory_state()))
                .wrap(test_session_middleware())
                .service(web::scope("/api/v1").service(login).service(navigation)),
        )
        .await;

        let mut request = test::TestRequest::get().uri("/api/v1/navigation");
        if let Some(email) = email {
            let signed_in = test::call_service(
                &app,
                test::TestRequest::post()
                    .uri("/api/v1/login")
                    .set_json(json!({"email": email, "password": "password"}))
                    .to_request(),
            )
            .await;
            request = request.cookie(session_cookie(&signed_in));
        }

        let response = test::call_service(&app, request.to_request()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["primaryAction"], primary);
        let actual: Vec<&str> = body["entries"]
            .as_array()
            .expect("entries")
            .iter()
            .filter_map(|entry| entry["label"].as_str())
            .collect();
        assert_eq!(actual, labels);
    }
}

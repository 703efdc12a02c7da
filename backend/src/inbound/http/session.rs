//! Cookie-backed session context for HTTP handlers.
//!
//! Wraps the Actix session so handlers only see domain [`Session`] values:
//! sign-in stores one, every request reads it back, sign-out purges it.

use actix_session::Session as CookieSession;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, Session};

pub(crate) const SESSION_KEY: &str = "session";

/// Newtype exposing session operations in domain terms.
#[derive(Clone)]
pub struct SessionContext(CookieSession);

impl SessionContext {
    pub fn new(session: CookieSession) -> Self {
        Self(session)
    }

    /// Store the authenticated session, rotating the cookie identifier.
    pub fn persist_session(&self, session: &Session) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(SESSION_KEY, session)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// The caller's session, or `None` when anonymous.
    ///
    /// A cookie whose payload no longer decodes into a [`Session`] is treated
    /// as anonymous rather than as a server error.
    pub fn current_session(&self) -> Result<Option<Session>, Error> {
        match self.0.get::<Session>(SESSION_KEY) {
            Ok(session) => Ok(session),
            Err(error) => {
                warn!(%error, "discarding unreadable session payload");
                Ok(None)
            }
        }
    }

    /// Require a session or fail with `401 Unauthorized`.
    pub fn require_session(&self) -> Result<Session, Error> {
        self.current_session()?
            .ok_or_else(|| Error::unauthorized("sign in required"))
    }

    /// Destroy the session; the next response clears the cookie.
    pub fn sign_out(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = CookieSession::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmailAddress, Role, UserId};
    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};
    use rstest::rstest;

    fn ada() -> Session {
        Session::new(
            UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("fixture id"),
            EmailAddress::new("ada@feedbackhub.test").expect("fixture email"),
            Role::User,
        )
    }

    fn session_test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(test_session_middleware())
            .route(
                "/set",
                web::get().to(|session: SessionContext| async move {
                    session.persist_session(&ada())?;
                    Ok::<_, Error>(HttpResponse::Ok())
                }),
            )
            .route(
                "/set-garbage",
                web::get().to(|session: CookieSession| async move {
                    session
                        .insert(SESSION_KEY, "not a session")
                        .expect("insert raw value");
                    HttpResponse::Ok()
                }),
            )
            .route(
                "/get",
                web::get().to(|session: SessionContext| async move {
                    let current = session.require_session()?;
                    Ok::<_, Error>(HttpResponse::Ok().json(current))
                }),
            )
            .route(
                "/out",
                web::get().to(|session: SessionContext| async move {
                    session.sign_out();
                    HttpResponse::Ok()
                }),
            )
    }

    #[rstest]
    #[actix_web::test]
    async fn round_trips_the_session() {
        let app = test::init_service(session_test_app()).await;

        let set_res =
            test::call_service(&app, test::TestRequest::get().uri("/set").to_request()).await;
        assert_eq!(set_res.status(), StatusCode::OK);
        let cookie = session_cookie(&set_res);

        let get_res = test::call_service(
            &app,
            test::TestRequest::get().uri("/get").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(get_res.status(), StatusCode::OK);
        let body: Session = test::read_body_json(get_res).await;
        assert_eq!(body, ada());
    }

    #[rstest]
    #[actix_web::test]
    async fn anonymous_requests_are_unauthorised() {
        let app = test::init_service(session_test_app()).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/get").to_request()).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    #[actix_web::test]
    async fn unreadable_payload_is_anonymous() {
        let app = test::init_service(session_test_app()).await;

        let set_res = test::call_service(
            &app,
            test::TestRequest::get().uri("/set-garbage").to_request(),
        )
        .await;
        let cookie = session_cookie(&set_res);

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/get").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    #[actix_web::test]
    async fn sign_out_clears_the_cookie() {
        let app = test::init_service(session_test_app()).await;

        let set_res =
            test::call_service(&app, test::TestRequest::get().uri("/set").to_request()).await;
        let cookie = session_cookie(&set_res);

        let out_res = test::call_service(
            &app,
            test::TestRequest::get().uri("/out").cookie(cookie).to_request(),
        )
        .await;
        let cleared = out_res
            .response()
            .cookies()
            .find(|c| c.name() == "session")
            .expect("removal cookie issued");
        assert_eq!(cleared.value(), "");
    }
}

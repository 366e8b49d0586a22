use actix_web::{
    body::EitherBody,
    cookie::{time::Duration as CookieDuration, Cookie, SameSite},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error, HttpMessage, HttpRequest, HttpResponse,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use serde_json::json;
use std::fmt;

use crate::models::user::SessionUser;

pub const AUTH_COOKIE: &str = "authToken";
pub const LOGIN_PATH: &str = "/login";
const SESSION_MAX_AGE_DAYS: i64 = 7;

#[derive(Debug)]
pub enum SessionError {
    Missing,
    Malformed(serde_json::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Missing => write!(f, "no {} cookie", AUTH_COOKIE),
            SessionError::Malformed(err) => write!(f, "malformed {} cookie: {}", AUTH_COOKIE, err),
        }
    }
}

impl std::error::Error for SessionError {}

/// Cookie attributes that depend on the deployment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionCookieConfig {
    pub secure: bool,
}

impl SessionCookieConfig {
    pub fn session_cookie(&self, user: &SessionUser) -> Result<Cookie<'static>, serde_json::Error> {
        let token = serde_json::to_string(user)?;
        // Percent-encoded only: request cookies are percent-decoded once and
        // `+` is left alone, so spaces must not travel as `+`.
        let encoded = url::form_urlencoded::byte_serialize(token.as_bytes())
            .collect::<String>()
            .replace('+', "%20");

        Ok(Cookie::build(AUTH_COOKIE, encoded)
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Strict)
            .max_age(CookieDuration::days(SESSION_MAX_AGE_DAYS))
            .finish())
    }

    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(AUTH_COOKIE, "")
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Strict)
            .finish();
        cookie.make_removal();
        cookie
    }
}

/// Reads the session from a cookie value that has already been percent-decoded.
pub fn decode_session(value: &str) -> Result<SessionUser, SessionError> {
    serde_json::from_str(value).map_err(SessionError::Malformed)
}

pub fn session_from_request(req: &HttpRequest) -> Result<SessionUser, SessionError> {
    let cookie = req.cookie(AUTH_COOKIE).ok_or(SessionError::Missing)?;
    decode_session(cookie.value())
}

/// Requires the `authToken` cookie. Without it the client is sent to the
/// login page; with an unreadable one the request is rejected.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match session_from_request(req.request()) {
            Ok(user) => {
                req.extensions_mut().insert(user);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(SessionError::Missing) => {
                log::debug!("no session cookie, redirecting: path={}", req.path());
                let (request, _payload) = req.into_parts();
                let response = HttpResponse::Found()
                    .insert_header((header::LOCATION, LOGIN_PATH))
                    .finish()
                    .map_into_right_body();
                Box::pin(ready(Ok(ServiceResponse::new(request, response))))
            }
            Err(err) => {
                log::warn!("rejected session cookie: path={}, err={}", req.path(), err);
                let (request, _payload) = req.into_parts();
                let response = HttpResponse::Unauthorized()
                    .json(json!({ "error": "Invalid auth token" }))
                    .map_into_right_body();
                Box::pin(ready(Ok(ServiceResponse::new(request, response))))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> SessionUser {
        SessionUser {
            id: 1,
            email: "test@example.com".to_string(),
            name: "Test User".to_string(),
        }
    }

    // What a client sends back: the issued name=value, parsed the way request cookies are.
    fn sent_back(cookie: &Cookie<'_>) -> Cookie<'static> {
        let issued = cookie.stripped().to_string();
        Cookie::parse_encoded(issued).unwrap().into_owned()
    }

    #[test]
    fn test_cookie_round_trips_through_decoder() {
        let cookie = SessionCookieConfig::default().session_cookie(&user()).unwrap();
        assert_eq!(cookie.name(), AUTH_COOKIE);
        assert!(!cookie.value().contains('"'));
        assert!(!cookie.value().contains('+'));
        assert_eq!(decode_session(sent_back(&cookie).value()).unwrap(), user());
    }

    #[test]
    fn test_cookie_keeps_plus_and_ampersand() {
        let tricky = SessionUser {
            id: 7,
            email: "a+b@example.com".to_string(),
            name: "Tom & Jerry".to_string(),
        };
        let cookie = SessionCookieConfig::default().session_cookie(&tricky).unwrap();
        assert_eq!(decode_session(sent_back(&cookie).value()).unwrap(), tricky);
    }

    #[test]
    fn test_decodes_browser_encoded_cookie() {
        let header = "authToken=%7B%22id%22%3A2%2C%22email%22%3A%22admin%40example.com%22%2C%22name%22%3A%22Admin%20User%22%7D";
        let cookie = Cookie::parse_encoded(header).unwrap();
        let session = decode_session(cookie.value()).unwrap();
        assert_eq!(session.id, 2);
        assert_eq!(session.name, "Admin User");
    }

    #[test]
    fn test_decodes_plain_json_cookie() {
        let raw = r#"{"id":1,"email":"test@example.com","name":"Test"}"#;
        assert_eq!(decode_session(raw).unwrap().email, "test@example.com");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            decode_session("not-json"),
            Err(SessionError::Malformed(_))
        ));
        assert!(matches!(
            decode_session(r#"{"email":"x"}"#),
            Err(SessionError::Malformed(_))
        ));
    }

    #[test]
    fn test_cookie_attributes() {
        let config = SessionCookieConfig { secure: true };
        let cookie = config.session_cookie(&user()).unwrap();
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.path(), Some("/"));

        let removal = config.removal_cookie();
        assert_eq!(removal.value(), "");
        assert_eq!(removal.max_age(), Some(CookieDuration::ZERO));
    }
}

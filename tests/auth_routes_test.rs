mod common;

use actix_web::{http::header, test};
use serde_json::json;

use common::{session_cookie, ScriptedGenerator, TestApp};
use trip_planner_api::{
    middleware::auth::{decode_session, SessionCookieConfig, AUTH_COOKIE},
    models::user::SessionUser,
};

/// The `name=value` part of a `Set-Cookie` header, as a browser sends it back.
fn cookie_pair(set_cookie: &str) -> String {
    set_cookie.split(';').next().unwrap_or_default().to_string()
}

#[actix_rt::test]
async fn test_login_sets_session_cookie() {
    let test_app = TestApp::new(ScriptedGenerator::replying(&[])).await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(&json!({ "email": "Test@Example.com", "password": "password123" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let cookie = resp
        .response()
        .cookies()
        .find(|cookie| cookie.name() == AUTH_COOKIE)
        .expect("login should set the session cookie");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));

    let session = decode_session(cookie.value()).unwrap();
    assert_eq!(session.id, 1);
    assert_eq!(session.email, "test@example.com");

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "success": true,
            "user": { "email": "test@example.com", "name": "Test User" }
        })
    );
}

#[actix_rt::test]
async fn test_login_requires_both_fields() {
    let test_app = TestApp::new(ScriptedGenerator::replying(&[])).await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(&json!({ "email": "test@example.com", "password": "" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Email and password are required");
}

#[actix_rt::test]
async fn test_login_rejects_invalid_email() {
    let test_app = TestApp::new(ScriptedGenerator::replying(&[])).await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(&json!({ "email": "not-an-email", "password": "password123" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid email address");
}

#[actix_rt::test]
async fn test_login_rejects_wrong_password() {
    let test_app = TestApp::new(ScriptedGenerator::replying(&[])).await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(&json!({ "email": "admin@example.com", "password": "password123" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    assert!(resp
        .response()
        .cookies()
        .all(|cookie| cookie.name() != AUTH_COOKIE));

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid email or password");
}

#[actix_rt::test]
async fn test_login_only_accepts_post() {
    let test_app = TestApp::new(ScriptedGenerator::replying(&[])).await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/auth/login").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 405);
}

#[actix_rt::test]
async fn test_session_returns_cookie_user() {
    let test_app = TestApp::new(ScriptedGenerator::replying(&[])).await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/auth/session")
        .cookie(session_cookie())
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "id": 1, "email": "test@example.com", "name": "Test User" })
    );
}

#[actix_rt::test]
async fn test_session_without_cookie_redirects() {
    let test_app = TestApp::new(ScriptedGenerator::replying(&[])).await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/auth/session").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 302);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
}

#[actix_rt::test]
async fn test_logout_clears_cookie() {
    let test_app = TestApp::new(ScriptedGenerator::replying(&[])).await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/logout")
        .cookie(session_cookie())
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let cookie = resp
        .response()
        .cookies()
        .find(|cookie| cookie.name() == AUTH_COOKIE)
        .expect("logout should overwrite the session cookie");
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(actix_web::cookie::time::Duration::ZERO));
}

#[actix_rt::test]
async fn test_login_cookie_works_when_sent_back() {
    let test_app = TestApp::new(ScriptedGenerator::replying(&[])).await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(&json!({ "email": "admin@example.com", "password": "admin123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let req = test::TestRequest::get()
        .uri("/api/auth/session")
        .insert_header((header::COOKIE, cookie_pair(&set_cookie)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "id": 2, "email": "admin@example.com", "name": "Admin User" })
    );
}

#[actix_rt::test]
async fn test_issued_cookie_keeps_plus_and_ampersand() {
    let test_app = TestApp::new(ScriptedGenerator::replying(&[])).await;
    let app = test::init_service(test_app.create_app()).await;

    let user = SessionUser {
        id: 7,
        email: "a+b@example.com".to_string(),
        name: "Tom & Jerry".to_string(),
    };
    let issued = SessionCookieConfig::default()
        .session_cookie(&user)
        .unwrap()
        .to_string();

    let req = test::TestRequest::get()
        .uri("/api/auth/session")
        .insert_header((header::COOKIE, cookie_pair(&issued)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "id": 7, "email": "a+b@example.com", "name": "Tom & Jerry" })
    );
}

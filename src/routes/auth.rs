use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::middleware::auth::SessionCookieConfig;
use crate::middleware::auth_context::AuthenticatedUser;
use crate::models::user::{LoginRequest, LoginResponse, PublicUser};
use crate::services::account_service::{authenticate, is_valid_email};

/*
    /api/auth/login
*/
pub async fn login(
    cookie_config: web::Data<SessionCookieConfig>,
    input: web::Json<LoginRequest>,
) -> impl Responder {
    let LoginRequest { email, password } = input.into_inner();
    let email = email.trim().to_string();

    if email.is_empty() || password.is_empty() {
        return HttpResponse::BadRequest()
            .json(json!({ "error": "Email and password are required" }));
    }

    if !is_valid_email(&email) {
        return HttpResponse::BadRequest().json(json!({ "error": "Invalid email address" }));
    }

    let user = match authenticate(&email, &password) {
        Some(user) => user,
        None => {
            log::info!("failed login: email={}", email);
            return HttpResponse::Unauthorized()
                .json(json!({ "error": "Invalid email or password" }));
        }
    };

    match cookie_config.session_cookie(&user) {
        Ok(cookie) => {
            log::info!("login: user_id={}", user.id);
            HttpResponse::Ok().cookie(cookie).json(LoginResponse {
                success: true,
                user: PublicUser {
                    email: user.email,
                    name: user.name,
                },
            })
        }
        Err(err) => {
            log::error!("failed to encode session cookie: err={}", err);
            HttpResponse::InternalServerError().json(json!({ "error": "Internal server error" }))
        }
    }
}

/*
    /api/auth/logout
*/
pub async fn logout(cookie_config: web::Data<SessionCookieConfig>) -> impl Responder {
    HttpResponse::Ok()
        .cookie(cookie_config.removal_cookie())
        .json(json!({ "success": true }))
}

/*
    /api/auth/session
*/
pub async fn session(user: AuthenticatedUser) -> impl Responder {
    HttpResponse::Ok().json(user.0)
}

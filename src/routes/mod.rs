use actix_web::{error::InternalError, web, HttpResponse, Route};
use serde_json::json;

use crate::middleware::auth::AuthMiddleware;

pub mod auth;
pub mod generate;
pub mod health;
pub mod trips;

/// Registers every route. Callers provide `web::Data` for `TripPlanner`,
/// `TripStore` and `SessionCookieConfig`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::resource("/health")
                .route(web::get().to(health::health_check))
                .default_service(not_allowed()),
        )
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .service(
                            web::resource("/login")
                                .route(web::post().to(auth::login))
                                .default_service(not_allowed()),
                        )
                        .service(
                            web::resource("/logout")
                                .route(web::post().to(auth::logout))
                                .default_service(not_allowed()),
                        )
                        .service(
                            web::resource("/session")
                                .route(web::get().to(auth::session))
                                .default_service(not_allowed())
                                .wrap(AuthMiddleware),
                        ),
                )
                .service(
                    web::scope("/generate")
                        .wrap(AuthMiddleware)
                        .service(post_resource("/country", generate::country))
                        .service(post_resource("/accommodations", generate::accommodations))
                        .service(post_resource("/transportation", generate::transportation))
                        .service(post_resource("/activities", generate::activities))
                        .service(post_resource("/itinerary", generate::itinerary)),
                )
                .service(
                    web::scope("/trips")
                        .wrap(AuthMiddleware)
                        .service(
                            web::resource("")
                                .route(web::post().to(trips::store))
                                .route(web::get().to(trips::list))
                                .default_service(not_allowed()),
                        )
                        .service(
                            web::resource("/previous")
                                .route(web::get().to(trips::previous))
                                .default_service(not_allowed()),
                        ),
                ),
        );
}

fn post_resource<F, Args>(path: &str, handler: F) -> actix_web::Resource
where
    F: actix_web::Handler<Args>,
    Args: actix_web::FromRequest + 'static,
    F::Output: actix_web::Responder + 'static,
{
    web::resource(path)
        .route(web::post().to(handler))
        .default_service(not_allowed())
}

fn not_allowed() -> Route {
    web::route().to(|| async {
        HttpResponse::MethodNotAllowed().json(json!({ "error": "Method not allowed" }))
    })
}

/// Malformed or incomplete bodies get the same `{error}` shape as other failures.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(json!({ "error": message })),
        )
        .into()
    })
}

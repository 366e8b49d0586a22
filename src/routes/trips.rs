use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::middleware::auth_context::AuthenticatedUser;
use crate::models::saved_trip::{SavedTripView, StoreTripRequest, StoreTripResponse};
use crate::services::trip_service::{TripStore, PREVIOUS_TRIPS_LIMIT};

/*
    POST /api/trips
*/
pub async fn store(
    user: AuthenticatedUser,
    store: web::Data<TripStore>,
    input: web::Json<StoreTripRequest>,
) -> impl Responder {
    let StoreTripRequest { trip_data } = input.into_inner();
    if trip_data.is_null() {
        return HttpResponse::BadRequest().json(json!({ "error": "tripData is required" }));
    }

    match store.store(user.id(), trip_data).await {
        Ok(trip) => {
            log::info!("stored trip: user_id={}, trip_id={}", user.id(), trip.trip_id);
            HttpResponse::Ok().json(StoreTripResponse {
                message: "Trip stored successfully".to_string(),
                trip_id: trip.trip_id,
            })
        }
        Err(err) => {
            log::error!("failed to store trip: user_id={}, err={}", user.id(), err);
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to store trip" }))
        }
    }
}

/*
    GET /api/trips
*/
pub async fn list(user: AuthenticatedUser, store: web::Data<TripStore>) -> impl Responder {
    fetch(&user, &store, None).await
}

/*
    GET /api/trips/previous
*/
pub async fn previous(user: AuthenticatedUser, store: web::Data<TripStore>) -> impl Responder {
    fetch(&user, &store, Some(PREVIOUS_TRIPS_LIMIT)).await
}

async fn fetch(user: &AuthenticatedUser, store: &TripStore, limit: Option<i64>) -> HttpResponse {
    match store.list_for_user(user.id(), limit).await {
        Ok(trips) => {
            let trips: Vec<SavedTripView> = trips.into_iter().map(SavedTripView::from).collect();
            HttpResponse::Ok().json(trips)
        }
        Err(err) => {
            log::error!("failed to fetch trips: user_id={}, err={}", user.id(), err);
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to fetch trips" }))
        }
    }
}

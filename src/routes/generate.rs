use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::models::trip::{
    AccommodationRequest, ActivitiesRequest, ItineraryRequest, TransportationRequest,
    TripPreferences,
};
use crate::services::trip_planner::{PlannerError, TripPlanner};

/*
    /api/generate/country
*/
pub async fn country(
    planner: web::Data<TripPlanner>,
    input: web::Json<TripPreferences>,
) -> impl Responder {
    match planner.suggest_destination(&input).await {
        Ok(destination) => HttpResponse::Ok().json(destination),
        Err(err) => failure_response("destination", err),
    }
}

/*
    /api/generate/accommodations
*/
pub async fn accommodations(
    planner: web::Data<TripPlanner>,
    input: web::Json<AccommodationRequest>,
) -> impl Responder {
    match planner.suggest_accommodations(&input).await {
        Ok(plan) => HttpResponse::Ok().json(plan),
        Err(err) => failure_response("accommodations", err),
    }
}

/*
    /api/generate/transportation
*/
pub async fn transportation(
    planner: web::Data<TripPlanner>,
    input: web::Json<TransportationRequest>,
) -> impl Responder {
    match planner.suggest_transportation(&input).await {
        Ok(plan) => HttpResponse::Ok().json(plan),
        Err(err) => failure_response("transportation", err),
    }
}

/*
    /api/generate/activities
*/
pub async fn activities(
    planner: web::Data<TripPlanner>,
    input: web::Json<ActivitiesRequest>,
) -> impl Responder {
    match planner.plan_activities(&input).await {
        Ok(plan) => HttpResponse::Ok().json(plan),
        Err(err) => failure_response("activities", err),
    }
}

/*
    /api/generate/itinerary
*/
pub async fn itinerary(
    planner: web::Data<TripPlanner>,
    input: web::Json<ItineraryRequest>,
) -> impl Responder {
    match planner.summarize_itinerary(&input).await {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(err) => failure_response("itinerary", err),
    }
}

// Every generation failure reaches the client as the same 500; the log keeps the cause.
fn failure_response(kind: &str, err: PlannerError) -> HttpResponse {
    match err {
        PlannerError::InvalidRequest(msg) => {
            HttpResponse::BadRequest().json(json!({ "error": msg }))
        }
        err => {
            log::error!("generation failed: kind={}, err={}", kind, err);
            HttpResponse::InternalServerError()
                .json(json!({ "error": format!("Failed to generate {}", kind) }))
        }
    }
}

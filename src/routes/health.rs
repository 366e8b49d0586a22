use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::BTreeMap;
use std::env;

use crate::services::{trip_planner::TripPlanner, trip_service::TripStore};

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: BTreeMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ServiceStatus {
    pub status: String,
    pub details: Option<String>,
}

impl ServiceStatus {
    fn new(status: &str, details: impl Into<String>) -> Self {
        Self {
            status: status.to_string(),
            details: Some(details.into()),
        }
    }
}

/*
    /health
*/
pub async fn health_check(
    store: web::Data<TripStore>,
    planner: web::Data<TripPlanner>,
) -> impl Responder {
    let mut services = BTreeMap::new();
    services.insert("mongodb".to_string(), check_mongodb(&store).await);
    services.insert("llm".to_string(), check_llm(&planner));
    services.insert("places".to_string(), check_places(&planner));

    let health = HealthStatus {
        status: overall_status(&services).to_string(),
        services,
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    HttpResponse::Ok().json(health)
}

/// "degraded" when any service reports an error. A disabled optional
/// service does not count.
pub fn overall_status(services: &BTreeMap<String, ServiceStatus>) -> &'static str {
    if services.values().any(|service| service.status == "error") {
        "degraded"
    } else {
        "ok"
    }
}

async fn check_mongodb(store: &TripStore) -> ServiceStatus {
    match store.ping().await {
        Ok(_) => ServiceStatus::new("ok", "Connected successfully to MongoDB"),
        Err(err) => {
            log::error!("MongoDB health check failed: err={}", err);
            ServiceStatus::new("error", format!("Failed to connect: {}", err))
        }
    }
}

fn check_llm(planner: &TripPlanner) -> ServiceStatus {
    let limits = planner.limits();
    ServiceStatus::new(
        "ok",
        format!(
            "Attempt limits: country={}, accommodations={}, transportation={}, activities={}, itinerary={}",
            limits.country,
            limits.accommodations,
            limits.transportation,
            limits.activities,
            limits.itinerary
        ),
    )
}

fn check_places(planner: &TripPlanner) -> ServiceStatus {
    if planner.places_enabled() {
        ServiceStatus::new("ok", "Google Places photo lookups enabled")
    } else {
        ServiceStatus::new("disabled", "GOOGLE_MAPS_API_KEY not configured")
    }
}

use chrono::{DateTime, Utc};
use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTrip {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: i64,
    #[serde(default)]
    pub trip_id: String,
    #[serde(default)]
    pub trip_data: serde_json::Value,
    // Older documents in the collection were written without it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<bson::DateTime>,
}

/// Client-facing shape of a stored trip, with plain string ids and dates.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTripView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: i64,
    pub trip_id: String,
    pub trip_data: serde_json::Value,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<SavedTrip> for SavedTripView {
    fn from(trip: SavedTrip) -> Self {
        Self {
            id: trip.id.map(|id| id.to_hex()),
            user_id: trip.user_id,
            trip_id: trip.trip_id,
            trip_data: trip.trip_data,
            created_at: trip.created_at.map(|created_at| created_at.to_chrono()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreTripRequest {
    pub trip_data: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreTripResponse {
    pub message: String,
    pub trip_id: String,
}

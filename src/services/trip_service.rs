use futures::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime, Document},
    Client, Collection,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::models::saved_trip::SavedTrip;

const TRIP_COLLECTION: &str = "user_trip";

/// How many trips the "previous trips" view returns.
pub const PREVIOUS_TRIPS_LIMIT: i64 = 5;

/// Saved wizard results, one document per stored trip.
#[derive(Clone)]
pub struct TripStore {
    client: Arc<Client>,
    database: String,
}

impl TripStore {
    pub fn new(client: Arc<Client>, database: impl Into<String>) -> Self {
        Self {
            client,
            database: database.into(),
        }
    }

    fn collection(&self) -> Collection<SavedTrip> {
        self.client
            .database(&self.database)
            .collection(TRIP_COLLECTION)
    }

    pub async fn store(
        &self,
        user_id: i64,
        trip_data: serde_json::Value,
    ) -> mongodb::error::Result<SavedTrip> {
        let mut trip = SavedTrip {
            id: None,
            user_id,
            trip_id: Uuid::new_v4().to_string(),
            trip_data,
            created_at: Some(DateTime::now()),
        };

        let result = self.collection().insert_one(&trip).await?;
        trip.id = result.inserted_id.as_object_id();
        Ok(trip)
    }

    /// Trips for one user, newest first.
    pub async fn list_for_user(
        &self,
        user_id: i64,
        limit: Option<i64>,
    ) -> mongodb::error::Result<Vec<SavedTrip>> {
        let collection = self.collection();
        let mut find = collection
            .find(doc! { "userId": user_id })
            .sort(doc! { "createdAt": -1, "_id": -1 });
        if let Some(limit) = limit {
            find = find.limit(limit);
        }

        find.await?.try_collect().await
    }

    pub async fn ping(&self) -> mongodb::error::Result<Document> {
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await
    }
}

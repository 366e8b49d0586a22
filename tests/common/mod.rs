#![allow(dead_code)]

use actix_web::{cookie::Cookie, web, App, HttpResponse, HttpServer};
use futures::future::BoxFuture;
use serde_json::json;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use trip_planner_api::{
    config::AttemptLimits,
    db::mongo::create_mongo_client,
    middleware::auth::{SessionCookieConfig, AUTH_COOKIE},
    models::user::SessionUser,
    routes,
    services::{
        llm::{LlmError, Prompt, TextGenerator},
        places_service::PlacesService,
        traveler_profile::TravelerProfile,
        trip_planner::TripPlanner,
        trip_service::TripStore,
    },
};

/// Replays canned replies in order and records every prompt it receives.
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    prompts: Mutex<Vec<Prompt>>,
}

impl ScriptedGenerator {
    pub fn new(replies: Vec<Result<String, LlmError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(replies: &[&str]) -> Self {
        Self::new(replies.iter().map(|reply| Ok(reply.to_string())).collect())
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<Prompt> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

impl TextGenerator for ScriptedGenerator {
    fn generate<'a>(&'a self, prompt: &'a Prompt) -> BoxFuture<'a, Result<String, LlmError>> {
        self.prompts.lock().unwrap().push(prompt.clone());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyOutput));
        Box::pin(async move { reply })
    }
}

pub const TEST_DATABASE: &str = "travel_test";

pub struct TestApp {
    pub generator: Arc<ScriptedGenerator>,
    pub limits: AttemptLimits,
    pub client: Arc<mongodb::Client>,
    store: TripStore,
    places: Option<PlacesService>,
}

impl TestApp {
    pub async fn new(generator: ScriptedGenerator) -> Self {
        Self::with_limits(generator, AttemptLimits::default()).await
    }

    pub async fn with_limits(generator: ScriptedGenerator, limits: AttemptLimits) -> Self {
        // The driver connects lazily; these apps never reach the database.
        let client = mongodb::Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        Self::from_client(generator, limits, Arc::new(client))
    }

    /// App backed by the MongoDB at `MONGODB_URI`, or `None` when it is not set.
    pub async fn connected(generator: ScriptedGenerator) -> Option<Self> {
        let mongo_uri = std::env::var("MONGODB_URI").ok()?;
        let client = create_mongo_client(&mongo_uri, TEST_DATABASE).await.unwrap();
        Some(Self::from_client(generator, AttemptLimits::default(), client))
    }

    fn from_client(
        generator: ScriptedGenerator,
        limits: AttemptLimits,
        client: Arc<mongodb::Client>,
    ) -> Self {
        Self {
            generator: Arc::new(generator),
            limits,
            store: TripStore::new(client.clone(), TEST_DATABASE),
            client,
            places: None,
        }
    }

    pub fn with_places(mut self, places: PlacesService) -> Self {
        self.places = Some(places);
        self
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let generator: Arc<dyn TextGenerator> = self.generator.clone();
        let mut planner = TripPlanner::new(generator, test_profile(), self.limits);
        if let Some(places) = &self.places {
            planner = planner.with_places(places.clone());
        }

        App::new()
            .app_data(web::Data::new(planner))
            .app_data(web::Data::new(self.store.clone()))
            .app_data(web::Data::new(SessionCookieConfig::default()))
            .configure(routes::configure)
    }
}

pub fn test_profile() -> TravelerProfile {
    TravelerProfile {
        most_visited_country: "USA".to_string(),
        tourism_places: vec!["Louvre Museum".to_string()],
        preferred_transportation: "Uber".to_string(),
        favorite_food: "Sushi Bar".to_string(),
    }
}

pub fn test_user() -> SessionUser {
    SessionUser {
        id: 1,
        email: "test@example.com".to_string(),
        name: "Test User".to_string(),
    }
}

/// The session cookie as a client holds it. The test request percent-encodes it on the way out.
pub fn session_cookie() -> Cookie<'static> {
    session_cookie_for(&test_user())
}

pub fn session_cookie_for(user: &SessionUser) -> Cookie<'static> {
    Cookie::new(AUTH_COOKIE, serde_json::to_string(user).unwrap())
}

/// Serves `/textsearch/json` like the Places API. Every query matches one
/// place whose photo reference is the query with spaces turned into dashes.
/// When `healthy` is false every search fails with a 500.
pub fn spawn_places_stub(healthy: bool) -> String {
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(healthy))
            .route("/textsearch/json", web::get().to(stub_text_search))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    actix_rt::spawn(server.run());
    format!("http://{}", addr)
}

async fn stub_text_search(
    healthy: web::Data<bool>,
    params: web::Query<HashMap<String, String>>,
) -> HttpResponse {
    if !**healthy {
        return HttpResponse::InternalServerError().body("stub failure");
    }

    let reference = params
        .get("query")
        .map(|query| query.replace(' ', "-"))
        .unwrap_or_default();

    HttpResponse::Ok().json(json!({
        "status": "OK",
        "results": [{ "name": params.get("query"), "photos": [{ "photo_reference": reference }] }]
    }))
}

pub fn stub_places(base_url: &str) -> PlacesService {
    PlacesService::new("test-key".to_string())
        .unwrap()
        .with_base_url(base_url)
}

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use trip_planner_api::{
    config::AppConfig,
    db,
    middleware::auth::SessionCookieConfig,
    routes,
    services::{
        llm::{OpenAiClient, TextGenerator},
        places_service::PlacesService,
        traveler_profile::TravelerProfile,
        trip_planner::TripPlanner,
        trip_service::TripStore,
    },
};

fn startup_error(err: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err.to_string())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(startup_error)?;
    log::info!(
        "starting trip planner: environment={}, model={}",
        config.environment,
        config.llm.model
    );

    let client = db::mongo::create_mongo_client(&config.mongo_uri, &config.mongo_database)
        .await
        .map_err(startup_error)?;
    let store = web::Data::new(TripStore::new(client, config.mongo_database.clone()));

    let generator: Arc<dyn TextGenerator> =
        Arc::new(OpenAiClient::new(&config.llm).map_err(startup_error)?);
    let profile = TravelerProfile::sample().map_err(startup_error)?;

    let mut planner = TripPlanner::new(generator, profile, config.attempts);
    match &config.google_maps_api_key {
        Some(key) => {
            let mut places = PlacesService::new(key.clone()).map_err(startup_error)?;
            if let Some(base_url) = &config.places_base_url {
                places = places.with_base_url(base_url.clone());
            }
            planner = planner.with_places(places);
        }
        None => log::warn!("GOOGLE_MAPS_API_KEY not set, photo lookups disabled"),
    }
    let planner = web::Data::new(planner);

    let cookie_config = web::Data::new(SessionCookieConfig {
        secure: config.is_production(),
    });
    let cors_allow_any = config.cors_allow_any;

    log::info!("binding HTTP server: host={}, port={}", config.host, config.port);

    HttpServer::new(move || {
        let cors = if cors_allow_any {
            Cors::permissive()
        } else {
            Cors::default()
        };

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(planner.clone())
            .app_data(store.clone())
            .app_data(cookie_config.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

pub mod account_service;
pub mod llm;
pub mod places_service;
pub mod traveler_profile;
pub mod trip_planner;
pub mod trip_service;

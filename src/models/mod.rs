pub mod accommodation;
pub mod activity;
pub mod destination;
pub mod itinerary;
pub mod lenient;
pub mod saved_trip;
pub mod transportation;
pub mod trip;
pub mod user;

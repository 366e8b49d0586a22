use futures::future::join_all;
use std::fmt;
use std::sync::Arc;

use crate::config::AttemptLimits;
use crate::models::{
    accommodation::AccommodationPlan,
    activity::ActivityPlan,
    destination::Destination,
    itinerary::ItinerarySummary,
    transportation::TransportationPlan,
    trip::{
        AccommodationRequest, ActivitiesRequest, DateRangeError, ItineraryRequest,
        TransportationRequest, TripPreferences,
    },
};
use crate::services::llm::{complete_json, prompts, CompletionError, RetryPolicy, TextGenerator};
use crate::services::places_service::{
    PlacesService, ACCOMMODATION_PHOTO_WIDTH, DESTINATION_PHOTO_WIDTH,
};
use crate::services::traveler_profile::TravelerProfile;

#[derive(Debug)]
pub enum PlannerError {
    InvalidRequest(String),
    Completion(CompletionError),
    MissingField(&'static str),
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            PlannerError::Completion(err) => write!(f, "Completion failed: {}", err),
            PlannerError::MissingField(field) => {
                write!(f, "Generated result is missing {}", field)
            }
        }
    }
}

impl std::error::Error for PlannerError {}

impl From<CompletionError> for PlannerError {
    fn from(err: CompletionError) -> Self {
        PlannerError::Completion(err)
    }
}

impl From<DateRangeError> for PlannerError {
    fn from(err: DateRangeError) -> Self {
        PlannerError::InvalidRequest(err.to_string())
    }
}

/// Runs each wizard step against the text generator.
pub struct TripPlanner {
    generator: Arc<dyn TextGenerator>,
    places: Option<PlacesService>,
    profile: TravelerProfile,
    limits: AttemptLimits,
}

impl TripPlanner {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        profile: TravelerProfile,
        limits: AttemptLimits,
    ) -> Self {
        Self {
            generator,
            places: None,
            profile,
            limits,
        }
    }

    pub fn with_places(mut self, places: PlacesService) -> Self {
        self.places = Some(places);
        self
    }

    pub fn places_enabled(&self) -> bool {
        self.places.is_some()
    }

    pub fn limits(&self) -> AttemptLimits {
        self.limits
    }

    pub async fn suggest_destination(
        &self,
        trip: &TripPreferences,
    ) -> Result<Destination, PlannerError> {
        trip.nights()?;

        let prompt = prompts::country_prompt(trip, &self.profile);
        let mut destination: Destination = complete_json(
            self.generator.as_ref(),
            &prompt,
            RetryPolicy::attempts(self.limits.country),
        )
        .await?;

        if !destination.has_name() {
            return Err(PlannerError::MissingField("name"));
        }

        if let Some(places) = &self.places {
            match places
                .find_photo_url(&destination.name, DESTINATION_PHOTO_WIDTH)
                .await
            {
                Ok(url) => destination.image_url = url,
                Err(err) => log::warn!(
                    "destination photo lookup failed: destination={}, err={}",
                    destination.name,
                    err
                ),
            }
        }

        Ok(destination)
    }

    pub async fn suggest_accommodations(
        &self,
        request: &AccommodationRequest,
    ) -> Result<AccommodationPlan, PlannerError> {
        let nights = request.trip.nights()?;

        let prompt = prompts::accommodation_prompt(request, nights);
        let mut plan: AccommodationPlan = complete_json(
            self.generator.as_ref(),
            &prompt,
            RetryPolicy::attempts(self.limits.accommodations),
        )
        .await?;

        if plan.total_nights.is_none() {
            plan.total_nights = nights;
        }

        if let Some(places) = &self.places {
            let lookups = plan.options.iter().map(|option| {
                let query = format!("{} {}", option.name, request.country);
                async move { places.find_photo_url(&query, ACCOMMODATION_PHOTO_WIDTH).await }
            });
            let photos = join_all(lookups).await;

            for (option, photo) in plan.options.iter_mut().zip(photos) {
                match photo {
                    Ok(url) => option.image_url = url,
                    Err(err) => log::warn!(
                        "accommodation photo lookup failed: name={}, err={}",
                        option.name,
                        err
                    ),
                }
            }
        }

        Ok(plan)
    }

    pub async fn suggest_transportation(
        &self,
        request: &TransportationRequest,
    ) -> Result<TransportationPlan, PlannerError> {
        request.trip.nights()?;

        let prompt = prompts::transportation_prompt(request, &self.profile);
        let plan = complete_json(
            self.generator.as_ref(),
            &prompt,
            RetryPolicy::attempts(self.limits.transportation),
        )
        .await?;
        Ok(plan)
    }

    pub async fn plan_activities(
        &self,
        request: &ActivitiesRequest,
    ) -> Result<ActivityPlan, PlannerError> {
        let prompt = prompts::activities_prompt(request, &self.profile);
        let plan: ActivityPlan = complete_json(
            self.generator.as_ref(),
            &prompt,
            RetryPolicy::attempts(self.limits.activities),
        )
        .await?;

        if plan.total_activities as usize != plan.activity_count() {
            log::debug!(
                "activity total differs from listed activities: reported={}, listed={}",
                plan.total_activities,
                plan.activity_count()
            );
        }

        Ok(plan)
    }

    pub async fn summarize_itinerary(
        &self,
        request: &ItineraryRequest,
    ) -> Result<ItinerarySummary, PlannerError> {
        request.trip.nights()?;

        let prompt = prompts::itinerary_prompt(request);
        let summary = complete_json(
            self.generator.as_ref(),
            &prompt,
            RetryPolicy::attempts(self.limits.itinerary),
        )
        .await?;
        Ok(summary)
    }
}

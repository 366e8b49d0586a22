//! Prompt text for each generation step of the trip wizard.

use super::client::{Prompt, WebSearch};
use crate::models::trip::{
    AccommodationRequest, ActivitiesRequest, ItineraryRequest, TransportationRequest,
    TripPreferences,
};
use crate::services::traveler_profile::TravelerProfile;

const ACTIVITY_MAX_OUTPUT_TOKENS: u32 = 5000;

const JSON_ONLY: &str = "Return only the JSON object. Do not wrap it in markdown fences, \
do not add commentary before or after it, and make sure it is valid JSON.";

const ACTIVITY_TYPES: &str = "\"sightseeing\", \"cultural\", \"dining\", \"outdoor\", \"beach\", \
\"shopping\", \"entertainment\", \"music\", \"art\", \"nature\", \"travel\"";

pub fn country_prompt(trip: &TripPreferences, profile: &TravelerProfile) -> Prompt {
    let previous = if trip.previous_trips.is_empty() {
        "none".to_string()
    } else {
        trip.previous_trips.join(", ")
    };

    let input = format!(
        r#"Recommend one real country to travel to for this trip.

Trip:
- Budget: {budget}
- Purpose: {purpose}
- Start date: {start}
- End date: {end}
- Most visited country so far: {visited}
- Countries from previous trips (suggest something different): {previous}

Answer with one country using exactly this JSON structure:
{{"name": "Country Name", "description": "Description of the country", "highlights": ["Highlight 1", "Highlight 2"], "bestTimeToVisit": "Best time to visit", "weather": "Weather during the trip", "currency": "Currency used", "language": "Language spoken", "safetyInfo": "Safety information", "visaRequirements": "Visa requirements"}}

The information must be accurate and up to date. {json_only}"#,
        budget = trip.budget,
        purpose = trip.purpose,
        start = trip.start_date,
        end = trip.end_date,
        visited = profile.most_visited_country,
        previous = previous,
        json_only = JSON_ONLY,
    );

    Prompt::new(input).with_web_search(WebSearch::Required)
}

pub fn accommodation_prompt(request: &AccommodationRequest, nights: Option<u32>) -> Prompt {
    let trip = &request.trip;
    let destination = &request.country;
    let nights_value = nights
        .map(|n| n.to_string())
        .unwrap_or_else(|| "<number of nights between the dates>".to_string());

    let input = format!(
        r#"You are a travel API that returns structured JSON only. Suggest places to stay in {destination}.

Trip:
- Destination: {destination}
- Check-in: {start}
- Check-out: {end}
- Total budget: {budget}
- Purpose: {purpose}

Use this JSON structure:
{{
  "destination": "{destination}",
  "totalNights": {nights},
  "checkIn": "{start}",
  "checkOut": "{end}",
  "recommendedOption": 1,
  "options": [
    {{
      "id": 1,
      "name": "Hotel Name",
      "description": "What makes this place worth staying at",
      "pricePerNight": 200,
      "totalPrice": 1000,
      "rating": 4.7,
      "location": "Neighborhood, City",
      "amenities": ["Free WiFi", "Pool"],
      "roomType": "Deluxe Room",
      "cancellationPolicy": "Free cancellation until 3 days before check-in",
      "distance": "1.5 miles from city center",
      "promoAvailable": true,
      "savings": 150,
      "highlights": ["Excellent location", "Great value"]
    }}
  ]
}}

Requirements:
1. Give 3 or 4 real, well-known options at different price points, all within the budget of {budget}.
2. totalPrice is pricePerNight times the number of nights.
3. Use real neighborhood names for location.
4. At least one option has promoAvailable set to true with a savings amount.
5. Match the purpose: business trips near business districts, family trips family-friendly, romantic trips with couples amenities or views, leisure and adventure trips near major attractions.
6. recommendedOption is the id of the best fit.
{json_only}"#,
        destination = destination,
        start = trip.start_date,
        end = trip.end_date,
        budget = trip.budget,
        purpose = trip.purpose,
        nights = nights_value,
        json_only = JSON_ONLY,
    );

    Prompt::new(input).with_web_search(WebSearch::Required)
}

pub fn transportation_prompt(request: &TransportationRequest, profile: &TravelerProfile) -> Prompt {
    let trip = &request.trip;
    let hotel = request
        .hotel_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or("not chosen yet");

    let input = format!(
        r#"You are a travel API that returns structured JSON only. Suggest ways to travel to {destination}. This traveler usually gets around with {transport}.

Trip:
- Destination: {destination}
- Arrival date: {start}
- Departure date: {end}
- Total budget: {budget}
- Purpose: {purpose}
- Accommodation: {hotel}

Use this JSON structure:
{{
  "destination": "{destination}",
  "arrivalDate": "{start}",
  "departureDate": "{end}",
  "recommendedOption": 1,
  "options": [
    {{
      "id": 1,
      "type": "flight",
      "name": "Direct Flight",
      "description": "Details of this option",
      "price": 1200,
      "duration": "14h 30m",
      "departureTime": "10:30 AM",
      "arrivalTime": "2:00 PM (+1)",
      "provider": "Airline or company name",
      "amenities": ["In-flight meals", "Wi-Fi"],
      "promoAvailable": true,
      "savings": 150,
      "highlights": ["Direct flight", "On-time performance"],
      "transfers": 0,
      "transferDetails": []
    }}
  ]
}}

Requirements:
1. Give 3 or 4 options with different trade-offs (direct or connecting, different carriers, combinations such as train plus flight).
2. Use real providers that serve the destination and transport that makes sense there (bullet trains in Japan, ferries for islands).
3. At least one option has promoAvailable set to true.
4. At least one option has transfers greater than 0 with transferDetails filled in.
5. Prices fit the budget and purpose.
6. recommendedOption is the id that best balances price, convenience and quality.
{json_only}"#,
        destination = request.destination,
        transport = profile.preferred_transportation,
        start = trip.start_date,
        end = trip.end_date,
        budget = trip.budget,
        purpose = trip.purpose,
        hotel = hotel,
        json_only = JSON_ONLY,
    );

    Prompt::new(input).with_web_search(WebSearch::Allowed)
}

pub fn activities_prompt(request: &ActivitiesRequest, profile: &TravelerProfile) -> Prompt {
    let input = format!(
        r#"You are a travel API that returns structured JSON only. Plan day-by-day activities for this trip.

Trip:
- Destination: {destination}
- Accommodation: {hotel} in {hotel_location}
- Arrival time: {arrival}
- Start date: {start}
- End date: {end}
- Budget: {budget}

Traveler:
- Enjoys places like: {tourism}
- Likes to eat at: {food}

Use this JSON structure:
{{
  "destination": "{destination}",
  "startDate": "{start}",
  "endDate": "{end}",
  "totalActivities": 0,
  "totalCost": 0,
  "overview": "Personal overview of the plan",
  "days": [
    {{
      "date": "YYYY-MM-DD",
      "dayNumber": 1,
      "activities": [
        {{
          "id": 1,
          "name": "Activity name",
          "type": "sightseeing",
          "description": "25 to 40 words about the activity",
          "location": "Where in the destination",
          "startTime": "HH:MM",
          "endTime": "HH:MM",
          "cost": 0,
          "currency": "USD",
          "bookingRequired": false,
          "bookingUrl": "only when bookingRequired is true",
          "highlights": ["highlight 1", "highlight 2"],
          "promoAvailable": false,
          "savings": 0
        }}
      ]
    }}
  ]
}}

Requirements:
1. 2 to 4 activities per day in a sensible order, grouped by area to limit travel.
2. First day activities start after {arrival}; leave room for departure on the last day.
3. Respect opening hours and travel time between activities.
4. Include at least one free activity per day and keep the total within {budget}.
5. Mix popular sights with less known local experiences; dining uses real restaurants.
6. At least 2 activities have promoAvailable set to true.
7. type is one of {types}.
8. totalActivities and totalCost match the activities listed.
{json_only}"#,
        destination = request.destination,
        hotel = request.accommodation_name,
        hotel_location = request.accommodation_location,
        arrival = request.arrival_time,
        start = request.start_date,
        end = request.end_date,
        budget = request.budget,
        tourism = profile.tourism_summary(),
        food = profile.favorite_food,
        types = ACTIVITY_TYPES,
        json_only = JSON_ONLY,
    );

    Prompt::new(input)
        .with_web_search(WebSearch::Required)
        .with_max_output_tokens(ACTIVITY_MAX_OUTPUT_TOKENS)
}

pub fn itinerary_prompt(request: &ItineraryRequest) -> Prompt {
    let trip = &request.trip;
    let accommodation = request.accommodation.as_deref().unwrap_or("not chosen yet");
    let transportation = request.transportation.as_deref().unwrap_or("not chosen yet");

    let input = format!(
        r#"You are a travel API that returns structured JSON only. Summarize a complete itinerary for this trip.

Trip:
- Destination: {destination}
- Start date: {start}
- End date: {end}
- Budget: {budget}
- Purpose: {purpose}
- Accommodation: {accommodation}
- Transportation: {transportation}

Use this JSON structure:
{{
  "destination": "{destination}",
  "activities": ["Short activity description"],
  "accommodations": ["Where to stay and for how many nights"],
  "transportation": ["How to get there and around"],
  "totalCost": 0,
  "recommendations": ["Practical tip"]
}}

totalCost is the estimated cost of the whole trip and must not exceed {budget}.
{json_only}"#,
        destination = request.destination,
        start = trip.start_date,
        end = trip.end_date,
        budget = trip.budget,
        purpose = trip.purpose,
        accommodation = accommodation,
        transportation = transportation,
        json_only = JSON_ONLY,
    );

    Prompt::new(input)
}

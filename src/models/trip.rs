use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A budget exactly as the client sent it, number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Text(String::new())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(n) if n.fract() == 0.0 => write!(f, "{:.0}", n),
            Amount::Number(n) => write!(f, "{}", n),
            Amount::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPreferences {
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub budget: Amount,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub previous_trips: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum DateRangeError {
    EndBeforeStart,
}

impl fmt::Display for DateRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRangeError::EndBeforeStart => write!(f, "endDate must not be before startDate"),
        }
    }
}

impl TripPreferences {
    /// Nights between the two dates, when both are ISO `YYYY-MM-DD`.
    ///
    /// Dates in any other format are passed to the model untouched, so an
    /// unparsable pair is `Ok(None)` rather than an error.
    pub fn nights(&self) -> Result<Option<u32>, DateRangeError> {
        let start = NaiveDate::parse_from_str(self.start_date.trim(), "%Y-%m-%d");
        let end = NaiveDate::parse_from_str(self.end_date.trim(), "%Y-%m-%d");
        match (start, end) {
            (Ok(start), Ok(end)) if end < start => Err(DateRangeError::EndBeforeStart),
            (Ok(start), Ok(end)) => Ok(Some((end - start).num_days() as u32)),
            _ => Ok(None),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationRequest {
    #[serde(flatten)]
    pub trip: TripPreferences,
    #[serde(alias = "destination")]
    pub country: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportationRequest {
    #[serde(flatten)]
    pub trip: TripPreferences,
    #[serde(alias = "country")]
    pub destination: String,
    #[serde(default, alias = "accommodationName")]
    pub hotel_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitiesRequest {
    pub destination: String,
    #[serde(default, alias = "arrivaltime")]
    pub arrival_time: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub budget: Amount,
    #[serde(default, alias = "accomodationName")]
    pub accommodation_name: String,
    #[serde(default, alias = "accomodationLocation")]
    pub accommodation_location: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRequest {
    #[serde(flatten)]
    pub trip: TripPreferences,
    pub destination: String,
    #[serde(default)]
    pub accommodation: Option<String>,
    #[serde(default)]
    pub transportation: Option<String>,
}

use serde::{Deserialize, Serialize};

use super::lenient;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationPlan {
    #[serde(default)]
    pub destination: String,
    #[serde(deserialize_with = "lenient::optional_rounded_u32", default)]
    pub total_nights: Option<u32>,
    #[serde(default)]
    pub check_in: String,
    #[serde(default)]
    pub check_out: String,
    #[serde(deserialize_with = "lenient::optional_rounded_u32", default)]
    pub recommended_option: Option<u32>,
    pub options: Vec<AccommodationOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationOption {
    #[serde(deserialize_with = "lenient::rounded_u32", default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "lenient::amount", default)]
    pub price_per_night: f64,
    #[serde(deserialize_with = "lenient::amount", default)]
    pub total_price: f64,
    #[serde(deserialize_with = "lenient::optional_amount", default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub room_type: String,
    #[serde(default)]
    pub cancellation_policy: String,
    #[serde(default)]
    pub distance: String,
    #[serde(deserialize_with = "lenient::flag", default)]
    pub promo_available: bool,
    #[serde(deserialize_with = "lenient::optional_amount", default)]
    pub savings: Option<f64>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

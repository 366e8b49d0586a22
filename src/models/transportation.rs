use serde::{Deserialize, Serialize};

use super::lenient;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportationPlan {
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub arrival_date: String,
    #[serde(default)]
    pub departure_date: String,
    #[serde(deserialize_with = "lenient::optional_rounded_u32", default)]
    pub recommended_option: Option<u32>,
    pub options: Vec<TransportationOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportationOption {
    #[serde(deserialize_with = "lenient::rounded_u32", default)]
    pub id: u32,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "lenient::amount", default)]
    pub price: f64,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub departure_time: String,
    #[serde(default)]
    pub arrival_time: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(deserialize_with = "lenient::flag", default)]
    pub promo_available: bool,
    #[serde(deserialize_with = "lenient::optional_amount", default)]
    pub savings: Option<f64>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(deserialize_with = "lenient::rounded_u32", default)]
    pub transfers: u32,
    #[serde(default)]
    pub transfer_details: Vec<String>,
}

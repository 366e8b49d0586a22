use serde::{Deserialize, Serialize};

use super::lenient;

/// Trip summary shown on the last wizard step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItinerarySummary {
    pub destination: String,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub accommodations: Vec<String>,
    #[serde(default)]
    pub transportation: Vec<String>,
    #[serde(deserialize_with = "lenient::amount", default)]
    pub total_cost: f64,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

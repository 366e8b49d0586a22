use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub best_time_to_visit: String,
    #[serde(default)]
    pub weather: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub safety_info: String,
    #[serde(default)]
    pub visa_requirements: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Destination {
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

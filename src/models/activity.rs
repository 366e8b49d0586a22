use serde::{Deserialize, Serialize};

use super::lenient;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPlan {
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(deserialize_with = "lenient::rounded_u32", default)]
    pub total_activities: u32,
    #[serde(deserialize_with = "lenient::amount", default)]
    pub total_cost: f64,
    #[serde(default)]
    pub overview: String,
    pub days: Vec<ActivityDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDay {
    #[serde(default)]
    pub date: String,
    #[serde(deserialize_with = "lenient::rounded_u32", default)]
    pub day_number: u32,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(deserialize_with = "lenient::rounded_u32", default)]
    pub id: u32,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(deserialize_with = "lenient::amount", default)]
    pub cost: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(deserialize_with = "lenient::flag", default)]
    pub booking_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_url: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(deserialize_with = "lenient::flag", default)]
    pub promo_available: bool,
    #[serde(deserialize_with = "lenient::optional_amount", default)]
    pub savings: Option<f64>,
}

impl ActivityPlan {
    pub fn activity_count(&self) -> usize {
        self.days.iter().map(|day| day.activities.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_activity_count_and_type_field() {
        let plan: ActivityPlan = serde_json::from_value(json!({
            "destination": "Greece",
            "totalActivities": 3,
            "totalCost": "240",
            "days": [
                {
                    "date": "2025-07-01",
                    "dayNumber": 1,
                    "activities": [
                        { "id": 1, "name": "Acropolis tour", "type": "cultural", "cost": 40, "bookingRequired": true, "bookingUrl": "https://example.com" },
                        { "id": 2, "name": "Plaka dinner", "type": "dining", "cost": 60 }
                    ]
                },
                {
                    "date": "2025-07-02",
                    "dayNumber": 2,
                    "activities": [
                        { "id": 3, "name": "Ferry to Aegina", "type": "travel", "cost": 140 }
                    ]
                }
            ]
        }))
        .unwrap();

        assert_eq!(plan.activity_count(), 3);
        assert_eq!(plan.total_cost, 240.0);
        assert_eq!(plan.days[0].activities[0].kind, "cultural");

        let value = serde_json::to_value(&plan.days[0].activities[1]).unwrap();
        assert_eq!(value["type"], "dining");
        assert!(value.get("bookingUrl").is_none());
    }
}

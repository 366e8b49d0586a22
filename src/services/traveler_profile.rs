use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const SAMPLE_TRANSACTIONS: &str = include_str!("../../data/sample_transactions.json");
const TOURISM_KEYWORDS: [&str; 5] = ["beach", "museum", "hiking", "nature", "nightlife"];
const NO_DATA: &str = "No data available";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Transaction {
    pub country: String,
    pub category: String,
    pub merchant: String,
}

/// Facts about a traveler derived from card spending, used to personalize prompts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelerProfile {
    pub most_visited_country: String,
    pub tourism_places: Vec<String>,
    pub preferred_transportation: String,
    pub favorite_food: String,
}

impl TravelerProfile {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let countries = transactions.iter().map(|t| t.country.as_str());

        let tourism_places = transactions
            .iter()
            .filter(|t| {
                let merchant = t.merchant.to_lowercase();
                TOURISM_KEYWORDS
                    .iter()
                    .any(|keyword| merchant.contains(keyword))
            })
            .map(|t| t.merchant.clone())
            .collect();

        Self {
            most_visited_country: most_frequent(countries).unwrap_or_else(|| NO_DATA.to_string()),
            tourism_places,
            preferred_transportation: most_frequent(merchants_in(transactions, "Transportation"))
                .unwrap_or_else(|| NO_DATA.to_string()),
            favorite_food: most_frequent(merchants_in(transactions, "Food"))
                .unwrap_or_else(|| NO_DATA.to_string()),
        }
    }

    /// Profile built from the bundled sample spending history.
    pub fn sample() -> Result<Self, serde_json::Error> {
        let transactions: Vec<Transaction> = serde_json::from_str(SAMPLE_TRANSACTIONS)?;
        Ok(Self::from_transactions(&transactions))
    }

    pub fn tourism_summary(&self) -> String {
        if self.tourism_places.is_empty() {
            NO_DATA.to_string()
        } else {
            self.tourism_places.join(", ")
        }
    }
}

fn merchants_in<'a>(
    transactions: &'a [Transaction],
    category: &'a str,
) -> impl Iterator<Item = &'a str> {
    transactions
        .iter()
        .filter(move |t| t.category == category)
        .map(|t| t.merchant.as_str())
}

/// Most frequent value. On a tie, the value first seen later wins.
fn most_frequent<'a>(items: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for item in items {
        let count = counts.entry(item).or_insert(0);
        if *count == 0 {
            order.push(item);
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for item in order {
        let count = counts[item];
        match best {
            Some((_, best_count)) if best_count > count => {}
            _ => best = Some((item, count)),
        }
    }
    best.map(|(item, _)| item.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(country: &str, category: &str, merchant: &str) -> Transaction {
        Transaction {
            country: country.to_string(),
            category: category.to_string(),
            merchant: merchant.to_string(),
        }
    }

    #[test]
    fn test_most_frequent_tie_goes_to_later_value() {
        let items = ["Uber", "Taxi", "Uber", "Taxi", "Bus"];
        assert_eq!(most_frequent(items.into_iter()), Some("Taxi".to_string()));
        assert_eq!(most_frequent(std::iter::empty()), None);
    }

    #[test]
    fn test_profile_from_transactions() {
        let transactions = vec![
            tx("Japan", "Food", "Sushi Bar"),
            tx("Japan", "Transportation", "Shinkansen"),
            tx("Japan", "Tourism", "Tokyo National Museum"),
            tx("Brazil", "Tourism", "Copacabana Beach"),
            tx("Japan", "Food", "Sushi Bar"),
            tx("Brazil", "Food", "Churrascaria"),
        ];

        let profile = TravelerProfile::from_transactions(&transactions);
        assert_eq!(profile.most_visited_country, "Japan");
        assert_eq!(profile.preferred_transportation, "Shinkansen");
        assert_eq!(profile.favorite_food, "Sushi Bar");
        assert_eq!(
            profile.tourism_places,
            vec!["Tokyo National Museum", "Copacabana Beach"]
        );
        assert_eq!(
            profile.tourism_summary(),
            "Tokyo National Museum, Copacabana Beach"
        );
    }

    #[test]
    fn test_empty_history() {
        let profile = TravelerProfile::from_transactions(&[]);
        assert_eq!(profile.most_visited_country, NO_DATA);
        assert_eq!(profile.preferred_transportation, NO_DATA);
        assert_eq!(profile.tourism_summary(), NO_DATA);
    }

    #[test]
    fn test_sample_history() {
        let profile = TravelerProfile::sample().unwrap();
        assert_eq!(profile.most_visited_country, "USA");
        assert_eq!(profile.preferred_transportation, "Shinkansen");
        assert_eq!(profile.favorite_food, "Chipotle");
        assert!(profile
            .tourism_places
            .contains(&"Mount Fuji Hiking Trail".to_string()));
    }
}

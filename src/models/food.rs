use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A food with its per-serving cost and nutrient content.
///
/// Nutrients a food does not list contribute nothing to that nutrient's total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Cost")]
    pub cost: f64,

    #[serde(rename = "Nutrients", default)]
    pub nutrients: BTreeMap<String, f64>,
}

impl Food {
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            cost,
            nutrients: BTreeMap::new(),
        }
    }

    /// Builder-style helper used when assembling food tables in code.
    pub fn with_nutrient(mut self, nutrient: impl Into<String>, amount: f64) -> Self {
        self.nutrients.insert(nutrient.into(), amount);
        self
    }

    /// Amount of a nutrient per serving (0 when not listed).
    #[inline]
    pub fn amount(&self, nutrient: &str) -> f64 {
        self.nutrients.get(nutrient).copied().unwrap_or(0.0)
    }

    /// Positive finite cost and non-negative finite nutrient amounts.
    pub fn is_valid(&self) -> bool {
        self.cost.is_finite()
            && self.cost > 0.0
            && self
                .nutrients
                .values()
                .all(|amount| amount.is_finite() && *amount >= 0.0)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        let nutrients: Vec<String> = self
            .nutrients
            .iter()
            .map(|(n, a)| format!("{}:{}", n, a))
            .collect();
        format!("{}: cost {} [{}]", self.name, self.cost, nutrients.join(" "))
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for Food {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}

impl Eq for Food {}

impl std::hash::Hash for Food {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.to_lowercase().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> Food {
        Food::new("Oats", 0.4)
            .with_nutrient("Calories", 389.0)
            .with_nutrient("Protein", 16.9)
    }

    #[test]
    fn test_amount_defaults_to_zero() {
        let food = sample_food();
        assert!((food.amount("Calories") - 389.0).abs() < 0.001);
        assert_eq!(food.amount("Salt"), 0.0);
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_food().is_valid());

        let mut free = sample_food();
        free.cost = 0.0;
        assert!(!free.is_valid());

        let negative = sample_food().with_nutrient("Fat", -1.0);
        assert!(!negative.is_valid());
    }

    #[test]
    fn test_equality_case_insensitive() {
        let food1 = sample_food();
        let mut food2 = sample_food();
        food2.name = "OATS".to_string();
        assert_eq!(food1, food2);
    }

    #[test]
    fn test_deserialize_without_nutrients() {
        let food: Food = serde_json::from_str(r#"{"Name": "Water", "Cost": 0.01}"#).unwrap();
        assert!(food.nutrients.is_empty());
        assert!(food.is_valid());
    }
}

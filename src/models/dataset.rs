use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{DietError, Result};
use crate::models::{Bounds, Day, Food, Requirement};

/// Characters that delimit indices in variable and row names.
const RESERVED_NAME_CHARS: [char; 3] = ['[', ']', ','];

fn check_name(kind: &str, name: &str) -> Result<()> {
    if name.contains(RESERVED_NAME_CHARS) {
        return Err(DietError::InvalidParameter(format!(
            "{} name '{}' may not contain '[', ']' or ','",
            kind, name
        )));
    }
    Ok(())
}

/// Index sets and parameter tables of a diet model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DietData {
    #[serde(rename = "Foods", default)]
    pub foods: Vec<Food>,

    #[serde(rename = "Nutrients", default)]
    pub nutrients: Vec<String>,

    #[serde(rename = "Days", default)]
    pub days: Vec<Day>,

    /// Nutrients without an entry use `Requirement::default()`.
    #[serde(rename = "Requirements", default)]
    pub requirements: BTreeMap<String, Requirement>,
}

impl DietData {
    /// Requirement of a nutrient, falling back to 0..inf for both day kinds.
    pub fn requirement(&self, nutrient: &str) -> Requirement {
        self.requirements
            .get(nutrient)
            .copied()
            .unwrap_or_default()
    }

    pub fn food(&self, name: &str) -> Option<&Food> {
        let key = name.to_lowercase();
        self.foods.iter().find(|f| f.key() == key)
    }

    pub fn day(&self, name: &str) -> Option<&Day> {
        let key = name.to_lowercase();
        self.days.iter().find(|d| d.name.to_lowercase() == key)
    }

    pub fn training_days(&self) -> Vec<&Day> {
        self.days.iter().filter(|d| d.training).collect()
    }

    /// Check parameter domains and that every reference names a declared element.
    ///
    /// Bound consistency (min <= max) is not checked here; see `inconsistent_bounds`.
    pub fn validate(&self) -> Result<()> {
        let declared: HashSet<&str> = self.nutrients.iter().map(String::as_str).collect();
        if declared.len() != self.nutrients.len() {
            return Err(DietError::InvalidParameter(
                "duplicate nutrient in Nutrients".to_string(),
            ));
        }

        for nutrient in &self.nutrients {
            check_name("nutrient", nutrient)?;
        }

        let mut seen_foods = HashSet::new();
        for food in &self.foods {
            check_name("food", &food.name)?;
            if !seen_foods.insert(food.key()) {
                return Err(DietError::InvalidParameter(format!(
                    "duplicate food {}",
                    food.name
                )));
            }
            if !food.is_valid() {
                return Err(DietError::InvalidParameter(format!(
                    "food {} needs a positive cost and non-negative amounts",
                    food.name
                )));
            }
            if let Some(unknown) = food.nutrients.keys().find(|n| !declared.contains(n.as_str())) {
                return Err(DietError::UnknownNutrient(unknown.clone()));
            }
        }

        let mut seen_days = HashSet::new();
        for day in &self.days {
            check_name("day", &day.name)?;
            if !seen_days.insert(day.name.to_lowercase()) {
                return Err(DietError::InvalidParameter(format!(
                    "duplicate day {}",
                    day.name
                )));
            }
        }

        for (nutrient, req) in &self.requirements {
            if !declared.contains(nutrient.as_str()) {
                return Err(DietError::UnknownNutrient(nutrient.clone()));
            }
            if !req.rest.is_valid() || !req.training.is_valid() {
                return Err(DietError::InvalidParameter(format!(
                    "bounds of {} must be non-negative",
                    nutrient
                )));
            }
        }

        Ok(())
    }

    /// Nutrients whose rest or training interval is empty, with the offending bounds.
    pub fn inconsistent_bounds(&self) -> Vec<(String, bool, Bounds)> {
        let mut found = Vec::new();
        for nutrient in &self.nutrients {
            let req = self.requirement(nutrient);
            for training in [false, true] {
                let bounds = req.for_day(training);
                if !bounds.is_consistent() {
                    found.push((nutrient.clone(), training, bounds));
                }
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> DietData {
        DietData {
            foods: vec![
                Food::new("Bread", 1.2).with_nutrient("Calories", 250.0),
                Food::new("Milk", 0.8)
                    .with_nutrient("Calories", 120.0)
                    .with_nutrient("Protein", 8.0),
            ],
            nutrients: vec!["Calories".to_string(), "Protein".to_string()],
            days: vec![Day::rest("Mon"), Day::training("Tue")],
            requirements: BTreeMap::from([(
                "Calories".to_string(),
                Requirement::uniform(Bounds::between(2000.0, 2500.0)),
            )]),
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample_data().validate().is_ok());
    }

    #[test]
    fn test_unknown_nutrient_in_food() {
        let mut data = sample_data();
        data.foods[0].nutrients.insert("Fibre".to_string(), 2.0);
        assert!(matches!(data.validate(), Err(DietError::UnknownNutrient(n)) if n == "Fibre"));
    }

    #[test]
    fn test_unknown_nutrient_in_requirements() {
        let mut data = sample_data();
        data.requirements
            .insert("Salt".to_string(), Requirement::default());
        assert!(matches!(data.validate(), Err(DietError::UnknownNutrient(_))));
    }

    #[test]
    fn test_duplicate_food_rejected() {
        let mut data = sample_data();
        data.foods.push(Food::new("bread", 2.0));
        assert!(matches!(data.validate(), Err(DietError::InvalidParameter(_))));
    }

    #[test]
    fn test_missing_requirement_defaults() {
        let data = sample_data();
        let protein = data.requirement("Protein");
        assert_eq!(protein.rest.lower(), 0.0);
        assert!(protein.training.upper().is_infinite());
    }

    #[test]
    fn test_inconsistent_bounds_reported_not_rejected() {
        let mut data = sample_data();
        data.requirements.insert(
            "Protein".to_string(),
            Requirement {
                rest: Bounds::between(50.0, 80.0),
                training: Bounds::between(120.0, 100.0),
            },
        );
        assert!(data.validate().is_ok());

        let bad = data.inconsistent_bounds();
        assert_eq!(bad.len(), 1);
        assert_eq!(bad[0].0, "Protein");
        assert!(bad[0].1);
    }

    #[test]
    fn test_index_delimiters_rejected_in_names() {
        let mut data = sample_data();
        data.foods.push(Food::new("B,C", 1.0));
        assert!(matches!(data.validate(), Err(DietError::InvalidParameter(_))));

        let mut data = sample_data();
        data.days.push(Day::rest("A,B"));
        assert!(matches!(data.validate(), Err(DietError::InvalidParameter(_))));

        let mut data = sample_data();
        data.nutrients.push("Iron[mg]".to_string());
        assert!(matches!(data.validate(), Err(DietError::InvalidParameter(_))));
    }

    #[test]
    fn test_day_case_folding_matches_duplicate_check() {
        let mut data = sample_data();
        data.days = vec![Day::rest("ŚRODA")];
        assert!(data.day("środa").is_some());

        data.days.push(Day::training("środa"));
        assert!(matches!(data.validate(), Err(DietError::InvalidParameter(_))));
    }

    #[test]
    fn test_lookups_case_insensitive() {
        let data = sample_data();
        assert!(data.food("MILK").is_some());
        assert!(data.day("tue").is_some_and(|d| d.training));
        assert_eq!(data.training_days().len(), 1);
    }
}

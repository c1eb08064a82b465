use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::builder::{day_food_var_name, food_var_name};
use crate::config::Variant;
use crate::constants::{FUZZY_MATCH_THRESHOLD, MAX_SUGGESTIONS};
use crate::error::{DietError, Result};
use crate::models::DietData;
use crate::program::{LinearProgram, VarId};

/// Servings of one food, on one day for the training variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Serving {
    #[serde(rename = "Food")]
    pub food: String,

    #[serde(rename = "Day", default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,

    #[serde(rename = "Servings")]
    pub servings: f64,
}

/// A candidate assignment of servings, typically copied from a solver report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plan {
    pub servings: Vec<Serving>,
}

impl Plan {
    /// Food names not declared in `data`, in first-seen order.
    pub fn unknown_foods(&self, data: &DietData) -> Vec<String> {
        let mut unknown: Vec<String> = Vec::new();
        for s in &self.servings {
            if data.food(&s.food).is_none() && !unknown.contains(&s.food) {
                unknown.push(s.food.clone());
            }
        }
        unknown
    }

    pub fn rename_food(&mut self, from: &str, to: &str) {
        for s in self.servings.iter_mut().filter(|s| s.food == from) {
            s.food = to.to_string();
        }
    }

    /// Map servings onto the variables of a program built from `data`.
    ///
    /// Names resolve case-insensitively. Repeated entries add up.
    pub fn to_assignment(
        &self,
        data: &DietData,
        program: &LinearProgram,
        variant: Variant,
    ) -> Result<HashMap<VarId, f64>> {
        let mut values: HashMap<VarId, f64> = HashMap::new();

        for s in &self.servings {
            let food = data
                .food(&s.food)
                .ok_or_else(|| DietError::UnknownFood(s.food.clone()))?;

            let var_name = match variant {
                Variant::Training => {
                    let day_name = s.day.as_deref().ok_or_else(|| {
                        DietError::InvalidInput(format!("serving of {} has no day", food.name))
                    })?;
                    let day = data
                        .day(day_name)
                        .ok_or_else(|| DietError::UnknownDay(day_name.to_string()))?;
                    day_food_var_name(&day.name, &food.name)
                }
                Variant::Static | Variant::Weekly => {
                    if let Some(day) = &s.day {
                        tracing::warn!(food = %food.name, day = %day, "day ignored for per-food plan");
                    }
                    food_var_name(&food.name)
                }
            };

            let var = program
                .variable_by_name(&var_name)
                .ok_or_else(|| DietError::InvalidInput(format!("{} is not in the program", var_name)))?;
            *values.entry(var).or_insert(0.0) += s.servings;
        }

        Ok(values)
    }
}

pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<Plan> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_plan<P: AsRef<Path>>(path: P, plan: &Plan) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(plan)?)?;
    Ok(())
}

/// Declared food names similar to `name`, best match first.
pub fn suggest_food(name: &str, data: &DietData) -> Vec<String> {
    let wanted = name.to_lowercase();
    let mut candidates: Vec<(&str, f64)> = data
        .foods
        .iter()
        .map(|f| (f.name.as_str(), jaro_winkler(&f.key(), &wanted)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(n, _)| n.to_string())
        .collect()
}

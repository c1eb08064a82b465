use std::fs;
use std::path::Path;

use crate::builder::AbstractLp;
use crate::error::{DietError, Result};
use crate::models::{DietData, Food};

/// Collapse foods sharing a lowercase name; the last occurrence wins but keeps
/// the position of the first.
fn dedup_foods(foods: Vec<Food>) -> Vec<Food> {
    let mut out: Vec<Food> = Vec::with_capacity(foods.len());
    for food in foods {
        match out.iter_mut().find(|f| f.key() == food.key()) {
            Some(existing) => {
                tracing::debug!(food = %food.name, "duplicate food, keeping last entry");
                *existing = food;
            }
            None => out.push(food),
        }
    }
    out
}

/// Load a diet file without checking parameter domains.
pub fn read_diet<P: AsRef<Path>>(path: P) -> Result<DietData> {
    let content = fs::read_to_string(path)?;
    let mut data: DietData = serde_json::from_str(&content)?;
    data.foods = dedup_foods(data.foods);
    Ok(data)
}

/// Load and validate a diet file.
pub fn load_diet<P: AsRef<Path>>(path: P) -> Result<DietData> {
    let data = read_diet(path)?;
    data.validate()?;
    Ok(data)
}

pub fn save_diet<P: AsRef<Path>>(path: P, data: &DietData) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a food table from CSV.
///
/// The header must contain `name` and `cost` columns (any case); every other
/// column is a nutrient. Empty cells count as 0.
pub fn load_foods_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Food>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let headers = rdr.headers()?.clone();

    let find = |wanted: &str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DietError::InvalidInput(format!("CSV has no '{}' column", wanted)))
    };
    let name_col = find("name")?;
    let cost_col = find("cost")?;

    let mut foods = Vec::new();
    for (line, record) in rdr.records().enumerate() {
        let record = record?;
        let parse = |col: usize| -> Result<f64> {
            let cell = record.get(col).unwrap_or("").trim();
            if cell.is_empty() {
                return Ok(0.0);
            }
            cell.parse().map_err(|_| {
                DietError::InvalidInput(format!(
                    "row {}: '{}' is not a number in column {}",
                    line + 2,
                    cell,
                    &headers[col]
                ))
            })
        };

        let name = record.get(name_col).unwrap_or("").trim();
        if name.is_empty() {
            return Err(DietError::InvalidInput(format!("row {}: empty name", line + 2)));
        }

        let mut food = Food::new(name, parse(cost_col)?);
        for (col, header) in headers.iter().enumerate() {
            if col == name_col || col == cost_col {
                continue;
            }
            food.nutrients.insert(header.trim().to_string(), parse(col)?);
        }
        foods.push(food);
    }

    tracing::debug!(count = foods.len(), "loaded foods from CSV");
    Ok(dedup_foods(foods))
}

pub fn load_abstract<P: AsRef<Path>>(path: P) -> Result<AbstractLp> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

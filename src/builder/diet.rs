use crate::config::{ModelConfig, Variant};
use crate::constants::SERVING_VAR;
use crate::error::{DietError, Result};
use crate::models::{Bounds, DietData};
use crate::program::{Constraint, LinearExpr, LinearProgram, VarId};

/// Build the program selected by `config.variant`.
pub fn build_program(data: &DietData, config: &ModelConfig) -> Result<LinearProgram> {
    for (nutrient, training, bounds) in data.inconsistent_bounds() {
        tracing::warn!(
            nutrient = %nutrient,
            training,
            min = bounds.lower(),
            max = bounds.upper(),
            "nutrient bounds are contradictory, program will be infeasible"
        );
    }

    let lp = match config.variant {
        Variant::Static => build_static(data, config)?,
        Variant::Weekly => build_weekly(data, config)?,
        Variant::Training => build_training(data, config)?,
    };

    tracing::info!(
        variant = ?config.variant,
        variables = lp.variables().len(),
        constraints = lp.constraints().len(),
        "built diet program"
    );
    Ok(lp)
}

/// Validate parameter domains and require a non-empty Foods set.
fn require_foods(data: &DietData) -> Result<()> {
    data.validate()?;
    if data.foods.is_empty() {
        return Err(DietError::EmptySet("Foods"));
    }
    Ok(())
}

/// Name of the serving variable of `food` in the per-food variants.
pub fn food_var_name(food: &str) -> String {
    format!("{}[{}]", SERVING_VAR, food)
}

/// Name of the serving variable of `food` on `day` in the training variant.
pub fn day_food_var_name(day: &str, food: &str) -> String {
    format!("{}[{},{}]", SERVING_VAR, day, food)
}

/// Declare `x[food]` for every food.
fn declare_food_vars(
    lp: &mut LinearProgram,
    data: &DietData,
    config: &ModelConfig,
) -> Result<Vec<VarId>> {
    data.foods
        .iter()
        .map(|food| lp.add_variable(food_var_name(&food.name), config.serving_domain()))
        .collect()
}

/// `Σ_food amount[food, nutrient] * x[food]` over the given variables.
fn nutrient_total(data: &DietData, vars: &[VarId], nutrient: &str) -> LinearExpr {
    data.foods
        .iter()
        .zip(vars)
        .map(|(food, var)| (*var, food.amount(nutrient)))
        .collect()
}

fn cost_expr(data: &DietData, vars: &[VarId]) -> LinearExpr {
    data.foods
        .iter()
        .zip(vars)
        .map(|(food, var)| (*var, food.cost))
        .collect()
}

fn ranged(name: String, expr: LinearExpr, bounds: Bounds) -> Constraint {
    Constraint::new(name, expr, bounds.lower(), bounds.upper())
}

/// One serving count per food; one rest-day constraint per nutrient.
pub fn build_static(data: &DietData, config: &ModelConfig) -> Result<LinearProgram> {
    require_foods(data)?;
    let mut lp = LinearProgram::new(&config.name);
    let x = declare_food_vars(&mut lp, data, config)?;

    lp.set_objective(cost_expr(data, &x))?;

    for nutrient in &data.nutrients {
        let bounds = data.requirement(nutrient).rest;
        lp.add_constraint(ranged(
            nutrient.clone(),
            nutrient_total(data, &x, nutrient),
            bounds,
        ))?;
    }

    tracing::debug!(
        foods = data.foods.len(),
        nutrients = data.nutrients.len(),
        "static program declared"
    );
    Ok(lp)
}

/// A single daily plan eaten on every day of the horizon.
///
/// Constraints apply to one day; the objective is the daily cost times |Days|.
pub fn build_weekly(data: &DietData, config: &ModelConfig) -> Result<LinearProgram> {
    require_foods(data)?;
    if data.days.is_empty() {
        tracing::warn!("no days declared, weekly cost is identically zero");
    }

    let mut lp = build_static(data, config)?;
    let mut objective = lp.objective().clone();
    objective.scale(data.days.len() as f64);
    lp.set_objective(objective)?;
    Ok(lp)
}

/// Servings per (day, food); every nutrient is bounded on every day using the
/// training or rest bounds according to that day's flag.
pub fn build_training(data: &DietData, config: &ModelConfig) -> Result<LinearProgram> {
    require_foods(data)?;
    if data.days.is_empty() {
        return Err(DietError::EmptySet("Days"));
    }

    let mut lp = LinearProgram::new(&config.name);

    let mut per_day: Vec<Vec<VarId>> = Vec::with_capacity(data.days.len());
    for day in &data.days {
        let vars = data
            .foods
            .iter()
            .map(|food| {
                lp.add_variable(
                    day_food_var_name(&day.name, &food.name),
                    config.serving_domain(),
                )
            })
            .collect::<Result<Vec<_>>>()?;
        per_day.push(vars);
    }

    let mut objective = LinearExpr::new();
    for vars in &per_day {
        for (var, coef) in cost_expr(data, vars).terms() {
            objective.add_term(*var, *coef);
        }
    }
    lp.set_objective(objective)?;

    for nutrient in &data.nutrients {
        let req = data.requirement(nutrient);
        for (day, vars) in data.days.iter().zip(&per_day) {
            lp.add_constraint(ranged(
                format!("{}[{}]", nutrient, day.name),
                nutrient_total(data, vars, nutrient),
                req.for_day(day.training),
            ))?;
        }
    }

    tracing::debug!(
        foods = data.foods.len(),
        nutrients = data.nutrients.len(),
        days = data.days.len(),
        training_days = data.training_days().len(),
        "training program declared"
    );
    Ok(lp)
}

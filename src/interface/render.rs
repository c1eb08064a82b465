use crate::models::DietData;
use crate::program::{Evaluation, LinearProgram};

fn fmt_bound(value: f64) -> String {
    if value.is_infinite() {
        if value > 0.0 { "inf".to_string() } else { "-inf".to_string() }
    } else {
        format!("{:.2}", value)
    }
}

/// Display the sets and rows of a program.
pub fn display_summary(program: &LinearProgram) {
    println!();
    println!("=== Program: {} ===", program.name());
    println!();
    println!(
        "Variables:   {} ({} integer)",
        program.variables().len(),
        program.integer_count()
    );
    println!("Constraints: {}", program.constraints().len());
    println!();

    let nonzero: Vec<String> = program
        .objective()
        .nonzero_terms()
        .map(|(var, coef)| format!("{:.2} {}", coef, program.variable(*var).name))
        .collect();
    println!("Minimize: {}", nonzero.join(" + "));
    println!();

    let width = program
        .constraints()
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(10);

    for c in program.constraints() {
        println!(
            "  {:<width$}  [{:>10}, {:>10}]  {} terms",
            c.name,
            fmt_bound(c.lower),
            fmt_bound(c.upper),
            c.expr.nonzero_terms().count(),
            width = width
        );
    }
    println!();
}

/// Display objective value, per-constraint slack, and domain violations.
pub fn display_evaluation(evaluation: &Evaluation) {
    println!();
    println!("=== Plan Check ===");
    println!();

    let width = evaluation
        .constraints
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(10);

    for status in &evaluation.constraints {
        let tag = if status.satisfied {
            "ok".to_string()
        } else {
            format!("VIOLATED by {:.2}", status.violation())
        };
        println!(
            "  {:<width$}  {:>10.2} in [{:>10}, {:>10}]  {}",
            status.name,
            status.value,
            fmt_bound(status.lower),
            fmt_bound(status.upper),
            tag,
            width = width
        );
    }

    if !evaluation.domain_violations.is_empty() {
        println!();
        println!("Domain violations:");
        for v in &evaluation.domain_violations {
            println!("  {} = {}", v.variable, v.value);
        }
    }

    let violated = evaluation.violated().count();
    println!();
    println!("--- Summary ---");
    println!("Total cost: {:.2}", evaluation.objective);
    println!(
        "Constraints satisfied: {}/{}",
        evaluation.constraints.len() - violated,
        evaluation.constraints.len()
    );
    println!(
        "Feasible: {}",
        if evaluation.is_feasible() { "yes" } else { "no" }
    );
    println!();
}

/// Display the food table of a diet file.
pub fn display_foods(data: &DietData) {
    if data.foods.is_empty() {
        println!("Foods: (none)");
        return;
    }

    println!();
    println!("=== Foods ({} items) ===", data.foods.len());
    println!();

    for food in &data.foods {
        println!("  {}", food.debug_string());
    }

    let training = data.training_days().len();
    println!();
    println!(
        "Days: {} ({} training), Nutrients: {}",
        data.days.len(),
        training,
        data.nutrients.len()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_bound() {
        assert_eq!(fmt_bound(f64::INFINITY), "inf");
        assert_eq!(fmt_bound(f64::NEG_INFINITY), "-inf");
        assert_eq!(fmt_bound(2.5), "2.50");
    }
}

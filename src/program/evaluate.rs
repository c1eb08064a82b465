use std::collections::HashMap;

use crate::constants::FEASIBILITY_TOLERANCE;
use crate::program::expr::VarId;
use crate::program::linear_program::LinearProgram;

/// Value of one constraint under an assignment.
#[derive(Debug, Clone)]
pub struct ConstraintStatus {
    pub name: String,
    pub value: f64,
    pub lower: f64,
    pub upper: f64,
    pub satisfied: bool,
}

impl ConstraintStatus {
    /// Distance outside `[lower, upper]` (0 when satisfied).
    pub fn violation(&self) -> f64 {
        if self.value < self.lower {
            self.lower - self.value
        } else if self.value > self.upper {
            self.value - self.upper
        } else {
            0.0
        }
    }
}

/// A variable whose value lies outside its domain.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainViolation {
    pub variable: String,
    pub value: f64,
}

#[derive(Debug, Clone)]
pub struct Evaluation {
    pub objective: f64,
    pub constraints: Vec<ConstraintStatus>,
    pub domain_violations: Vec<DomainViolation>,
}

impl Evaluation {
    pub fn is_feasible(&self) -> bool {
        self.domain_violations.is_empty() && self.constraints.iter().all(|c| c.satisfied)
    }

    pub fn violated(&self) -> impl Iterator<Item = &ConstraintStatus> {
        self.constraints.iter().filter(|c| !c.satisfied)
    }
}

/// Evaluate the objective and every constraint of `program` at `values`.
///
/// Unassigned variables are taken as 0.
pub fn evaluate(program: &LinearProgram, values: &HashMap<VarId, f64>) -> Evaluation {
    let objective = program.objective().value(values);

    let constraints = program
        .constraints()
        .iter()
        .map(|c| {
            let value = c.expr.value(values);
            let satisfied =
                value >= c.lower - FEASIBILITY_TOLERANCE && value <= c.upper + FEASIBILITY_TOLERANCE;
            ConstraintStatus {
                name: c.name.clone(),
                value,
                lower: c.lower,
                upper: c.upper,
                satisfied,
            }
        })
        .collect();

    let mut domain_violations: Vec<DomainViolation> = values
        .iter()
        .filter_map(|(id, value)| {
            let var = program.variables().get(id.0)?;
            let negative = *value < -FEASIBILITY_TOLERANCE;
            let fractional =
                var.domain.is_integer() && (value - value.round()).abs() > FEASIBILITY_TOLERANCE;
            (negative || fractional || !value.is_finite()).then(|| DomainViolation {
                variable: var.name.clone(),
                value: *value,
            })
        })
        .collect();
    domain_violations.sort_by(|a, b| a.variable.cmp(&b.variable));

    Evaluation {
        objective,
        constraints,
        domain_violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::{Constraint, Domain, LinearExpr};

    fn small_program() -> (LinearProgram, VarId, VarId) {
        let mut lp = LinearProgram::new("t");
        let x = lp.add_variable("x", Domain::NonNegativeIntegers).unwrap();
        let y = lp.add_variable("y", Domain::NonNegativeReals).unwrap();
        lp.set_objective(LinearExpr::new().with_term(x, 2.0).with_term(y, 3.0))
            .unwrap();
        lp.add_constraint(Constraint::new(
            "c",
            LinearExpr::new().with_term(x, 1.0).with_term(y, 1.0),
            2.0,
            4.0,
        ))
        .unwrap();
        (lp, x, y)
    }

    #[test]
    fn test_feasible_point() {
        let (lp, x, y) = small_program();
        let eval = evaluate(&lp, &HashMap::from([(x, 1.0), (y, 1.5)]));
        assert!((eval.objective - 6.5).abs() < 1e-9);
        assert!(eval.is_feasible());
    }

    #[test]
    fn test_violated_constraint() {
        let (lp, x, _) = small_program();
        let eval = evaluate(&lp, &HashMap::from([(x, 5.0)]));
        assert!(!eval.is_feasible());
        let status = eval.violated().next().unwrap();
        assert_eq!(status.name, "c");
        assert!((status.violation() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_fractional_integer_is_domain_violation() {
        let (lp, x, y) = small_program();
        let eval = evaluate(&lp, &HashMap::from([(x, 1.5), (y, 1.0)]));
        assert!(eval.constraints.iter().all(|c| c.satisfied));
        assert_eq!(eval.domain_violations.len(), 1);
        assert_eq!(eval.domain_violations[0].variable, "x");
        assert!(!eval.is_feasible());
    }

    #[test]
    fn test_negative_real_is_domain_violation() {
        let (lp, x, y) = small_program();
        let eval = evaluate(&lp, &HashMap::from([(x, 3.0), (y, -0.5)]));
        assert_eq!(eval.domain_violations[0].variable, "y");
    }
}

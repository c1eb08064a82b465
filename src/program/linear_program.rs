use std::collections::HashMap;
use std::fmt;

use crate::error::{DietError, Result};
use crate::program::expr::{LinearExpr, VarId};

/// Domain of a decision variable. Both are bounded below by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    NonNegativeReals,
    NonNegativeIntegers,
}

impl Domain {
    pub fn is_integer(&self) -> bool {
        matches!(self, Domain::NonNegativeIntegers)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::NonNegativeReals => write!(f, "NonNegativeReals"),
            Domain::NonNegativeIntegers => write!(f, "NonNegativeIntegers"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub domain: Domain,
}

/// Ranged constraint `lower <= expr <= upper`; either side may be infinite.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub name: String,
    pub expr: LinearExpr,
    pub lower: f64,
    pub upper: f64,
}

impl Constraint {
    pub fn new(name: impl Into<String>, expr: LinearExpr, lower: f64, upper: f64) -> Self {
        Self {
            name: name.into(),
            expr,
            lower,
            upper,
        }
    }

    /// `expr >= lower`
    pub fn at_least(name: impl Into<String>, expr: LinearExpr, lower: f64) -> Self {
        Self::new(name, expr, lower, f64::INFINITY)
    }

    pub fn has_lower(&self) -> bool {
        self.lower.is_finite()
    }

    pub fn has_upper(&self) -> bool {
        self.upper.is_finite()
    }
}

/// A minimization program over named, non-negative variables.
#[derive(Debug, Clone, Default)]
pub struct LinearProgram {
    name: String,
    variables: Vec<Variable>,
    by_name: HashMap<String, VarId>,
    objective: LinearExpr,
    constraints: Vec<Constraint>,
}

impl LinearProgram {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declare a variable. Names must be unique within the program.
    pub fn add_variable(&mut self, name: impl Into<String>, domain: Domain) -> Result<VarId> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(DietError::InvalidInput(format!(
                "variable {} declared twice",
                name
            )));
        }
        let id = VarId(self.variables.len());
        self.by_name.insert(name.clone(), id);
        self.variables.push(Variable { name, domain });
        Ok(id)
    }

    /// Add a constraint. Every referenced variable must already be declared.
    pub fn add_constraint(&mut self, constraint: Constraint) -> Result<()> {
        self.check_vars(&constraint.expr)?;
        if constraint.lower.is_nan() || constraint.upper.is_nan() {
            return Err(DietError::InvalidParameter(format!(
                "constraint {} has a NaN bound",
                constraint.name
            )));
        }
        self.constraints.push(constraint);
        Ok(())
    }

    pub fn set_objective(&mut self, objective: LinearExpr) -> Result<()> {
        self.check_vars(&objective)?;
        self.objective = objective;
        Ok(())
    }

    fn check_vars(&self, expr: &LinearExpr) -> Result<()> {
        match expr
            .terms()
            .iter()
            .find(|(v, _)| v.0 >= self.variables.len())
        {
            Some((v, _)) => Err(DietError::InvalidInput(format!(
                "variable #{} is not declared in {}",
                v.0, self.name
            ))),
            None => Ok(()),
        }
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, id: VarId) -> &Variable {
        &self.variables[id.0]
    }

    pub fn variable_by_name(&self, name: &str) -> Option<VarId> {
        self.by_name.get(name).copied()
    }

    pub fn objective(&self) -> &LinearExpr {
        &self.objective
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn constraint(&self, name: &str) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.name == name)
    }

    /// Dense objective coefficients in variable declaration order.
    pub fn objective_coefficients(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.variables.len()];
        for (var, coef) in self.objective.terms() {
            dense[var.0] += coef;
        }
        dense
    }

    /// `(name, lower, upper)` of every constraint, in declaration order.
    pub fn constraint_bounds(&self) -> Vec<(&str, f64, f64)> {
        self.constraints
            .iter()
            .map(|c| (c.name.as_str(), c.lower, c.upper))
            .collect()
    }

    pub fn integer_count(&self) -> usize {
        self.variables
            .iter()
            .filter(|v| v.domain.is_integer())
            .count()
    }

    /// True when any variable is integer, making this a MIP.
    pub fn is_mip(&self) -> bool {
        self.integer_count() > 0
    }
}

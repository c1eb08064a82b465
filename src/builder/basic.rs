use serde::{Deserialize, Serialize};

use crate::constants::{EXAMPLE_COSTS, EXAMPLE_RHS, EXAMPLE_ROW, SERVING_VAR};
use crate::error::{DietError, Result};
use crate::program::{Constraint, Domain, LinearExpr, LinearProgram};

/// The two-variable program every diet model generalizes:
/// minimize `2 x[1] + 3 x[2]` subject to `3 x[1] + 4 x[2] >= 1`.
pub fn concrete_example() -> Result<LinearProgram> {
    let mut lp = LinearProgram::new("example");
    let x1 = lp.add_variable(format!("{}[1]", SERVING_VAR), Domain::NonNegativeReals)?;
    let x2 = lp.add_variable(format!("{}[2]", SERVING_VAR), Domain::NonNegativeReals)?;

    lp.set_objective(
        LinearExpr::new()
            .with_term(x1, EXAMPLE_COSTS[0])
            .with_term(x2, EXAMPLE_COSTS[1]),
    )?;
    lp.add_constraint(Constraint::at_least(
        "Constraint1",
        LinearExpr::new()
            .with_term(x1, EXAMPLE_ROW[0])
            .with_term(x2, EXAMPLE_ROW[1]),
        EXAMPLE_RHS,
    ))?;
    Ok(lp)
}

/// Data of `min c·x  s.t.  A x >= b,  x >= 0` with `m` rows and `n` columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbstractLp {
    pub a: Vec<Vec<f64>>,
    pub b: Vec<f64>,
    pub c: Vec<f64>,
}

impl AbstractLp {
    pub fn rows(&self) -> usize {
        self.b.len()
    }

    pub fn cols(&self) -> usize {
        self.c.len()
    }

    fn check_dimensions(&self) -> Result<()> {
        if self.a.len() != self.rows() {
            return Err(DietError::DimensionMismatch(format!(
                "a has {} rows but b has {} entries",
                self.a.len(),
                self.rows()
            )));
        }
        if let Some((i, row)) = self
            .a
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != self.cols())
        {
            return Err(DietError::DimensionMismatch(format!(
                "row {} of a has {} entries but c has {}",
                i + 1,
                row.len(),
                self.cols()
            )));
        }
        Ok(())
    }

    /// Instantiate the program; indices are 1-based in names.
    pub fn build(&self) -> Result<LinearProgram> {
        self.check_dimensions()?;
        if self.cols() == 0 {
            return Err(DietError::EmptySet("J"));
        }

        let mut lp = LinearProgram::new("abstract");
        let x = (1..=self.cols())
            .map(|j| lp.add_variable(format!("{}[{}]", SERVING_VAR, j), Domain::NonNegativeReals))
            .collect::<Result<Vec<_>>>()?;

        lp.set_objective(x.iter().zip(&self.c).map(|(v, c)| (*v, *c)).collect())?;

        for (i, (row, rhs)) in self.a.iter().zip(&self.b).enumerate() {
            let expr: LinearExpr = x.iter().zip(row).map(|(v, a)| (*v, *a)).collect();
            lp.add_constraint(Constraint::at_least(
                format!("AxbConstraint[{}]", i + 1),
                expr,
                *rhs,
            ))?;
        }

        tracing::debug!(m = self.rows(), n = self.cols(), "built abstract program");
        Ok(lp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_example() {
        let lp = concrete_example().unwrap();
        assert_eq!(lp.objective_coefficients(), vec![2.0, 3.0]);
        let c = lp.constraint("Constraint1").unwrap();
        assert_eq!(c.lower, 1.0);
        assert!(c.upper.is_infinite());
        assert!(!lp.is_mip());
    }

    #[test]
    fn test_abstract_build() {
        let data = AbstractLp {
            a: vec![vec![1.0, 2.0, 0.0], vec![0.0, 1.0, 1.0]],
            b: vec![4.0, 5.0],
            c: vec![1.0, 1.0, 2.0],
        };
        let lp = data.build().unwrap();
        assert_eq!(lp.variables().len(), 3);
        assert_eq!(lp.constraints().len(), 2);

        let row2 = lp.constraint("AxbConstraint[2]").unwrap();
        let x3 = lp.variable_by_name("x[3]").unwrap();
        assert_eq!(row2.expr.coefficient(x3), 1.0);
        assert_eq!(row2.lower, 5.0);
    }

    #[test]
    fn test_abstract_dimension_mismatch() {
        let ragged = AbstractLp {
            a: vec![vec![1.0, 2.0], vec![1.0]],
            b: vec![1.0, 1.0],
            c: vec![1.0, 1.0],
        };
        assert!(matches!(ragged.build(), Err(DietError::DimensionMismatch(_))));

        let short_b = AbstractLp {
            a: vec![vec![1.0]],
            b: vec![],
            c: vec![1.0],
        };
        assert!(matches!(short_b.build(), Err(DietError::DimensionMismatch(_))));
    }
}

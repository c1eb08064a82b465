use std::collections::HashMap;

/// Index of a decision variable inside its `LinearProgram`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(pub usize);

/// Sparse linear expression `Σ coef * var`.
///
/// Terms keep insertion order; adding to an existing variable merges coefficients.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearExpr {
    terms: Vec<(VarId, f64)>,
}

impl LinearExpr {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `coef * var`, merging with an existing term for `var`.
    pub fn add_term(&mut self, var: VarId, coef: f64) {
        match self.terms.iter_mut().find(|(v, _)| *v == var) {
            Some((_, c)) => *c += coef,
            None => self.terms.push((var, coef)),
        }
    }

    pub fn with_term(mut self, var: VarId, coef: f64) -> Self {
        self.add_term(var, coef);
        self
    }

    /// Multiply every coefficient by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for (_, c) in &mut self.terms {
            *c *= factor;
        }
    }

    pub fn terms(&self) -> &[(VarId, f64)] {
        &self.terms
    }

    /// Terms with a non-zero coefficient.
    pub fn nonzero_terms(&self) -> impl Iterator<Item = &(VarId, f64)> {
        self.terms.iter().filter(|(_, c)| *c != 0.0)
    }

    pub fn coefficient(&self, var: VarId) -> f64 {
        self.terms
            .iter()
            .filter(|(v, _)| *v == var)
            .map(|(_, c)| *c)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nonzero_terms().next().is_none()
    }

    /// Value under an assignment; unassigned variables count as 0.
    pub fn value(&self, values: &HashMap<VarId, f64>) -> f64 {
        self.terms
            .iter()
            .map(|(v, c)| c * values.get(v).copied().unwrap_or(0.0))
            .sum()
    }
}

impl FromIterator<(VarId, f64)> for LinearExpr {
    fn from_iter<I: IntoIterator<Item = (VarId, f64)>>(iter: I) -> Self {
        let mut expr = LinearExpr::new();
        for (var, coef) in iter {
            expr.add_term(var, coef);
        }
        expr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_term_merges() {
        let mut expr = LinearExpr::new();
        expr.add_term(VarId(0), 2.0);
        expr.add_term(VarId(1), 3.0);
        expr.add_term(VarId(0), 1.5);

        assert_eq!(expr.terms().len(), 2);
        assert!((expr.coefficient(VarId(0)) - 3.5).abs() < 1e-12);
        assert_eq!(expr.coefficient(VarId(7)), 0.0);
    }

    #[test]
    fn test_value_and_scale() {
        let mut expr: LinearExpr = [(VarId(0), 2.0), (VarId(1), 3.0)].into_iter().collect();
        let values = HashMap::from([(VarId(0), 1.0), (VarId(1), 2.0)]);
        assert!((expr.value(&values) - 8.0).abs() < 1e-12);

        expr.scale(7.0);
        assert!((expr.value(&values) - 56.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_terms_are_empty() {
        let expr = LinearExpr::new().with_term(VarId(0), 0.0);
        assert!(expr.is_empty());
        assert_eq!(expr.value(&HashMap::new()), 0.0);
    }
}

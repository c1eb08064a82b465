/// Absolute slack allowed when checking a constraint or integrality.
pub const FEASIBILITY_TOLERANCE: f64 = 1e-6;

/// Name given to programs when none is configured.
pub const DEFAULT_MODEL_NAME: &str = "diet";

/// Name of the serving variable array.
pub const SERVING_VAR: &str = "x";

/// Jaro-Winkler similarity required before a name is offered as a suggestion.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum number of suggestions offered for an unknown name.
pub const MAX_SUGGESTIONS: usize = 5;

/// Maximum terms written on one LP file line before wrapping.
pub const LP_TERMS_PER_LINE: usize = 8;

/// Concrete example program: minimize 2 x1 + 3 x2.
pub const EXAMPLE_COSTS: [f64; 2] = [2.0, 3.0];

/// Concrete example program: 3 x1 + 4 x2 >= 1.
pub const EXAMPLE_ROW: [f64; 2] = [3.0, 4.0];
pub const EXAMPLE_RHS: f64 = 1.0;

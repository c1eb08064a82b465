pub mod evaluate;
pub mod expr;
pub mod linear_program;
pub mod lp_format;

pub use evaluate::{evaluate, ConstraintStatus, DomainViolation, Evaluation};
pub use expr::{LinearExpr, VarId};
pub use linear_program::{Constraint, Domain, LinearProgram, Variable};
pub use lp_format::{save_lp, to_lp_string, write_lp};

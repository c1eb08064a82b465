mod persistence;
mod plan;

pub use persistence::{load_abstract, load_diet, load_foods_csv, read_diet, save_diet};
pub use plan::{load_plan, save_plan, suggest_food, Plan, Serving};

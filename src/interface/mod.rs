pub mod prompts;
pub mod render;

pub use prompts::{prompt_food_choice, prompt_yes_no};
pub use render::{display_evaluation, display_foods, display_summary};

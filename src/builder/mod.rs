pub mod basic;
pub mod diet;

pub use basic::{concrete_example, AbstractLp};
pub use diet::{
    build_program, build_static, build_training, build_weekly, day_food_var_name, food_var_name,
};

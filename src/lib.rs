pub mod builder;
pub mod cli;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod interface;
pub mod models;
pub mod program;

pub use config::{ModelConfig, Variant};
pub use error::{DietError, Result};
pub use models::{Bounds, Day, DietData, Food, Requirement};
pub use program::{LinearProgram, VarId};

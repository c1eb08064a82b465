mod bounds;
mod dataset;
mod day;
mod food;

pub use bounds::{Bounds, Requirement};
pub use dataset::DietData;
pub use day::Day;
pub use food::Food;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DietError {
    #[error("Food not found: {0}")]
    UnknownFood(String),

    #[error("Nutrient not declared: {0}")]
    UnknownNutrient(String),

    #[error("Day not declared: {0}")]
    UnknownDay(String),

    #[error("Set {0} is empty")]
    EmptySet(&'static str),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, DietError>;

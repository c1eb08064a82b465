use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MODEL_NAME;
use crate::error::Result;
use crate::program::Domain;

/// Which diet formulation to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// One serving count per food, one constraint per nutrient.
    Static,
    /// Same daily plan repeated over every day; cost scaled by the day count.
    Weekly,
    /// Servings per day and food; bounds switch on each day's training flag.
    #[default]
    Training,
}

/// Options shared by every diet builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub name: String,
    pub variant: Variant,
    /// Whole servings only. Turning this off yields the LP relaxation.
    pub integer_servings: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL_NAME.to_string(),
            variant: Variant::default(),
            integer_servings: true,
        }
    }
}

impl ModelConfig {
    pub fn serving_domain(&self) -> Domain {
        if self.integer_servings {
            Domain::NonNegativeIntegers
        } else {
            Domain::NonNegativeReals
        }
    }

    /// Load a config file; missing keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

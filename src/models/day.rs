use serde::{Deserialize, Serialize};

/// A day of the planning horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    #[serde(rename = "Name")]
    pub name: String,

    /// Training days switch every nutrient to its training bounds.
    #[serde(rename = "Training", default)]
    pub training: bool,
}

impl Day {
    pub fn new(name: impl Into<String>, training: bool) -> Self {
        Self {
            name: name.into(),
            training,
        }
    }

    pub fn rest(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    pub fn training(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }
}

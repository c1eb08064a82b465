use serde::{Deserialize, Serialize};

/// Allowed interval for a nutrient total.
///
/// `min` defaults to 0 and a missing `max` means unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    #[serde(rename = "Min", default)]
    pub min: f64,

    #[serde(rename = "Max", default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Bounds {
    pub fn new(min: f64, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn at_least(min: f64) -> Self {
        Self { min, max: None }
    }

    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    #[inline]
    pub fn lower(&self) -> f64 {
        self.min
    }

    #[inline]
    pub fn upper(&self) -> f64 {
        self.max.unwrap_or(f64::INFINITY)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower() && value <= self.upper()
    }

    /// False when the interval is empty (min > max).
    pub fn is_consistent(&self) -> bool {
        self.lower() <= self.upper()
    }

    /// Both ends non-negative, no NaN.
    pub fn is_valid(&self) -> bool {
        let min_ok = self.min.is_finite() && self.min >= 0.0;
        let max_ok = match self.max {
            Some(max) => !max.is_nan() && max >= 0.0,
            None => true,
        };
        min_ok && max_ok
    }
}

/// Rest-day and training-day bounds of one nutrient.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Requirement {
    #[serde(rename = "Rest", default)]
    pub rest: Bounds,

    #[serde(rename = "Training", default)]
    pub training: Bounds,
}

impl Requirement {
    /// Same bounds whether training or not.
    pub fn uniform(bounds: Bounds) -> Self {
        Self {
            rest: bounds,
            training: bounds,
        }
    }

    pub fn for_day(&self, training: bool) -> Bounds {
        if training { self.training } else { self.rest }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_zero_to_infinity() {
        let bounds = Bounds::default();
        assert_eq!(bounds.lower(), 0.0);
        assert!(bounds.upper().is_infinite());
        assert!(bounds.contains(1e12));
    }

    #[test]
    fn test_consistency() {
        assert!(Bounds::between(10.0, 20.0).is_consistent());
        assert!(Bounds::between(5.0, 5.0).is_consistent());
        assert!(!Bounds::between(20.0, 10.0).is_consistent());
    }

    #[test]
    fn test_requirement_selects_by_training_flag() {
        let req = Requirement {
            rest: Bounds::between(2000.0, 2500.0),
            training: Bounds::between(2800.0, 3400.0),
        };
        assert_eq!(req.for_day(false).upper(), 2500.0);
        assert_eq!(req.for_day(true).lower(), 2800.0);
    }

    #[test]
    fn test_partial_requirement_json() {
        let req: Requirement =
            serde_json::from_str(r#"{"Rest": {"Max": 6.0}, "Training": {"Min": 1.0}}"#).unwrap();
        assert_eq!(req.rest.lower(), 0.0);
        assert_eq!(req.rest.upper(), 6.0);
        assert_eq!(req.training.lower(), 1.0);
        assert!(req.training.upper().is_infinite());
    }
}

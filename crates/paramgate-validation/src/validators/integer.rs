//! Integer parameter validator

use crate::outcome::ValidationOutcome;
use crate::traits::ParamValidator;

/// Validator for parameters that must parse as a signed integer.
///
/// An absent value cannot be parsed and is rejected.
#[derive(Debug, Clone, Default)]
pub struct IntegerValidator {
    /// Minimum value (inclusive)
    pub min: Option<i64>,
    /// Maximum value (inclusive)
    pub max: Option<i64>,
    /// Custom error message
    pub message: Option<String>,
}

impl IntegerValidator {
    /// Create a new integer validator with no range constraints
    pub fn new() -> Self {
        Self {
            min: None,
            max: None,
            message: None,
        }
    }

    /// Set minimum value constraint
    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set maximum value constraint
    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Set both range bounds
    pub fn range(self, min: i64, max: i64) -> Self {
        self.min(min).max(max)
    }

    /// Set custom error message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn fail(&self, default: String) -> ValidationOutcome {
        ValidationOutcome::Invalid(self.message.clone().unwrap_or(default))
    }
}

impl ParamValidator for IntegerValidator {
    fn validate(&self, value: Option<&str>) -> ValidationOutcome {
        let Some(raw) = value else {
            return self.fail("could not parse absent value as integer".to_string());
        };

        let number = match raw.parse::<i64>() {
            Ok(number) => number,
            Err(_) => return self.fail(format!("could not parse {} as integer", raw)),
        };

        if let Some(min) = self.min {
            if number < min {
                return self.fail(format!("must be at least {}", min));
            }
        }

        if let Some(max) = self.max {
            if number > max {
                return self.fail(format!("must be at most {}", max));
            }
        }

        ValidationOutcome::Valid
    }

    fn rule_name(&self) -> &'static str {
        "integer"
    }
}

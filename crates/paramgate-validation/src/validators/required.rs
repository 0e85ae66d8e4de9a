//! Required parameter validator

use crate::outcome::ValidationOutcome;
use crate::traits::ParamValidator;

/// Validator that ensures a parameter is present and not blank
#[derive(Debug, Clone, Default)]
pub struct RequiredValidator {
    /// Custom error message
    pub message: Option<String>,
}

impl RequiredValidator {
    /// Create a new required validator with default message
    pub fn new() -> Self {
        Self { message: None }
    }

    /// Create a required validator with custom message
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

impl ParamValidator for RequiredValidator {
    fn validate(&self, value: Option<&str>) -> ValidationOutcome {
        match value {
            Some(v) if !v.trim().is_empty() => ValidationOutcome::Valid,
            _ => ValidationOutcome::Invalid(
                self.message.clone().unwrap_or_else(|| "is required".to_string()),
            ),
        }
    }

    fn rule_name(&self) -> &'static str {
        "required"
    }
}

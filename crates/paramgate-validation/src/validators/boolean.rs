//! Boolean parameter validator

use crate::outcome::ValidationOutcome;
use crate::traits::ParamValidator;

/// Validator for `true`/`false` flags.
///
/// An absent flag is read as `false` and passes.
#[derive(Debug, Clone, Default)]
pub struct BooleanValidator {
    /// Custom error message
    pub message: Option<String>,
}

impl BooleanValidator {
    /// Create a new boolean validator
    pub fn new() -> Self {
        Self { message: None }
    }

    /// Set custom error message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Parse a flag the way the validator accepts it
    pub fn parse(value: Option<&str>) -> Option<bool> {
        match value {
            None => Some(false),
            Some("true") => Some(true),
            Some("false") => Some(false),
            Some(_) => None,
        }
    }
}

impl ParamValidator for BooleanValidator {
    fn validate(&self, value: Option<&str>) -> ValidationOutcome {
        match Self::parse(value) {
            Some(_) => ValidationOutcome::Valid,
            None => ValidationOutcome::Invalid(self.message.clone().unwrap_or_else(|| {
                format!("could not parse {} as boolean", value.unwrap_or_default())
            })),
        }
    }

    fn rule_name(&self) -> &'static str {
        "boolean"
    }
}

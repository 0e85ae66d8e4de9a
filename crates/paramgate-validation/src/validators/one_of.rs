//! Allow-list validator

use crate::outcome::ValidationOutcome;
use crate::traits::ParamValidator;

/// Validator that checks a parameter is one of a fixed set of values.
///
/// An absent value passes.
#[derive(Debug, Clone)]
pub struct OneOfValidator {
    allowed: Vec<String>,
    /// Custom error message
    pub message: Option<String>,
}

impl OneOfValidator {
    /// Create a validator accepting only the given values
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
            message: None,
        }
    }

    /// Set custom error message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The accepted values
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }
}

impl ParamValidator for OneOfValidator {
    fn validate(&self, value: Option<&str>) -> ValidationOutcome {
        match value {
            None => ValidationOutcome::Valid,
            Some(v) if self.allowed.iter().any(|a| a == v) => ValidationOutcome::Valid,
            Some(_) => ValidationOutcome::Invalid(self.message.clone().unwrap_or_else(|| {
                format!("must be one of: {}", self.allowed.join(", "))
            })),
        }
    }

    fn rule_name(&self) -> &'static str {
        "one_of"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_of() {
        let validator = OneOfValidator::new(["asc", "desc"]);
        assert!(validator.validate(Some("asc")).is_valid());
        assert!(validator.validate(None).is_valid());
        assert_eq!(
            validator.validate(Some("up")).message(),
            Some("must be one of: asc, desc")
        );
    }

    #[test]
    fn test_one_of_is_case_sensitive() {
        let validator = OneOfValidator::new(vec!["asc".to_string()]);
        assert!(!validator.validate(Some("ASC")).is_valid());
        assert_eq!(validator.allowed(), &["asc".to_string()]);
    }
}

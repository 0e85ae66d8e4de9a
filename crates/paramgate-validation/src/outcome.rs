//! Result of running a single validator

use std::fmt;

/// Outcome of validating one field value.
///
/// Every success payload collapses into [`ValidationOutcome::Valid`]; the gate
/// only ever cares whether a field failed and, if so, why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The value is acceptable
    Valid,
    /// The value was rejected with a human-readable message
    Invalid(String),
}

impl ValidationOutcome {
    /// Create a passing outcome
    pub fn valid() -> Self {
        ValidationOutcome::Valid
    }

    /// Create a failing outcome with a message
    pub fn invalid(message: impl Into<String>) -> Self {
        ValidationOutcome::Invalid(message.into())
    }

    /// Check whether the value passed
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// Failure message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(message) => Some(message),
        }
    }

    /// Consume the outcome and return the failure message, if any
    pub fn into_message(self) -> Option<String> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(message) => Some(message),
        }
    }
}

impl<T, E> From<Result<T, E>> for ValidationOutcome
where
    E: fmt::Display,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(_) => ValidationOutcome::Valid,
            Err(e) => ValidationOutcome::Invalid(e.to_string()),
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationOutcome::Valid => write!(f, "valid"),
            ValidationOutcome::Invalid(message) => write!(f, "invalid: {}", message),
        }
    }
}

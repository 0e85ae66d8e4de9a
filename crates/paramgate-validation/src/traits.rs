//! Core validator trait

use crate::outcome::ValidationOutcome;

/// A validator for a single path or query parameter.
///
/// `value` is `None` when the parameter is missing from the request. Each
/// validator decides for itself whether absence is acceptable.
///
/// Validators should be total over their input: report bad input through
/// [`ValidationOutcome::Invalid`] rather than panicking.
pub trait ParamValidator: Send + Sync {
    /// Validate a single value
    fn validate(&self, value: Option<&str>) -> ValidationOutcome;

    /// Get the validation rule name/type
    fn rule_name(&self) -> &'static str {
        "custom"
    }
}

impl<F> ParamValidator for F
where
    F: Fn(Option<&str>) -> ValidationOutcome + Send + Sync,
{
    fn validate(&self, value: Option<&str>) -> ValidationOutcome {
        self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_a_validator() {
        let non_empty = |value: Option<&str>| match value {
            Some(v) if !v.is_empty() => ValidationOutcome::Valid,
            _ => ValidationOutcome::invalid("must not be empty"),
        };

        assert!(non_empty.validate(Some("x")).is_valid());
        assert!(!non_empty.validate(Some("")).is_valid());
        assert!(!non_empty.validate(None).is_valid());
        assert_eq!(non_empty.rule_name(), "custom");
    }

    #[test]
    fn test_closure_using_result_conversion() {
        let port = |value: Option<&str>| -> ValidationOutcome {
            value.unwrap_or_default().parse::<u16>().into()
        };

        assert!(port.validate(Some("8080")).is_valid());
        assert!(!port.validate(Some("70000")).is_valid());
    }
}

//! A single validation pass over a mapping

use crate::mapping::ValidationMapping;
use crate::report::ErrorReport;
use crate::source::ParamSource;

/// Run every declared validator against the parameter source.
///
/// Each field is resolved from `source` (a missing key is passed to the
/// validator as `None`) and validated exactly once. Every declared field is
/// checked; the pass never stops at the first failure. The returned report
/// holds exactly the fields whose validator reported a failure.
pub fn validate(mapping: &ValidationMapping, source: &ParamSource) -> ErrorReport {
    let mut report = ErrorReport::new();

    for (field, validator) in mapping.iter() {
        if let Some(message) = validator.validate(source.get(field)).into_message() {
            tracing::debug!(
                target: "paramgate::validation",
                field = %field,
                rule = validator.rule_name(),
                message = %message,
                "parameter failed validation"
            );
            report.insert(field, message);
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::ValidationOutcome;
    use crate::validators::{BooleanValidator, IntegerValidator};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tracing_test::traced_test;

    fn id_active_mapping() -> ValidationMapping {
        ValidationMapping::new()
            .field("id", IntegerValidator::new())
            .field("active", BooleanValidator::new())
    }

    #[test]
    fn test_all_valid_yields_empty_report() {
        let source = ParamSource::from_iter([("id", "1"), ("active", "true")]);
        let report = validate(&id_active_mapping(), &source);
        assert!(report.is_empty());
    }

    #[test]
    fn test_absent_boolean_passes_and_bad_integer_fails() {
        let source = ParamSource::from_iter([("id", "not-an-integer")]);
        let report = validate(&id_active_mapping(), &source);

        let expected: ErrorReport = [("id", "could not parse not-an-integer as integer")]
            .into_iter()
            .collect();
        assert_eq!(report, expected);
    }

    #[test]
    fn test_every_failure_is_reported() {
        let source =
            ParamSource::from_iter([("id", "not-an-integer"), ("active", "not-a-boolean")]);
        let report = validate(&id_active_mapping(), &source);

        let expected: ErrorReport = [
            ("id", "could not parse not-an-integer as integer"),
            ("active", "could not parse not-a-boolean as boolean"),
        ]
        .into_iter()
        .collect();
        assert_eq!(report, expected);
    }

    #[test]
    fn test_passing_fields_are_not_reported() {
        let source = ParamSource::from_iter([("id", "1"), ("active", "not-a-boolean")]);
        let report = validate(&id_active_mapping(), &source);

        assert_eq!(report.len(), 1);
        assert!(!report.contains("id"));
        assert_eq!(report.get("active"), Some("could not parse not-a-boolean as boolean"));
    }

    #[test]
    fn test_k_of_n_failures() {
        let mut mapping = ValidationMapping::new();
        for i in 0..6 {
            mapping = mapping.field(format!("f{}", i), IntegerValidator::new());
        }
        let source = ParamSource::from_iter([
            ("f0", "1"),
            ("f1", "x"),
            ("f2", "2"),
            ("f3", "y"),
            ("f4", "z"),
            ("f5", "3"),
        ]);

        let report = validate(&mapping, &source);
        assert_eq!(report.fields(), vec!["f1", "f3", "f4"]);
    }

    #[test]
    fn test_absent_value_reaches_validator() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = {
            let seen = seen.clone();
            move |value: Option<&str>| {
                seen.lock().unwrap().push(value.map(str::to_string));
                ValidationOutcome::Valid
            }
        };

        let mapping = ValidationMapping::new().field("missing", recorder);
        let report = validate(&mapping, &ParamSource::new());

        assert!(report.is_empty());
        assert_eq!(*seen.lock().unwrap(), vec![None]);
    }

    #[test]
    fn test_each_validator_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counting = {
            let calls = calls.clone();
            move |_: Option<&str>| {
                calls.fetch_add(1, Ordering::SeqCst);
                ValidationOutcome::invalid("nope")
            }
        };

        let mapping = ValidationMapping::new().field("a", counting);
        let report = validate(&mapping, &ParamSource::from_iter([("a", "1")]));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(report.get("a"), Some("nope"));
    }

    #[test]
    fn test_repeated_passes_agree() {
        let mapping = id_active_mapping();
        let source = ParamSource::from_iter([("id", "x"), ("active", "y")]);

        assert_eq!(validate(&mapping, &source), validate(&mapping, &source));
    }

    #[test]
    fn test_empty_mapping_yields_empty_report() {
        let source = ParamSource::from_iter([("id", "x")]);
        assert!(validate(&ValidationMapping::new(), &source).is_empty());
    }

    #[test]
    #[traced_test]
    fn test_failures_are_logged() {
        let source = ParamSource::from_iter([("id", "x")]);
        let _ = validate(&id_active_mapping(), &source);

        assert!(logs_contain("parameter failed validation"));
        assert!(logs_contain("could not parse x as integer"));
    }
}

//! Error report produced by a validation pass

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Field name to failure message, one entry per failing field.
///
/// An empty report means validation succeeded. Fields that passed are never
/// present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(transparent)]
pub struct ErrorReport {
    errors: BTreeMap<String, String>,
}

impl ErrorReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Record a failure for a field, replacing any earlier message for it
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    /// Check if there are any failures
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of failing fields
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Get the failure message for a field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Check if a specific field failed
    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Names of the failing fields, in sorted order
    pub fn fields(&self) -> Vec<&str> {
        self.errors.keys().map(String::as_str).collect()
    }

    /// Iterate over `(field, message)` pairs in sorted order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Borrow the underlying map
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Convert to a JSON-serializable format for API responses
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": "validation_failed",
                "message": "Validation failed",
                "fields": self.errors
            }
        })
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "No validation errors")
        } else {
            write!(f, "Validation failed for {} field(s):", self.errors.len())?;
            for (field, message) in &self.errors {
                write!(f, "\n  {}: {}", field, message)?;
            }
            Ok(())
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ErrorReport
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut report = Self::new();
        for (field, message) in iter {
            report.insert(field, message);
        }
        report
    }
}

impl IntoIterator for ErrorReport {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_collection() {
        let mut report = ErrorReport::new();
        assert!(report.is_empty());

        report.insert("id", "could not parse x as integer");
        report.insert("active", "could not parse y as boolean");

        assert_eq!(report.len(), 2);
        assert!(report.contains("id"));
        assert!(!report.contains("name"));
        assert_eq!(report.get("active"), Some("could not parse y as boolean"));
        assert_eq!(report.fields(), vec!["active", "id"]);
    }

    #[test]
    fn test_one_entry_per_field() {
        let mut report = ErrorReport::new();
        report.insert("id", "first");
        report.insert("id", "second");

        assert_eq!(report.len(), 1);
        assert_eq!(report.get("id"), Some("second"));
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let report: ErrorReport = [("id", "bad")].into_iter().collect();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "bad" }));

        let back: ErrorReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_to_json_envelope() {
        let report: ErrorReport = [("id", "bad")].into_iter().collect();
        let json = report.to_json();

        assert_eq!(json["error"]["code"], "validation_failed");
        assert_eq!(json["error"]["fields"]["id"], "bad");
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorReport::new().to_string(), "No validation errors");

        let report: ErrorReport = [("id", "bad")].into_iter().collect();
        assert_eq!(report.to_string(), "Validation failed for 1 field(s):\n  id: bad");
    }
}

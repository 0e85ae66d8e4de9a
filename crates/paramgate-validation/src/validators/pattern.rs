//! Pattern-based validator using regular expressions

use crate::outcome::ValidationOutcome;
use crate::traits::ParamValidator;
use regex::Regex;

/// Validator for custom regular expression patterns.
///
/// The whole value must match. An absent value passes.
#[derive(Debug, Clone)]
pub struct PatternValidator {
    pattern: Regex,
    /// Custom error message
    pub message: Option<String>,
}

impl PatternValidator {
    /// Create a new pattern validator
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        Ok(Self::from_regex(regex))
    }

    /// Create a validator from an existing Regex
    pub fn from_regex(regex: Regex) -> Self {
        Self {
            pattern: regex,
            message: None,
        }
    }

    /// Set custom error message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Get the pattern string
    pub fn pattern_string(&self) -> &str {
        self.pattern.as_str()
    }

    fn full_match(&self, text: &str) -> bool {
        self.pattern
            .find(text)
            .map_or(false, |m| m.start() == 0 && m.end() == text.len())
    }
}

impl ParamValidator for PatternValidator {
    fn validate(&self, value: Option<&str>) -> ValidationOutcome {
        match value {
            None => ValidationOutcome::Valid,
            Some(text) if self.full_match(text) => ValidationOutcome::Valid,
            Some(text) => ValidationOutcome::Invalid(self.message.clone().unwrap_or_else(|| {
                format!("{} does not match the required pattern", text)
            })),
        }
    }

    fn rule_name(&self) -> &'static str {
        "pattern"
    }
}

//! Per-route validation mapping

use crate::traits::ParamValidator;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Declarative set of field name to validator associations for one route.
///
/// Field names are unique by construction. Registering a field twice keeps
/// the last validator. Once attached to a route the mapping is shared
/// read-only behind an `Arc`.
#[derive(Clone, Default)]
pub struct ValidationMapping {
    validators: BTreeMap<String, Arc<dyn ParamValidator>>,
}

impl std::fmt::Debug for ValidationMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: BTreeMap<&str, &'static str> = self
            .validators
            .iter()
            .map(|(field, validator)| (field.as_str(), validator.rule_name()))
            .collect();

        f.debug_struct("ValidationMapping")
            .field("fields", &fields)
            .finish()
    }
}

impl ValidationMapping {
    /// Create a new empty mapping
    pub fn new() -> Self {
        Self {
            validators: BTreeMap::new(),
        }
    }

    /// Declare a validator for a field
    pub fn field<V>(mut self, field: impl Into<String>, validator: V) -> Self
    where
        V: ParamValidator + 'static,
    {
        self.insert(field, Arc::new(validator));
        self
    }

    /// Declare an already shared validator for a field
    pub fn field_shared(
        mut self,
        field: impl Into<String>,
        validator: Arc<dyn ParamValidator>,
    ) -> Self {
        self.insert(field, validator);
        self
    }

    fn insert(&mut self, field: impl Into<String>, validator: Arc<dyn ParamValidator>) {
        let field = field.into();
        if self.validators.insert(field.clone(), validator).is_some() {
            tracing::debug!(
                target: "paramgate::validation",
                field = %field,
                "replacing previously declared validator"
            );
        }
    }

    /// Get the validator for a field
    pub fn get(&self, field: &str) -> Option<&Arc<dyn ParamValidator>> {
        self.validators.get(field)
    }

    /// Check if a field has a validator
    pub fn contains(&self, field: &str) -> bool {
        self.validators.contains_key(field)
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Check if no fields are declared
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Declared field names, in sorted order
    pub fn fields(&self) -> Vec<&str> {
        self.validators.keys().map(String::as_str).collect()
    }

    /// Iterate over `(field, validator)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn ParamValidator)> {
        self.validators
            .iter()
            .map(|(field, validator)| (field.as_str(), validator.as_ref()))
    }
}

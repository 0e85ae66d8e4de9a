//! Merged path and query parameter lookup

use std::collections::HashMap;

/// Read-only view of a request's parameters, keyed by field name.
///
/// Built once per request from the path parameters resolved by the router
/// and the parsed query string. A name present in both resolves to the path
/// parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamSource {
    params: HashMap<String, String>,
}

impl ParamSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self {
            params: HashMap::new(),
        }
    }

    /// Merge path and query parameters, path taking precedence
    pub fn from_parts(
        path_params: &HashMap<String, String>,
        query_params: &HashMap<String, String>,
    ) -> Self {
        let mut params = query_params.clone();
        params.extend(path_params.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { params }
    }

    /// Look up a parameter; `None` marks an absent value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Check if a parameter is present
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Number of distinct parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if there are no parameters
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl From<HashMap<String, String>> for ParamSource {
    fn from(params: HashMap<String, String>) -> Self {
        Self { params }
    }
}

impl<K, V> FromIterator<(K, V)> for ParamSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

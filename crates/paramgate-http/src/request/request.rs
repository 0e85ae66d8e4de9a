//! Request abstraction for the pipeline host
//!
//! Holds the parts of an HTTP request the pipeline needs, with path
//! parameters filled in by the router and query parameters parsed up front.

use crate::errors::{HttpError, HttpResult};
use axum::{
    body::Bytes,
    http::{HeaderMap, Method, Uri},
};
use paramgate_validation::ParamSource;
use std::collections::HashMap;

/// In-flight request as seen by pipeline stages and handlers
#[derive(Debug, Clone)]
pub struct GateRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub path_params: HashMap<String, String>,
    pub query_params: HashMap<String, String>,
    body_bytes: Option<Bytes>,
}

impl GateRequest {
    /// Create a request, parsing query parameters from the URI
    pub fn new(method: Method, uri: Uri, headers: HeaderMap) -> HttpResult<Self> {
        let query_params = parse_query(uri.query())?;
        Ok(Self {
            method,
            uri,
            headers,
            path_params: HashMap::new(),
            query_params,
            body_bytes: None,
        })
    }

    /// Build a request for a method and URI string with no headers
    pub fn build(method: Method, uri: &str) -> HttpResult<Self> {
        let uri: Uri = uri
            .parse()
            .map_err(|e| HttpError::bad_request(format!("Invalid URI '{}': {}", uri, e)))?;
        Self::new(method, uri, HeaderMap::new())
    }

    /// Set path parameters extracted from route
    pub fn with_path_params(mut self, params: HashMap<String, String>) -> Self {
        self.path_params = params;
        self
    }

    /// Set request body bytes (consuming)
    pub fn with_body(mut self, body: Bytes) -> Self {
        self.body_bytes = Some(body);
        self
    }

    /// Add path parameter (for stage use)
    pub fn add_path_param<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.path_params.insert(key.into(), value.into());
    }

    /// Get path parameter by name
    pub fn path_param(&self, name: &str) -> Option<&String> {
        self.path_params.get(name)
    }

    /// Get query parameter by name
    pub fn query_param(&self, name: &str) -> Option<&String> {
        self.query_params.get(name)
    }

    /// Get path parameter by name, parsed to specific type
    pub fn path_param_parsed<T>(&self, name: &str) -> HttpResult<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let param = self
            .path_param(name)
            .ok_or_else(|| HttpError::bad_request(format!("Missing path parameter: {}", name)))?;

        param
            .parse::<T>()
            .map_err(|e| HttpError::bad_request(format!("Invalid path parameter {}: {}", name, e)))
    }

    /// Get query parameter by name, parsed to specific type
    pub fn query_param_parsed<T>(&self, name: &str) -> HttpResult<Option<T>>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match self.query_param(name) {
            Some(param) => {
                let parsed = param.parse::<T>().map_err(|e| {
                    HttpError::bad_request(format!("Invalid query parameter {}: {}", name, e))
                })?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    /// Merged path and query parameters, path taking precedence
    pub fn params(&self) -> ParamSource {
        ParamSource::from_parts(&self.path_params, &self.query_params)
    }

    /// Get request body as bytes
    pub fn body_bytes(&self) -> Option<&Bytes> {
        self.body_bytes.as_ref()
    }

    /// Get request path
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// Get query string
    pub fn query_string(&self) -> Option<&str> {
        self.uri.query()
    }

    /// Convert an axum request, reading the body up to `body_limit` bytes
    pub async fn from_axum_request(
        request: axum::extract::Request,
        body_limit: usize,
    ) -> HttpResult<Self> {
        let (parts, body) = request.into_parts();

        let body_bytes = axum::body::to_bytes(body, body_limit)
            .await
            .map_err(|e| HttpError::bad_request(format!("Failed to read request body: {}", e)))?;

        let request = Self::new(parts.method, parts.uri, parts.headers)?;
        Ok(if body_bytes.is_empty() {
            request
        } else {
            request.with_body(body_bytes)
        })
    }
}

/// Parse a query string; a repeated key keeps its last value
fn parse_query(query: Option<&str>) -> HttpResult<HashMap<String, String>> {
    let Some(query) = query else {
        return Ok(HashMap::new());
    };

    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)
        .map_err(|e| HttpError::bad_request(format!("Invalid query string: {}", e)))?;

    Ok(pairs.into_iter().collect())
}

//! HTTP host error types
//!
//! Errors raised by the pipeline host itself. Parameter validation failures
//! are not errors here; they travel as an `ErrorReport` to the gate's
//! error handler.

use crate::routing::RoutePatternError;
use thiserror::Error;

/// Result type for HTTP operations
pub type HttpResult<T> = Result<T, HttpError>;

/// HTTP host errors
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Server startup failed: {message}")]
    StartupFailed { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid request: {message}")]
    BadRequest { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Method {method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },

    #[error("Invalid route pattern: {0}")]
    RoutePattern(#[from] RoutePatternError),

    #[error("Internal server error: {message}")]
    InternalError { message: String },
}

impl HttpError {
    /// Create a startup error
    pub fn startup<T: Into<String>>(message: T) -> Self {
        HttpError::StartupFailed {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<T: Into<String>>(message: T) -> Self {
        HttpError::ConfigError {
            message: message.into(),
        }
    }

    /// Create a bad request error
    pub fn bad_request<T: Into<String>>(message: T) -> Self {
        HttpError::BadRequest {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<T: Into<String>>(resource: T) -> Self {
        HttpError::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a method not allowed error
    pub fn method_not_allowed<M: Into<String>, P: Into<String>>(method: M, path: P) -> Self {
        HttpError::MethodNotAllowed {
            method: method.into(),
            path: path.into(),
        }
    }

    /// Create an internal error
    pub fn internal<T: Into<String>>(message: T) -> Self {
        HttpError::InternalError {
            message: message.into(),
        }
    }

    /// Get error code for consistent API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            HttpError::StartupFailed { .. } => "SERVER_STARTUP_FAILED",
            HttpError::ConfigError { .. } => "CONFIGURATION_ERROR",
            HttpError::BadRequest { .. } => "BAD_REQUEST",
            HttpError::NotFound { .. } => "RESOURCE_NOT_FOUND",
            HttpError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            HttpError::RoutePattern(_) => "INVALID_ROUTE_PATTERN",
            HttpError::InternalError { .. } => "INTERNAL_ERROR",
        }
    }
}

// Convert from std::io::Error
impl From<std::io::Error> for HttpError {
    fn from(err: std::io::Error) -> Self {
        HttpError::InternalError {
            message: format!("IO error: {}", err),
        }
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for HttpError {
    fn from(err: serde_json::Error) -> Self {
        HttpError::InternalError {
            message: format!("JSON serialization error: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = HttpError::startup("Failed to bind to port");
        assert!(matches!(error, HttpError::StartupFailed { .. }));
        assert_eq!(error.error_code(), "SERVER_STARTUP_FAILED");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(HttpError::bad_request("test").error_code(), "BAD_REQUEST");
        assert_eq!(HttpError::config("test").error_code(), "CONFIGURATION_ERROR");
        assert_eq!(HttpError::internal("test").error_code(), "INTERNAL_ERROR");
        assert_eq!(
            HttpError::method_not_allowed("POST", "/users").to_string(),
            "Method POST not allowed for /users"
        );
    }

    #[test]
    fn test_route_pattern_conversion() {
        let error = HttpError::from(RoutePatternError::DuplicateParameter("id".to_string()));
        assert_eq!(error.error_code(), "INVALID_ROUTE_PATTERN");
        assert!(error.to_string().contains("id"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Access denied");
        let http_error = HttpError::from(io_error);
        assert!(matches!(http_error, HttpError::InternalError { .. }));
    }
}

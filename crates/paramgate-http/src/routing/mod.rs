//! HTTP routing for the pipeline host
//!
//! Routes are registered with a handler and, optionally, a typed
//! validation mapping that the validation stage picks up from the exchange.

pub mod pattern;
pub mod router;

pub use pattern::{PathSegment, RoutePattern, RoutePatternError};
pub use router::{Handler, Route, RouteMatch, RouteResolution, Router};

use axum::http::Method;
use serde::{Deserialize, Serialize};

/// HTTP methods supported by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    DELETE,
    PATCH,
    HEAD,
    OPTIONS,
}

impl HttpMethod {
    /// Map an HTTP method, `None` for methods the router does not serve
    pub fn from_method(method: &Method) -> Option<Self> {
        match *method {
            Method::GET => Some(HttpMethod::GET),
            Method::POST => Some(HttpMethod::POST),
            Method::PUT => Some(HttpMethod::PUT),
            Method::DELETE => Some(HttpMethod::DELETE),
            Method::PATCH => Some(HttpMethod::PATCH),
            Method::HEAD => Some(HttpMethod::HEAD),
            Method::OPTIONS => Some(HttpMethod::OPTIONS),
            _ => None,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::GET => write!(f, "GET"),
            HttpMethod::POST => write!(f, "POST"),
            HttpMethod::PUT => write!(f, "PUT"),
            HttpMethod::DELETE => write!(f, "DELETE"),
            HttpMethod::PATCH => write!(f, "PATCH"),
            HttpMethod::HEAD => write!(f, "HEAD"),
            HttpMethod::OPTIONS => write!(f, "OPTIONS"),
        }
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::GET => Method::GET,
            HttpMethod::POST => Method::POST,
            HttpMethod::PUT => Method::PUT,
            HttpMethod::DELETE => Method::DELETE,
            HttpMethod::PATCH => Method::PATCH,
            HttpMethod::HEAD => Method::HEAD,
            HttpMethod::OPTIONS => Method::OPTIONS,
        }
    }
}

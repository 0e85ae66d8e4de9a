//! Response abstraction for building HTTP responses
//!
//! Provides fluent response building with status codes, headers, and JSON bodies.

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

/// Response produced by a handler or an error handler
#[derive(Debug, Clone)]
pub struct GateResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: ResponseBody,
}

/// Response body types
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Empty,
    Text(String),
    Json(serde_json::Value),
}

impl GateResponse {
    /// Create new response with OK status
    pub fn new() -> Self {
        Self::with_status(StatusCode::OK)
    }

    /// Create response with specific status code
    pub fn with_status(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: ResponseBody::Empty,
        }
    }

    /// 200 OK
    pub fn ok() -> Self {
        Self::with_status(StatusCode::OK)
    }

    /// 400 Bad Request
    pub fn bad_request() -> Self {
        Self::with_status(StatusCode::BAD_REQUEST)
    }

    /// 404 Not Found
    pub fn not_found() -> Self {
        Self::with_status(StatusCode::NOT_FOUND)
    }

    /// 405 Method Not Allowed
    pub fn method_not_allowed() -> Self {
        Self::with_status(StatusCode::METHOD_NOT_ALLOWED)
    }

    /// 422 Unprocessable Entity
    pub fn unprocessable_entity() -> Self {
        Self::with_status(StatusCode::UNPROCESSABLE_ENTITY)
    }

    /// 500 Internal Server Error
    pub fn internal_server_error() -> Self {
        Self::with_status(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Set response status code (consuming)
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Get response status code
    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    /// Get response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get response body
    pub fn body(&self) -> &ResponseBody {
        &self.body
    }

    /// JSON body, if the response carries one
    pub fn json_body(&self) -> Option<&serde_json::Value> {
        match &self.body {
            ResponseBody::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Add header to response (never panics)
    ///
    /// Invalid header names or values are dropped and logged.
    pub fn with_header<K, V>(mut self, key: K, value: V) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        match (
            HeaderName::from_bytes(key.as_ref().as_bytes()),
            HeaderValue::from_str(value.as_ref()),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => {
                tracing::error!(
                    target: "paramgate::http",
                    header = key.as_ref(),
                    "dropping invalid response header"
                );
            }
        }
        self
    }

    /// Set text body
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.body = ResponseBody::Text(text.into());
        self
    }

    /// Set JSON body from an already built value
    pub fn with_json_value(mut self, value: serde_json::Value) -> Self {
        self.body = ResponseBody::Json(value);
        self
    }

    /// Set JSON body from any serializable value
    pub fn json<T: serde::Serialize>(self, data: &T) -> Result<Self, serde_json::Error> {
        let value = serde_json::to_value(data)?;
        Ok(self.with_json_value(value))
    }

    /// Convert into an axum response
    pub fn into_axum_response(self) -> Response {
        let (content_type, body) = match self.body {
            ResponseBody::Empty => (None, Body::empty()),
            ResponseBody::Text(text) => (Some("text/plain; charset=utf-8"), Body::from(text)),
            ResponseBody::Json(value) => (Some("application/json"), Body::from(value.to_string())),
        };

        let mut response = Response::new(body);
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;

        if let Some(content_type) = content_type {
            if !response.headers().contains_key(header::CONTENT_TYPE) {
                response
                    .headers_mut()
                    .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
            }
        }

        response
    }
}

impl Default for GateResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoResponse for GateResponse {
    fn into_response(self) -> Response {
        self.into_axum_response()
    }
}

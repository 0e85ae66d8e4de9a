//! HTTP error response formatting

use super::HttpError;
use crate::response::GateResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

impl HttpError {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpError::StartupFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            HttpError::ConfigError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            HttpError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            HttpError::NotFound { .. } => StatusCode::NOT_FOUND,
            HttpError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            HttpError::RoutePattern(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HttpError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Render the error as a JSON response
    pub fn into_gate_response(self) -> GateResponse {
        let body = json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        });

        GateResponse::with_status(self.status_code()).with_json_value(body)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        self.into_gate_response().into_response()
    }
}

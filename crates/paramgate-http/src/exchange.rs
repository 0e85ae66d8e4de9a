//! The in-flight request/response exchange passed between pipeline stages

use crate::request::GateRequest;
use crate::response::GateResponse;
use paramgate_validation::{ParamSource, ValidationMapping};
use std::sync::Arc;
use uuid::Uuid;

/// Routing metadata attached to an exchange once its route is resolved
#[derive(Debug, Clone, Default)]
pub struct RouteMeta {
    /// The pattern the request matched, e.g. `/users/{id}`
    pub pattern: String,
    /// Validation mapping registered alongside the route
    pub validation: Option<Arc<ValidationMapping>>,
}

impl RouteMeta {
    /// Metadata for a route without declared validations
    pub fn new<S: Into<String>>(pattern: S) -> Self {
        Self {
            pattern: pattern.into(),
            validation: None,
        }
    }

    /// Attach a validation mapping
    pub fn with_validation(mut self, mapping: Arc<ValidationMapping>) -> Self {
        self.validation = Some(mapping);
        self
    }
}

/// Request/response exchange owned by the pipeline for one request.
///
/// A stage that produces the final response calls [`Exchange::respond`] (or
/// [`Exchange::halt`]); once halted, no further stage or handler runs.
#[derive(Debug)]
pub struct Exchange {
    request_id: String,
    request: GateRequest,
    route: Option<RouteMeta>,
    response: Option<GateResponse>,
    halted: bool,
}

impl Exchange {
    /// Start an exchange for a request
    pub fn new(request: GateRequest) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            request,
            route: None,
            response: None,
            halted: false,
        }
    }

    /// Attach the resolved route metadata
    pub fn with_route(mut self, route: RouteMeta) -> Self {
        self.route = Some(route);
        self
    }

    /// Unique id for log correlation
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// The request being processed
    pub fn request(&self) -> &GateRequest {
        &self.request
    }

    /// Mutable access to the request
    pub fn request_mut(&mut self) -> &mut GateRequest {
        &mut self.request
    }

    /// Resolved route metadata, if routing ran
    pub fn route(&self) -> Option<&RouteMeta> {
        self.route.as_ref()
    }

    /// Validation mapping declared by the matched route
    pub fn validation_mapping(&self) -> Option<&Arc<ValidationMapping>> {
        self.route.as_ref().and_then(|route| route.validation.as_ref())
    }

    /// Merged path and query parameters.
    ///
    /// Built on demand from the request, copying both maps; call once per
    /// pass and reuse the result.
    pub fn params(&self) -> ParamSource {
        self.request.params()
    }

    /// Stop any further stages and the handler from running
    pub fn halt(&mut self) {
        self.halted = true;
    }

    /// Set the final response and halt
    pub fn respond(&mut self, response: GateResponse) {
        self.response = Some(response);
        self.halted = true;
    }

    /// Check if the exchange has been halted
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Response set by a stage, if any
    pub fn response(&self) -> Option<&GateResponse> {
        self.response.as_ref()
    }

    /// Take apart the exchange once the pipeline is done with it
    pub fn into_parts(self) -> (GateRequest, Option<GateResponse>) {
        (self.request, self.response)
    }
}

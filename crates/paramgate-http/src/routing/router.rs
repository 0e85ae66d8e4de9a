//! Core routing functionality

use super::pattern::RoutePattern;
use super::HttpMethod;
use crate::errors::HttpResult;
use crate::exchange::RouteMeta;
use crate::middleware::pipeline::BoxFuture;
use crate::request::GateRequest;
use crate::response::GateResponse;
use paramgate_validation::ValidationMapping;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

/// Type-erased route handler
pub type Handler =
    Arc<dyn Fn(GateRequest) -> BoxFuture<'static, HttpResult<GateResponse>> + Send + Sync>;

/// A registered route
#[derive(Clone)]
pub struct Route {
    method: HttpMethod,
    pattern: RoutePattern,
    validation: Option<Arc<ValidationMapping>>,
    handler: Handler,
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("pattern", &self.pattern.original_path)
            .field("validation", &self.validation)
            .finish()
    }
}

impl Route {
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    /// Validation mapping registered with this route
    pub fn validation(&self) -> Option<&Arc<ValidationMapping>> {
        self.validation.as_ref()
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Metadata to attach to an exchange routed here
    pub fn meta(&self) -> RouteMeta {
        RouteMeta {
            pattern: self.pattern.original_path.clone(),
            validation: self.validation.clone(),
        }
    }
}

/// A route matched against a request path
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: HashMap<String, String>,
}

/// Outcome of resolving a request against the router
#[derive(Debug)]
pub enum RouteResolution<'a> {
    Matched(RouteMatch<'a>),
    /// Some route matches the path, but not with this method
    MethodNotAllowed,
    NotFound,
}

/// Router for the pipeline host
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Create a new router
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Register a route without declared validations
    pub fn route<F, Fut>(self, method: HttpMethod, path: &str, handler: F) -> HttpResult<Self>
    where
        F: Fn(GateRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HttpResult<GateResponse>> + Send + 'static,
    {
        self.register(method, path, None, handler)
    }

    /// Register a route together with the validation mapping for its parameters
    pub fn route_with_validation<F, Fut>(
        self,
        method: HttpMethod,
        path: &str,
        mapping: ValidationMapping,
        handler: F,
    ) -> HttpResult<Self>
    where
        F: Fn(GateRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HttpResult<GateResponse>> + Send + 'static,
    {
        self.register(method, path, Some(Arc::new(mapping)), handler)
    }

    fn register<F, Fut>(
        mut self,
        method: HttpMethod,
        path: &str,
        validation: Option<Arc<ValidationMapping>>,
        handler: F,
    ) -> HttpResult<Self>
    where
        F: Fn(GateRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HttpResult<GateResponse>> + Send + 'static,
    {
        let pattern = RoutePattern::parse(path)?;

        tracing::debug!(
            target: "paramgate::http",
            method = %method,
            path = %path,
            validated_fields = validation.as_ref().map_or(0, |m| m.len()),
            "registering route"
        );

        let handler: Handler = Arc::new(move |request: GateRequest| {
            Box::pin(handler(request)) as BoxFuture<'static, HttpResult<GateResponse>>
        });
        self.routes.push(Route {
            method,
            pattern,
            validation,
            handler,
        });
        Ok(self)
    }

    /// Add GET route
    pub fn get<F, Fut>(self, path: &str, handler: F) -> HttpResult<Self>
    where
        F: Fn(GateRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HttpResult<GateResponse>> + Send + 'static,
    {
        self.route(HttpMethod::GET, path, handler)
    }

    /// Add GET route with validated parameters
    pub fn get_validated<F, Fut>(
        self,
        path: &str,
        mapping: ValidationMapping,
        handler: F,
    ) -> HttpResult<Self>
    where
        F: Fn(GateRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HttpResult<GateResponse>> + Send + 'static,
    {
        self.route_with_validation(HttpMethod::GET, path, mapping, handler)
    }

    /// Add POST route
    pub fn post<F, Fut>(self, path: &str, handler: F) -> HttpResult<Self>
    where
        F: Fn(GateRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HttpResult<GateResponse>> + Send + 'static,
    {
        self.route(HttpMethod::POST, path, handler)
    }

    /// Add PUT route
    pub fn put<F, Fut>(self, path: &str, handler: F) -> HttpResult<Self>
    where
        F: Fn(GateRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HttpResult<GateResponse>> + Send + 'static,
    {
        self.route(HttpMethod::PUT, path, handler)
    }

    /// Add DELETE route
    pub fn delete<F, Fut>(self, path: &str, handler: F) -> HttpResult<Self>
    where
        F: Fn(GateRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HttpResult<GateResponse>> + Send + 'static,
    {
        self.route(HttpMethod::DELETE, path, handler)
    }

    /// Add PATCH route
    pub fn patch<F, Fut>(self, path: &str, handler: F) -> HttpResult<Self>
    where
        F: Fn(GateRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HttpResult<GateResponse>> + Send + 'static,
    {
        self.route(HttpMethod::PATCH, path, handler)
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if no routes are registered
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// All registered routes, in registration order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Find the route for a method and path.
    ///
    /// Among matching routes the lowest pattern priority wins; ties go to
    /// the route registered first.
    pub fn resolve(&self, method: &axum::http::Method, path: &str) -> RouteResolution<'_> {
        let method = HttpMethod::from_method(method);
        let mut best: Option<RouteMatch<'_>> = None;
        let mut path_matched = false;

        for route in &self.routes {
            let Some(params) = route.pattern.match_path(path) else {
                continue;
            };
            path_matched = true;

            if Some(route.method) != method {
                continue;
            }

            let better = best.as_ref().map_or(true, |current| {
                route.pattern.priority() < current.route.pattern.priority()
            });
            if better {
                best = Some(RouteMatch { route, params });
            }
        }

        match best {
            Some(matched) => RouteResolution::Matched(matched),
            None if path_matched => RouteResolution::MethodNotAllowed,
            None => RouteResolution::NotFound,
        }
    }
}

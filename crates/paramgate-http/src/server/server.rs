//! # Pipeline host server
//!
//! Routes requests, runs the stage pipeline and then the route handler.
//! Axum only carries the bytes; every request goes through [`Server::handle`].

use super::lifecycle::start_server;
use crate::{
    config::{HttpConfig, HttpDefaults},
    errors::{HttpError, HttpResult},
    exchange::Exchange,
    middleware::{LoggingStage, Pipeline, Stage},
    request::GateRequest,
    response::GateResponse,
    routing::{RouteResolution, Router},
};
use std::sync::Arc;
use tracing::info;

/// The HTTP host
///
/// # Example
///
/// ```rust,no_run
/// use paramgate_http::{
///     json_error_handler, GateConfig, GateRequest, GateResponse, HttpConfig, HttpResult,
///     Router, Server, ValidationGate,
/// };
/// use paramgate_validation::{IntegerValidator, ValidationMapping};
///
/// async fn show_user(_req: GateRequest) -> HttpResult<GateResponse> {
///     Ok(GateResponse::ok())
/// }
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let router = Router::new().get_validated(
///         "/users/{id}",
///         ValidationMapping::new().field("id", IntegerValidator::new()),
///         show_user,
///     )?;
///
///     let mut server = Server::new(HttpConfig::default())?;
///     server
///         .use_router(router)
///         .use_stage(ValidationGate::init(GateConfig::new().on_error(json_error_handler()))?);
///     server.listen().await?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Server {
    config: HttpConfig,
    router: Router,
    pipeline: Pipeline,
}

impl Server {
    /// Create a new server; installs request logging when the config enables it
    pub fn new(config: HttpConfig) -> HttpResult<Self> {
        config.validate()?;

        let mut pipeline = Pipeline::new();
        if config.log_requests {
            pipeline.add_mut(LoggingStage::new());
        }

        Ok(Self {
            config,
            router: Router::new(),
            pipeline,
        })
    }

    /// Set the routes served
    pub fn use_router(&mut self, router: Router) -> &mut Self {
        self.router = router;
        self
    }

    /// Append a stage to the pipeline
    pub fn use_stage<S>(&mut self, stage: S) -> &mut Self
    where
        S: Stage + 'static,
    {
        self.pipeline.add_mut(stage);
        self
    }

    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Process one request end to end
    pub async fn handle(&self, mut request: GateRequest) -> GateResponse {
        let matched = match self.router.resolve(&request.method, request.path()) {
            RouteResolution::Matched(matched) => matched,
            RouteResolution::MethodNotAllowed => {
                return HttpError::method_not_allowed(request.method.as_str(), request.path())
                    .into_gate_response();
            }
            RouteResolution::NotFound => {
                return HttpError::not_found(request.path()).into_gate_response();
            }
        };

        for (name, value) in matched.params {
            request.add_path_param(name, value);
        }

        let route = matched.route;
        let exchange = Exchange::new(request).with_route(route.meta());
        let handler = route.handler().clone();

        self.pipeline
            .execute(exchange, move |request| handler(request))
            .await
    }

    /// Convert an axum request and process it
    pub async fn handle_axum(&self, request: axum::extract::Request) -> GateResponse {
        match GateRequest::from_axum_request(request, HttpDefaults::MAX_REQUEST_BODY).await {
            Ok(request) => self.handle(request).await,
            Err(err) => err.into_gate_response(),
        }
    }

    /// Mount the server as the fallback of an axum router
    pub fn into_axum_router(self) -> axum::Router {
        let server = Arc::new(self);
        axum::Router::new().fallback(move |request: axum::extract::Request| {
            let server = server.clone();
            async move { server.handle_axum(request).await }
        })
    }

    /// Bind the configured address and serve until shutdown
    pub async fn listen(self) -> HttpResult<()> {
        let addr = self.config.socket_addr()?;
        info!(
            target: "paramgate::http",
            %addr,
            routes = self.router.len(),
            stages = ?self.pipeline.names(),
            "starting server"
        );

        start_server(addr, self.into_axum_router()).await?;

        info!(target: "paramgate::http", "server shut down gracefully");
        Ok(())
    }
}

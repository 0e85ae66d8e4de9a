//! # Stage pipeline
//!
//! Stages take the exchange by value and hand it back. Uses boxed futures so
//! stages stay dyn-compatible.

use crate::errors::HttpResult;
use crate::exchange::Exchange;
use crate::request::GateRequest;
use crate::response::GateResponse;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

/// Boxed, sendable future
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Future returned by a stage
pub type StageFuture = BoxFuture<'static, Exchange>;

/// A single unit of request processing
pub trait Stage: Send + Sync + std::fmt::Debug {
    /// Process the exchange and return it, possibly halted
    fn call(&self, exchange: Exchange) -> StageFuture;

    /// Optional stage name for debugging
    fn name(&self) -> &'static str {
        "Stage"
    }
}

/// Ordered list of stages run ahead of the route handler
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    stages: Vec<Arc<dyn Stage>>,
}

impl Pipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Add a stage to the end of the pipeline
    pub fn add<S: Stage + 'static>(mut self, stage: S) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    /// Add a stage to the end of the pipeline (mutable version)
    pub fn add_mut<S: Stage + 'static>(&mut self, stage: S) {
        self.stages.push(Arc::new(stage));
    }

    /// Put a stage in front of the existing ones
    pub fn prepend<S: Stage + 'static>(mut self, stage: S) -> Self {
        self.stages.insert(0, Arc::new(stage));
        self
    }

    /// Run the stages, then the handler unless a stage halted the exchange
    pub async fn execute<F, Fut>(&self, mut exchange: Exchange, handler: F) -> GateResponse
    where
        F: FnOnce(GateRequest) -> Fut,
        Fut: Future<Output = HttpResult<GateResponse>>,
    {
        let start = Instant::now();

        for stage in &self.stages {
            exchange = stage.call(exchange).await;
            if exchange.is_halted() {
                tracing::debug!(
                    target: "paramgate::http",
                    request_id = exchange.request_id(),
                    stage = stage.name(),
                    "pipeline halted"
                );
                break;
            }
        }

        let request_id = exchange.request_id().to_string();
        let halted = exchange.is_halted();
        let (request, response) = exchange.into_parts();
        let method = request.method.clone();
        let path = request.path().to_string();

        let response = if halted {
            response.unwrap_or_else(|| {
                tracing::error!(
                    target: "paramgate::http",
                    request_id = %request_id,
                    "exchange halted without a response"
                );
                GateResponse::internal_server_error()
            })
        } else {
            handler(request)
                .await
                .unwrap_or_else(|err| {
                    tracing::warn!(
                        target: "paramgate::http",
                        request_id = %request_id,
                        error = %err,
                        "handler returned an error"
                    );
                    err.into_gate_response()
                })
        };

        tracing::info!(
            target: "paramgate::http",
            request_id = %request_id,
            method = %method,
            path = %path,
            status = response.status_code().as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "request completed"
        );

        response
    }

    /// Get number of stages in the pipeline
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Check if pipeline is empty
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Get stage names for debugging
    pub fn names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::HttpError;
    use axum::http::{Method, StatusCode};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CountingStage {
        calls: Arc<AtomicUsize>,
    }

    impl Stage for CountingStage {
        fn call(&self, exchange: Exchange) -> StageFuture {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move { exchange })
        }

        fn name(&self) -> &'static str {
            "CountingStage"
        }
    }

    #[derive(Debug)]
    struct HaltingStage {
        response: Option<GateResponse>,
    }

    impl Stage for HaltingStage {
        fn call(&self, mut exchange: Exchange) -> StageFuture {
            match self.response.clone() {
                Some(response) => exchange.respond(response),
                None => exchange.halt(),
            }
            Box::pin(async move { exchange })
        }

        fn name(&self) -> &'static str {
            "HaltingStage"
        }
    }

    fn exchange() -> Exchange {
        Exchange::new(GateRequest::build(Method::GET, "/users/1").unwrap())
    }

    #[tokio::test]
    async fn test_empty_pipeline_runs_handler() {
        let pipeline = Pipeline::new();
        let response = pipeline
            .execute(exchange(), |_req| async { Ok(GateResponse::ok().with_text("done")) })
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stages_run_in_order_then_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let pipeline = Pipeline::new()
            .add(CountingStage { calls: calls.clone() })
            .add(CountingStage { calls: calls.clone() });

        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline.names(), vec!["CountingStage", "CountingStage"]);

        let response = pipeline
            .execute(exchange(), |req| async move {
                assert_eq!(req.path(), "/users/1");
                Ok(GateResponse::ok())
            })
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_halt_skips_later_stages_and_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let handler_calls = Arc::new(AtomicUsize::new(0));
        let pipeline = Pipeline::new()
            .add(HaltingStage {
                response: Some(GateResponse::bad_request()),
            })
            .add(CountingStage { calls: calls.clone() });

        let counter = handler_calls.clone();
        let response = pipeline
            .execute(exchange(), move |_req| async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(GateResponse::ok())
            })
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(handler_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_halt_without_response_is_server_error() {
        let pipeline = Pipeline::new().add(HaltingStage { response: None });
        let response = pipeline
            .execute(exchange(), |_req| async { Ok(GateResponse::ok()) })
            .await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_handler_error_becomes_response() {
        let pipeline = Pipeline::new();
        let response = pipeline
            .execute(exchange(), |_req| async { Err(HttpError::not_found("user 1")) })
            .await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(response.json_body().unwrap()["error"]["code"], "RESOURCE_NOT_FOUND");
    }

    #[test]
    fn test_prepend() {
        let pipeline = Pipeline::new()
            .add(HaltingStage { response: None })
            .prepend(CountingStage::default());

        assert_eq!(pipeline.names(), vec!["CountingStage", "HaltingStage"]);
    }
}

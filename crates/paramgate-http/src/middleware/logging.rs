//! Request logging stage

use super::pipeline::{Stage, StageFuture};
use crate::exchange::Exchange;

/// Logs each request on entry to the pipeline
#[derive(Debug, Clone, Default)]
pub struct LoggingStage;

impl LoggingStage {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for LoggingStage {
    fn call(&self, exchange: Exchange) -> StageFuture {
        let request = exchange.request();
        tracing::info!(
            target: "paramgate::http",
            request_id = exchange.request_id(),
            method = %request.method,
            path = request.path(),
            route = exchange.route().map(|r| r.pattern.as_str()).unwrap_or("-"),
            "request received"
        );

        Box::pin(async move { exchange })
    }

    fn name(&self) -> &'static str {
        "LoggingStage"
    }
}

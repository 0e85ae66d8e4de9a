//! # Validation gate
//!
//! Runs the route's declared parameter validations and hands any failures to
//! the configured `on_error` handler. The gate itself never writes a
//! response; halting is up to the handler.

use super::pipeline::{Stage, StageFuture};
use crate::errors::{HttpError, HttpResult};
use crate::exchange::Exchange;
use crate::response::GateResponse;
use axum::http::StatusCode;
use paramgate_validation::{validate, ErrorReport};
use std::sync::Arc;

/// Callback invoked with the exchange and the full report when validation fails
pub type ErrorHandler = Arc<dyn Fn(Exchange, ErrorReport) -> Exchange + Send + Sync>;

/// Options supplied once when the gate is installed
#[derive(Clone, Default)]
pub struct GateConfig {
    on_error: Option<ErrorHandler>,
}

impl GateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the failure handler
    pub fn on_error<F>(mut self, handler: F) -> Self
    where
        F: Fn(Exchange, ErrorReport) -> Exchange + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(handler));
        self
    }

    pub fn has_error_handler(&self) -> bool {
        self.on_error.is_some()
    }
}

impl std::fmt::Debug for GateConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GateConfig")
            .field("on_error", &self.on_error.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Pipeline stage validating path and query parameters against the matched
/// route's [`ValidationMapping`](paramgate_validation::ValidationMapping).
#[derive(Clone)]
pub struct ValidationGate {
    on_error: ErrorHandler,
}

impl ValidationGate {
    /// Build the gate from its configuration.
    ///
    /// Fails with a configuration error when no `on_error` handler is set.
    pub fn init(config: GateConfig) -> HttpResult<Self> {
        let on_error = config.on_error.ok_or_else(|| {
            HttpError::config("validation gate requires an on_error handler")
        })?;

        tracing::debug!(target: "paramgate::gate", "validation gate initialized");
        Ok(Self { on_error })
    }

    /// Validate the exchange's parameters.
    ///
    /// Returns the exchange untouched when the route declares no validations
    /// or every field passes; otherwise returns whatever `on_error` returns.
    pub fn process(&self, exchange: Exchange) -> Exchange {
        let Some(mapping) = exchange.validation_mapping().cloned() else {
            return exchange;
        };

        let report = validate(&mapping, &exchange.params());
        if report.is_empty() {
            tracing::debug!(
                target: "paramgate::gate",
                request_id = exchange.request_id(),
                fields = mapping.len(),
                "parameters valid"
            );
            return exchange;
        }

        tracing::info!(
            target: "paramgate::gate",
            request_id = exchange.request_id(),
            failed = report.len(),
            fields = ?report.fields(),
            "parameter validation failed"
        );

        (self.on_error)(exchange, report)
    }
}

impl std::fmt::Debug for ValidationGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationGate").finish_non_exhaustive()
    }
}

impl Stage for ValidationGate {
    fn call(&self, exchange: Exchange) -> StageFuture {
        let exchange = self.process(exchange);
        Box::pin(async move { exchange })
    }

    fn name(&self) -> &'static str {
        "ValidationGate"
    }
}

/// Failure handler responding `422 Unprocessable Entity` with the report as JSON
pub fn json_error_handler() -> impl Fn(Exchange, ErrorReport) -> Exchange + Send + Sync + 'static {
    json_error_handler_with_status(StatusCode::UNPROCESSABLE_ENTITY)
}

/// Failure handler responding with `status` and the report as JSON
pub fn json_error_handler_with_status(
    status: StatusCode,
) -> impl Fn(Exchange, ErrorReport) -> Exchange + Send + Sync + 'static {
    move |mut exchange: Exchange, report: ErrorReport| {
        exchange.respond(GateResponse::with_status(status).with_json_value(report.to_json()));
        exchange
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::RouteMeta;
    use crate::request::GateRequest;
    use axum::http::Method;
    use paramgate_validation::{BooleanValidator, IntegerValidator, ValidationMapping};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tracing_test::traced_test;

    fn mapping() -> Arc<ValidationMapping> {
        Arc::new(
            ValidationMapping::new()
                .field("id", IntegerValidator::new())
                .field("active", BooleanValidator::new()),
        )
    }

    fn exchange(id: &str, query: &str, mapping: Option<Arc<ValidationMapping>>) -> Exchange {
        let uri = format!("/users/{}{}", id, query);
        let mut request = GateRequest::build(Method::GET, &uri).unwrap();
        request.add_path_param("id", id);

        let mut route = RouteMeta::new("/users/{id}");
        if let Some(mapping) = mapping {
            route = route.with_validation(mapping);
        }
        Exchange::new(request).with_route(route)
    }

    /// Gate recording every report it hands to `on_error`
    fn recording_gate() -> (ValidationGate, Arc<Mutex<Vec<ErrorReport>>>) {
        let reports = Arc::new(Mutex::new(Vec::new()));
        let sink = reports.clone();
        let gate = ValidationGate::init(GateConfig::new().on_error(move |mut exchange, report| {
            sink.lock().unwrap().push(report);
            exchange.halt();
            exchange
        }))
        .unwrap();
        (gate, reports)
    }

    #[test]
    fn test_init_requires_error_handler() {
        let result = ValidationGate::init(GateConfig::new());
        assert!(matches!(result, Err(HttpError::ConfigError { .. })));

        assert!(!GateConfig::new().has_error_handler());
        assert!(GateConfig::new().on_error(json_error_handler()).has_error_handler());
    }

    #[test]
    fn test_no_mapping_passes_through() {
        let (gate, reports) = recording_gate();
        let result = gate.process(exchange("abc", "", None));

        assert!(!result.is_halted());
        assert!(result.response().is_none());
        assert!(reports.lock().unwrap().is_empty());
    }

    #[test]
    fn test_all_valid_passes_through() {
        let (gate, reports) = recording_gate();
        let result = gate.process(exchange("1", "?active=true", Some(mapping())));

        assert!(!result.is_halted());
        assert!(reports.lock().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_id_with_absent_boolean() {
        let (gate, reports) = recording_gate();
        let result = gate.process(exchange("not-an-integer", "", Some(mapping())));

        assert!(result.is_halted());
        let reports = reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(
            reports[0],
            ErrorReport::from_iter([("id", "could not parse not-an-integer as integer")])
        );
    }

    #[test]
    fn test_every_failure_reported_at_once() {
        let (gate, reports) = recording_gate();
        gate.process(exchange("not-an-integer", "?active=not-a-boolean", Some(mapping())));

        let reports = reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(
            reports[0],
            ErrorReport::from_iter([
                ("id", "could not parse not-an-integer as integer"),
                ("active", "could not parse not-a-boolean as boolean"),
            ])
        );
    }

    #[test]
    fn test_only_failing_fields_reported() {
        let (gate, reports) = recording_gate();
        gate.process(exchange("1", "?active=not-a-boolean", Some(mapping())));

        let reports = reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert!(!reports[0].contains("id"));
        assert_eq!(
            reports[0].get("active"),
            Some("could not parse not-a-boolean as boolean")
        );
    }

    #[test]
    fn test_returns_handler_result_verbatim() {
        let gate = ValidationGate::init(GateConfig::new().on_error(|_exchange, _report| {
            let request = GateRequest::build(Method::POST, "/replaced").unwrap();
            let mut replacement = Exchange::new(request);
            replacement.respond(GateResponse::with_status(StatusCode::IM_A_TEAPOT));
            replacement
        }))
        .unwrap();

        let result = gate.process(exchange("x", "", Some(mapping())));
        assert_eq!(result.request().path(), "/replaced");
        assert_eq!(
            result.response().map(|r| r.status_code()),
            Some(StatusCode::IM_A_TEAPOT)
        );
    }

    #[test]
    fn test_handler_may_leave_exchange_open() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let gate = ValidationGate::init(GateConfig::new().on_error(move |exchange, _report| {
            counter.fetch_add(1, Ordering::SeqCst);
            exchange
        }))
        .unwrap();

        let result = gate.process(exchange("x", "", Some(mapping())));
        assert!(!result.is_halted());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_json_error_handler() {
        let gate = ValidationGate::init(GateConfig::new().on_error(json_error_handler())).unwrap();
        let result = gate.process(exchange("x", "?active=maybe", Some(mapping())));

        assert!(result.is_halted());
        let response = result.response().unwrap();
        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.json_body().unwrap()["error"]["fields"],
            json!({
                "id": "could not parse x as integer",
                "active": "could not parse maybe as boolean",
            })
        );
    }

    #[test]
    fn test_json_error_handler_with_status() {
        let gate = ValidationGate::init(
            GateConfig::new().on_error(json_error_handler_with_status(StatusCode::BAD_REQUEST)),
        )
        .unwrap();
        let result = gate.process(exchange("x", "", Some(mapping())));

        assert_eq!(
            result.response().map(|r| r.status_code()),
            Some(StatusCode::BAD_REQUEST)
        );
    }

    #[tokio::test]
    async fn test_stage_call_matches_process() {
        let gate = ValidationGate::init(GateConfig::new().on_error(json_error_handler())).unwrap();
        assert_eq!(gate.name(), "ValidationGate");

        let passed = gate.call(exchange("7", "?active=false", Some(mapping()))).await;
        assert!(!passed.is_halted());

        let failed = gate.call(exchange("seven", "", Some(mapping()))).await;
        assert!(failed.is_halted());
    }

    #[test]
    #[traced_test]
    fn test_failure_is_logged() {
        let (gate, _) = recording_gate();
        gate.process(exchange("x", "", Some(mapping())));

        assert!(logs_contain("parameter validation failed"));
    }
}

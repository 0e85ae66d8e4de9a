//! # paramgate-http
//!
//! Request pipeline host for the paramgate validation stage.
//!
//! This crate provides:
//! - A router where each route may register a typed validation mapping
//! - An ordered stage pipeline with explicit halting
//! - The `ValidationGate` stage and stock JSON failure handlers
//! - Configuration, structured logging and graceful shutdown

pub mod config;
pub mod errors;
pub mod exchange;
pub mod logging;
pub mod middleware;
pub mod request;
pub mod response;
pub mod routing;
pub mod server;

pub use config::HttpConfig;
pub use errors::{HttpError, HttpResult};
pub use exchange::{Exchange, RouteMeta};
pub use logging::{init_logging, LoggingConfig};
pub use server::Server;

pub use middleware::{
    json_error_handler, json_error_handler_with_status, BoxFuture, ErrorHandler, GateConfig,
    LoggingStage, Pipeline, Stage, StageFuture, ValidationGate,
};
pub use request::GateRequest;
pub use response::{GateResponse, ResponseBody};
pub use routing::{HttpMethod, RoutePattern, RoutePatternError, Router};

// Core types from the validation crate
pub use paramgate_validation::{ErrorReport, ParamSource, ValidationMapping, ValidationOutcome};

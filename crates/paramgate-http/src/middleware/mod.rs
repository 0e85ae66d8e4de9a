//! Pipeline stages
//!
//! Stages run in order over an [`Exchange`](crate::exchange::Exchange).
//! A stage that halts the exchange stops the rest of the pipeline,
//! including the route handler.

pub mod logging;
pub mod pipeline;
pub mod validation;

pub use logging::LoggingStage;
pub use pipeline::{BoxFuture, Pipeline, Stage, StageFuture};
pub use validation::{
    json_error_handler, json_error_handler_with_status, ErrorHandler, GateConfig, ValidationGate,
};

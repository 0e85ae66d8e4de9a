//! Server with validated routes
//!
//! Run with `cargo run -p paramgate-http --example gate_server`, then try:
//!
//! ```text
//! curl -i 'http://127.0.0.1:3000/users/1?active=true'
//! curl -i 'http://127.0.0.1:3000/users/not-an-integer?active=maybe'
//! ```

use paramgate_http::{
    init_logging, json_error_handler, GateConfig, GateRequest, GateResponse, HttpConfig,
    HttpError, HttpResult, LoggingConfig, Router, Server, ValidationGate,
};
use paramgate_validation::{
    BooleanValidator, IntegerValidator, OneOfValidator, ParamValidator, ValidationMapping,
    ValidationOutcome,
};
use serde_json::json;

async fn show_user(request: GateRequest) -> HttpResult<GateResponse> {
    let id: i64 = request.path_param_parsed("id")?;
    let active = BooleanValidator::parse(request.query_param("active").map(String::as_str))
        .unwrap_or(false);

    GateResponse::ok()
        .json(&json!({ "id": id, "active": active }))
        .map_err(HttpError::from)
}

async fn list_users(request: GateRequest) -> HttpResult<GateResponse> {
    let sort = request
        .query_param("sort")
        .cloned()
        .unwrap_or_else(|| "name".to_string());
    let limit: Option<u32> = request.query_param_parsed("limit")?;

    Ok(GateResponse::ok().with_json_value(json!({
        "users": [],
        "sort": sort,
        "limit": limit.unwrap_or(20),
    })))
}

/// `limit` may be omitted; when present it must be an integer in 1..=100
fn optional_limit(value: Option<&str>) -> ValidationOutcome {
    match value {
        None => ValidationOutcome::valid(),
        Some(_) => IntegerValidator::new().range(1, 100).validate(value),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging(LoggingConfig::development().with_service("gate-server"))?;

    let router = Router::new()
        .get_validated(
            "/users/{id}",
            ValidationMapping::new()
                .field("id", IntegerValidator::new().min(1))
                .field("active", BooleanValidator::new()),
            show_user,
        )?
        .get_validated(
            "/users",
            ValidationMapping::new()
                .field("sort", OneOfValidator::new(["name", "created_at"]))
                .field("limit", optional_limit)
                .field("active", BooleanValidator::new()),
            list_users,
        )?;

    let mut server = Server::new(HttpConfig::from_env()?)?;
    server
        .use_router(router)
        .use_stage(ValidationGate::init(GateConfig::new().on_error(json_error_handler()))?);

    server.listen().await?;
    Ok(())
}

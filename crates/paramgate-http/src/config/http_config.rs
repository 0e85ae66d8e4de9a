//! HTTP host configuration
//!
//! Settings for the pipeline host. The validation gate takes its own
//! `GateConfig` at installation time and reads nothing from here.

use super::defaults::HttpDefaults;
use crate::errors::{HttpError, HttpResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;

/// HTTP host specific configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Install the request logging stage ahead of user stages
    pub log_requests: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: HttpDefaults::HOST.to_string(),
            port: HttpDefaults::PORT,
            log_requests: HttpDefaults::LOG_REQUESTS,
        }
    }
}

impl HttpConfig {
    /// Check the configuration is usable
    pub fn validate(&self) -> HttpResult<()> {
        if self.host.trim().is_empty() {
            return Err(HttpError::config("Host must not be empty"));
        }

        self.socket_addr().map(|_| ())
    }

    /// Resolve the bind address
    pub fn socket_addr(&self) -> HttpResult<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| HttpError::config(format!("Invalid address '{}': {}", addr, e)))
    }

    /// Load configuration from `PARAMGATE_*` environment variables
    pub fn from_env() -> HttpResult<Self> {
        let host = get_env_or_default("PARAMGATE_HOST", HttpDefaults::HOST);

        let port = get_env_or_default("PARAMGATE_PORT", &HttpDefaults::PORT.to_string())
            .parse::<u16>()
            .map_err(|_| {
                HttpError::config(format!(
                    "PARAMGATE_PORT must be a valid port number, got '{}'",
                    env::var("PARAMGATE_PORT").unwrap_or_default()
                ))
            })?;

        let log_requests = get_env_or_default(
            "PARAMGATE_LOG_REQUESTS",
            &HttpDefaults::LOG_REQUESTS.to_string(),
        )
        .parse::<bool>()
        .map_err(|_| {
            HttpError::config(format!(
                "PARAMGATE_LOG_REQUESTS must be true or false, got '{}'",
                env::var("PARAMGATE_LOG_REQUESTS").unwrap_or_default()
            ))
        })?;

        let config = HttpConfig {
            host,
            port,
            log_requests,
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the bind host
    pub fn with_host<S: Into<String>>(mut self, host: S) -> Self {
        self.host = host.into();
        self
    }

    /// Set the bind port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Toggle the request logging stage
    pub fn with_request_logging(mut self, enabled: bool) -> Self {
        self.log_requests = enabled;
        self
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that the endpoint is a well-formed HTTP(S) URL
//! - Validate value ranges (timeouts > 0, poll interval > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SdkConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is handed to the runner
//! - Key material and the contract address are parsed by the runner, so
//!   their failures carry the step that consumes them

use thiserror::Error;

use crate::config::schema::SdkConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("rpc_url '{0}' is not a valid URL")]
    InvalidRpcUrl(String),

    #[error("rpc_url scheme '{0}' is not supported: only HTTP transports (http, https) are supported")]
    UnsupportedScheme(String),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &SdkConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match url::Url::parse(&config.rpc_url) {
        Ok(url) => {
            if !matches!(url.scheme(), "http" | "https") {
                errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
            }
        }
        Err(_) => errors.push(ValidationError::InvalidRpcUrl(config.rpc_url.clone())),
    }

    if config.blockchain.rpc_timeout_secs == 0 {
        errors.push(ValidationError::Zero("blockchain.rpc_timeout_secs"));
    }
    if config.blockchain.poll_interval_ms == 0 {
        errors.push(ValidationError::Zero("blockchain.poll_interval_ms"));
    }
    if config.workflow.token_name.is_empty() {
        errors.push(ValidationError::Empty("workflow.token_name"));
    }
    if config.workflow.token_symbol.is_empty() {
        errors.push(ValidationError::Empty("workflow.token_symbol"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

//! Configuration validation.
//!
//! Semantic checks that run after serde has accepted the file. All
//! violations are collected and returned together.

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic violation in the configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener bind address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("metrics address {0:?} is not a valid socket address")]
    InvalidMetricsAddress(String),

    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,

    #[error("symbol at index {0} has an empty name")]
    EmptySymbolName(usize),

    #[error("symbol {0:?} is defined more than once")]
    DuplicateSymbol(String),
}

/// Validate a configuration, returning every violation found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    let mut seen = HashSet::new();
    for (i, sym) in config.symbols.iter().enumerate() {
        if sym.name.is_empty() {
            errors.push(ValidationError::EmptySymbolName(i));
        } else if !seen.insert(sym.name.as_str()) {
            errors.push(ValidationError::DuplicateSymbol(sym.name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

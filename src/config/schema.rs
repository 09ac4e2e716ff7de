//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the docstring server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Symbols served by the bundled in-memory table.
    pub symbols: Vec<SymbolConfig>,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics exporter.
    pub metrics_enabled: bool,

    /// Metrics exporter bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

/// One symbol exposed by the in-memory documentation table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SymbolConfig {
    /// Symbol name, matched exactly and case-sensitively.
    pub name: String,

    /// Documentation for the symbol's use as a named value.
    #[serde(default)]
    pub value_doc: Option<String>,

    /// Documentation for the symbol's use as a callable.
    #[serde(default)]
    pub callable_doc: Option<String>,

    /// Whether the symbol is bound as a callable definition.
    #[serde(default)]
    pub callable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_deserializes_with_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(config.symbols.is_empty());
    }

    #[test]
    fn test_symbols_section_deserializes() {
        let config: ServerConfig = toml::from_str(
            r#"
            [[symbols]]
            name = "pi"
            value_doc = "Circle constant."

            [[symbols]]
            name = "greet"
            callable_doc = "Says hello."
            callable = true
            "#,
        )
        .unwrap();

        assert_eq!(config.symbols.len(), 2);
        assert_eq!(config.symbols[0].name, "pi");
        assert!(!config.symbols[0].callable);
        assert!(config.symbols[1].callable);
        assert_eq!(config.symbols[1].callable_doc.as_deref(), Some("Says hello."));
    }
}

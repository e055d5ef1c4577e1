//! Server configuration loaded from environment variables.
//!
//! - `HOST`: bind host (default `127.0.0.1`)
//! - `PORT`: bind port (default `8080`)
//! - `RUST_LOG`: tracing filter (default `info,todo_server=debug,tower_http=debug`)

use std::env;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_FILTER: &str = "info,todo_server=debug,tower_http=debug";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset keys fall back to
    /// the defaults; a set but unparsable `PORT` is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                message: format!("{raw:?}: {e}"),
            })?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn unset_vars_use_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn set_vars_override_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "3000"),
            ("RUST_LOG", "warn"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "PORT"));
    }
}

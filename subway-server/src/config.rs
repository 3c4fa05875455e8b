//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "SUBWAY_ADDR";

/// Environment variable holding the static assets directory.
pub const STATIC_DIR_VAR: &str = "SUBWAY_STATIC_DIR";

/// Environment variable holding the seed file path.
pub const SEED_VAR: &str = "SUBWAY_SEED";

/// Errors that can occur while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value:?}")]
    InvalidAddr { var: &'static str, value: String },
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Directory served under `/static`.
    pub static_dir: String,

    /// Seed file applied at startup, if any.
    pub seed: Option<PathBuf>,
}

impl ServerConfig {
    /// Read configuration from the process environment, falling back to
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let addr: SocketAddr = match get(ADDR_VAR) {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value,
            })?,
            None => defaults.addr,
        };

        Ok(Self {
            addr,
            static_dir: get(STATIC_DIR_VAR).unwrap_or(defaults.static_dir),
            seed: get(SEED_VAR).map(PathBuf::from).or(defaults.seed),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: "static".to_string(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]).unwrap(), ServerConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = config(&[
            (ADDR_VAR, "0.0.0.0:8080"),
            (STATIC_DIR_VAR, "/srv/static"),
            (SEED_VAR, "seed/network.json"),
        ])
        .unwrap();

        assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.static_dir, "/srv/static");
        assert_eq!(config.seed, Some(PathBuf::from("seed/network.json")));
    }

    #[test]
    fn empty_values_are_unset() {
        let config = config(&[(SEED_VAR, ""), (ADDR_VAR, "  ")]).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn invalid_addr() {
        let err = config(&[(ADDR_VAR, "localhost")]).unwrap_err();
        assert!(err.to_string().contains("SUBWAY_ADDR"));
    }
}

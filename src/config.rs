//! Runtime configuration read from environment variables.

use crate::error::ConfigError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";
pub const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 5555);
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub body_limit_bytes: usize,
    /// Insert sample bakeries on startup when the database is empty.
    pub seed_database: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: DEFAULT_BIND_ADDR,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            seed_database: false,
        }
    }
}

impl Config {
    /// Read `DATABASE_URL`, `BIND_ADDR`, `DATABASE_MAX_CONNECTIONS`,
    /// `BODY_LIMIT_BYTES` and `SEED_DATABASE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind_addr = parse_var("BIND_ADDR", get("BIND_ADDR"))?.unwrap_or(DEFAULT_BIND_ADDR);
        let max_connections =
            parse_var("DATABASE_MAX_CONNECTIONS", get("DATABASE_MAX_CONNECTIONS"))?
                .unwrap_or(DEFAULT_MAX_CONNECTIONS);
        if max_connections == 0 {
            return Err(ConfigError::InvalidVar {
                var: "DATABASE_MAX_CONNECTIONS",
                message: "must be at least 1".into(),
            });
        }
        let body_limit_bytes = parse_var("BODY_LIMIT_BYTES", get("BODY_LIMIT_BYTES"))?
            .unwrap_or(DEFAULT_BODY_LIMIT_BYTES);
        let seed_database = match get("SEED_DATABASE") {
            Some(v) => parse_flag(&v).ok_or_else(|| ConfigError::InvalidVar {
                var: "SEED_DATABASE",
                message: format!("expected true/false, got '{}'", v),
            })?,
            None => false,
        };

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
            body_limit_bytes,
            seed_database,
        })
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

fn parse_var<T>(var: &'static str, value: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|v| {
            v.parse().map_err(|e: T::Err| ConfigError::InvalidVar {
                var,
                message: e.to_string(),
            })
        })
        .transpose()
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.bind_addr.port(), 5555);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert!(!config.seed_database);
        assert!(!config.is_in_memory());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
            ("BODY_LIMIT_BYTES", "1024"),
            ("SEED_DATABASE", "TRUE"),
        ])
        .unwrap();
        assert!(config.is_in_memory());
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.body_limit_bytes, 1024);
        assert!(config.seed_database);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[("DATABASE_URL", "  ")]).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn rejects_bad_values() {
        let err = config_from(&[("BIND_ADDR", "nowhere")]).unwrap_err();
        assert!(err.to_string().contains("BIND_ADDR"));
        let err = config_from(&[("DATABASE_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_MAX_CONNECTIONS"));
        let err = config_from(&[("SEED_DATABASE", "maybe")]).unwrap_err();
        assert!(err.to_string().contains("SEED_DATABASE"));
        let err = config_from(&[("BODY_LIMIT_BYTES", "lots")]).unwrap_err();
        assert!(err.to_string().contains("BODY_LIMIT_BYTES"));
    }
}

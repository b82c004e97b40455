//! Server settings resolved from command line, environment and TOML

use ccnotes_common::config::{CompiledDefaults, TomlConfig};
use ccnotes_common::{Error, Result};
use std::net::{IpAddr, SocketAddr};

/// Listen address of the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

impl ServerConfig {
    /// Resolve bind and port
    ///
    /// `cli_bind`/`cli_port` already include their environment variables
    /// (clap `env`), so the order is CLI, env, TOML, compiled default.
    pub fn resolve(cli_bind: Option<String>, cli_port: Option<u16>, toml: &TomlConfig) -> Self {
        let defaults = CompiledDefaults::for_current_platform();
        Self {
            bind: cli_bind
                .or_else(|| toml.bind.clone())
                .unwrap_or(defaults.bind),
            port: cli_port.or(toml.port).unwrap_or(defaults.port),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .bind
            .parse()
            .map_err(|_| Error::Config(format!("Invalid bind address: {}", self.bind)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// `EnvFilter` directives used when `RUST_LOG` is unset
///
/// A bare level applies to this crate and to HTTP tracing; anything else is
/// taken as a directive string.
pub fn default_log_filter(level: &str) -> String {
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!(
            "ccnotes_web={level},ccnotes_common={level},tower_http={level}",
            level = level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_beats_toml_beats_default() {
        let toml = TomlConfig {
            bind: Some("0.0.0.0".to_string()),
            port: Some(8080),
            ..Default::default()
        };

        let config = ServerConfig::resolve(None, Some(9000), &toml);
        assert_eq!(config.bind, "0.0.0.0");
        assert_eq!(config.port, 9000);

        let config = ServerConfig::resolve(None, None, &TomlConfig::default());
        assert_eq!(config.bind, "127.0.0.1");
        assert_eq!(config.port, 5780);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            bind: "127.0.0.1".to_string(),
            port: 5780,
        };
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:5780");

        let bad = ServerConfig {
            bind: "localhost:80".to_string(),
            port: 1,
        };
        assert!(bad.socket_addr().is_err());
    }

    #[test]
    fn test_default_log_filter() {
        assert_eq!(
            default_log_filter("info"),
            "ccnotes_web=info,ccnotes_common=info,tower_http=info"
        );
        assert_eq!(default_log_filter("ccnotes_web=trace"), "ccnotes_web=trace");
    }
}

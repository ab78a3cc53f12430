//! Service configuration
//!
//! Layering, lowest priority first: built-in defaults for the service kind,
//! an optional TOML file, then `REPOHUB_*` environment variables
//! (`__` separates nested keys, e.g. `REPOHUB_UPSTREAMS__REPO_URL`).
//! Binaries apply CLI overrides on top of the loaded value.

use std::{
    net::{IpAddr, SocketAddr},
    path::Path,
};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "REPOHUB";

/// Loopback host every service binds to by default
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid bind address {host}:{port}")]
    InvalidAddress { host: String, port: u16 },
}

/// The four processes of the service-based demo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Gateway,
    User,
    Project,
    Repo,
}

impl ServiceKind {
    /// Port the service listens on unless configured otherwise
    pub fn default_port(&self) -> u16 {
        match self {
            ServiceKind::Gateway => 5000,
            ServiceKind::User => 5001,
            ServiceKind::Project => 5002,
            ServiceKind::Repo => 5003,
        }
    }

    /// Name used in logs and health responses
    pub fn name(&self) -> &'static str {
        match self {
            ServiceKind::Gateway => "gateway",
            ServiceKind::User => "user",
            ServiceKind::Project => "project",
            ServiceKind::Repo => "repo",
        }
    }

    /// Default base URL for reaching this service on loopback
    pub fn default_url(&self) -> String {
        format!("http://{}:{}", DEFAULT_HOST, self.default_port())
    }
}

/// Base URLs of the backend services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub user_url: String,
    pub project_url: String,
    pub repo_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            user_url: ServiceKind::User.default_url(),
            project_url: ServiceKind::Project.default_url(),
            repo_url: ServiceKind::Repo.default_url(),
        }
    }
}

/// Runtime configuration for one service process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Fallback log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Timeout for calls to other services, in seconds; unset means no limit
    #[serde(default)]
    pub upstream_timeout_secs: Option<u64>,
    /// Where the other services live
    pub upstreams: UpstreamConfig,
}

impl ServiceConfig {
    /// Defaults for a service kind
    pub fn defaults(kind: ServiceKind) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: kind.default_port(),
            log_level: "info".to_string(),
            upstream_timeout_secs: None,
            upstreams: UpstreamConfig::default(),
        }
    }

    /// Load configuration for a service kind
    pub fn load(kind: ServiceKind, path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = Self::defaults(kind);

        let mut builder = Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_level", defaults.log_level)?
            .set_default("upstreams.user_url", defaults.upstreams.user_url)?
            .set_default("upstreams.project_url", defaults.upstreams.project_url)?
            .set_default("upstreams.repo_url", defaults.upstreams.repo_url)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path.to_path_buf()).required(false));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let service_config: ServiceConfig = config.try_deserialize()?;
        tracing::debug!(service = kind.name(), ?service_config, "Configuration loaded");
        Ok(service_config)
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|_| ConfigError::InvalidAddress {
            host: self.host.clone(),
            port: self.port,
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Serializes tests that read or write `REPOHUB_*` variables
#[cfg(test)]
pub(crate) static ENV_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Sets environment variables, removing them again on drop
    struct EnvVars(Vec<&'static str>);

    impl EnvVars {
        fn set(vars: &[(&'static str, &str)]) -> Self {
            for (key, value) in vars {
                std::env::set_var(key, value);
            }
            Self(vars.iter().map(|(key, _)| *key).collect())
        }
    }

    impl Drop for EnvVars {
        fn drop(&mut self) {
            for key in &self.0 {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_default_ports() {
        assert_eq!(ServiceKind::Gateway.default_port(), 5000);
        assert_eq!(ServiceKind::User.default_port(), 5001);
        assert_eq!(ServiceKind::Project.default_port(), 5002);
        assert_eq!(ServiceKind::Repo.default_port(), 5003);
    }

    #[test]
    fn test_defaults_point_at_loopback() {
        let config = ServiceConfig::defaults(ServiceKind::Project);
        assert_eq!(config.port, 5002);
        assert_eq!(config.upstreams.repo_url, "http://127.0.0.1:5003");
        assert_eq!(config.upstream_timeout_secs, None);
        assert_eq!(
            config.bind_addr().unwrap(),
            "127.0.0.1:5002".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_load_from_file() {
        let _env = ENV_LOCK.lock();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "port = 6003\nlog_level = \"debug\"\n\n[upstreams]\nrepo_url = \"http://10.0.0.5:7000\""
        )
        .unwrap();

        let config = ServiceConfig::load(ServiceKind::Repo, Some(file.path())).unwrap();
        assert_eq!(config.port, 6003);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.upstreams.repo_url, "http://10.0.0.5:7000");
        assert_eq!(config.upstreams.user_url, "http://127.0.0.1:5001");
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let _env = ENV_LOCK.lock();
        let dir = tempfile::tempdir().unwrap();
        let config =
            ServiceConfig::load(ServiceKind::User, Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.port, 5001);
    }

    #[test]
    fn test_environment_wins_over_file_and_defaults() {
        let _env = ENV_LOCK.lock();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "port = 6003\nupstream_timeout_secs = 10\n\n[upstreams]\nrepo_url = \"http://10.0.0.5:7000\""
        )
        .unwrap();
        let _vars = EnvVars::set(&[
            ("REPOHUB_PORT", "6111"),
            ("REPOHUB_LOG_LEVEL", "debug"),
            ("REPOHUB_UPSTREAMS__REPO_URL", "http://10.1.1.1:9"),
        ]);

        let config = ServiceConfig::load(ServiceKind::Project, Some(file.path())).unwrap();

        assert_eq!(config.port, 6111);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.upstreams.repo_url, "http://10.1.1.1:9");
        assert_eq!(config.upstream_timeout_secs, Some(10));
        assert_eq!(config.upstreams.user_url, "http://127.0.0.1:5001");
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn test_environment_without_file() {
        let _env = ENV_LOCK.lock();
        let _vars = EnvVars::set(&[("REPOHUB_UPSTREAM_TIMEOUT_SECS", "4")]);

        let config = ServiceConfig::load(ServiceKind::Gateway, None).unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.upstream_timeout_secs, Some(4));
    }

    #[test]
    fn test_overrides() {
        let config = ServiceConfig::defaults(ServiceKind::Gateway)
            .with_overrides(Some("0.0.0.0".to_string()), Some(8080));
        assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_host() {
        let config = ServiceConfig::defaults(ServiceKind::Gateway)
            .with_overrides(Some("not-an-ip".to_string()), None);
        assert!(matches!(
            config.bind_addr(),
            Err(ConfigError::InvalidAddress { .. })
        ));
    }
}

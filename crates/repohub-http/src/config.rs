//! HTTP client configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Whole-request timeout; `None` waits as long as the upstream takes
    #[serde(default)]
    pub timeout: Option<Duration>,

    /// Connection timeout
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: Duration,

    /// Custom user agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Pool idle timeout
    #[serde(default = "default_pool_idle_timeout")]
    pub pool_idle_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: default_connect_timeout(),
            user_agent: default_user_agent(),
            pool_idle_timeout: default_pool_idle_timeout(),
        }
    }
}

impl HttpConfig {
    /// Config for calls between services; requests only time out when
    /// `timeout_secs` is set
    pub fn upstream(timeout_secs: Option<u64>) -> Self {
        Self {
            timeout: timeout_secs.map(Duration::from_secs),
            ..Self::default()
        }
    }
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(5)
}

fn default_user_agent() -> String {
    format!("repohub/{}", env!("CARGO_PKG_VERSION"))
}

fn default_pool_idle_timeout() -> Duration {
    Duration::from_secs(90)
}

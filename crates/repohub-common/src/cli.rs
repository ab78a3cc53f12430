//! Command-line flags shared by the service binaries

use std::path::PathBuf;

use clap::Args;

use crate::config::{ConfigError, ServiceConfig, ServiceKind};

/// Flags every service binary accepts
#[derive(Debug, Clone, Default, Args)]
pub struct ServiceArgs {
    /// TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Host to bind (overrides configuration)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides configuration)
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ServiceArgs {
    /// Load configuration for `kind` and apply these flags on top
    pub fn load(&self, kind: ServiceKind) -> Result<ServiceConfig, ConfigError> {
        Ok(ServiceConfig::load(kind, self.config.as_deref())?
            .with_overrides(self.host.clone(), self.port))
    }
}

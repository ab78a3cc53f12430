//! Shared building blocks for the repohub services
//!
//! - Records stored by each service and their expanded views
//! - `ServiceError` with JSON error bodies, `IdPath` id extractor
//! - Layered configuration (defaults, TOML file, `REPOHUB_*` environment)
//! - Tracing initialization and request logging
//! - Locked in-memory id tables
//! - Server bootstrap with graceful shutdown

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod server;
pub mod table;

pub use cli::ServiceArgs;
pub use config::{ConfigError, ServiceConfig, ServiceKind, UpstreamConfig};
pub use error::{required_id, required_param, EntityKind, ServiceError, ServiceResult};
pub use extract::IdPath;
pub use models::{EntityId, HealthResponse, Project, ProjectView, Repo, User, UserView};
pub use server::Uptime;
pub use table::EntityTable;

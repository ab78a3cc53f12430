//! Server bootstrap shared by the four services

use std::{io, net::SocketAddr, time::Instant};

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tracing::info;

use crate::{config::ServiceKind, middleware::logging_middleware, models::HealthResponse};

/// Process start time and identity, used for health reporting
#[derive(Debug, Clone, Copy)]
pub struct Uptime {
    kind: ServiceKind,
    started: Instant,
}

impl Uptime {
    /// Start the uptime clock for a service
    pub fn start(kind: ServiceKind) -> Self {
        Self {
            kind,
            started: Instant::now(),
        }
    }

    /// Build the health response body
    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "healthy".to_string(),
            service: self.kind.name().to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime: self.started.elapsed().as_secs(),
        }
    }
}

/// Wrap a router with request logging
pub fn with_request_logging(router: Router) -> Router {
    router.layer(middleware::from_fn(logging_middleware))
}

/// Bind `addr` and serve until Ctrl-C
pub async fn serve(kind: ServiceKind, router: Router, addr: SocketAddr) -> io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve_listener(kind, router, listener).await
}

/// Serve on an already bound listener until Ctrl-C
pub async fn serve_listener(
    kind: ServiceKind,
    router: Router,
    listener: TcpListener,
) -> io::Result<()> {
    let local = listener.local_addr()?;
    info!(service = kind.name(), address = %local, "Service listening");

    axum::serve(listener, with_request_logging(router))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(service = kind.name(), "Service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

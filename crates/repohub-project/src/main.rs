use std::sync::Arc;

use clap::Parser;
use repohub_common::{logging, server, ServiceArgs, ServiceKind};
use repohub_http::{shared_client, HttpConfig, HttpRepoDirectory};
use repohub_project::{router, AppState};

#[derive(Parser)]
#[command(name = "repohub-project")]
#[command(about = "Project store service")]
struct Cli {
    #[command(flatten)]
    service: ServiceArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.service.load(ServiceKind::Project)?;
    logging::init(&config.log_level);

    let client = shared_client(HttpConfig::upstream(config.upstream_timeout_secs))?;
    let repos = HttpRepoDirectory::new(client, config.upstreams.repo_url.clone());
    tracing::info!(repo_service = repos.base_url(), "Resolving repos remotely");

    let state = AppState::new(Arc::new(repos));
    server::serve(ServiceKind::Project, router(state), config.bind_addr()?).await?;
    Ok(())
}

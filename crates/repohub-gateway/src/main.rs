use clap::Parser;
use repohub_common::{logging, server, ServiceArgs, ServiceKind};
use repohub_http::{shared_client, HttpConfig};
use repohub_gateway::{router, AppState};

#[derive(Parser)]
#[command(name = "repohub-gateway")]
#[command(about = "API gateway for the repohub services")]
struct Cli {
    #[command(flatten)]
    service: ServiceArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.service.load(ServiceKind::Gateway)?;
    logging::init(&config.log_level);

    tracing::info!(
        user = %config.upstreams.user_url,
        project = %config.upstreams.project_url,
        repo = %config.upstreams.repo_url,
        "Upstream services"
    );

    let client = shared_client(HttpConfig::upstream(config.upstream_timeout_secs))?;
    let state = AppState::new(client, config.upstreams.clone());
    server::serve(ServiceKind::Gateway, router(state), config.bind_addr()?).await?;
    Ok(())
}

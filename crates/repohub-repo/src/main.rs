use clap::Parser;
use repohub_common::{logging, server, ServiceArgs, ServiceKind};
use repohub_repo::{router, AppState};

#[derive(Parser)]
#[command(name = "repohub-repo")]
#[command(about = "Repo store service")]
struct Cli {
    #[command(flatten)]
    service: ServiceArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.service.load(ServiceKind::Repo)?;
    logging::init(&config.log_level);

    server::serve(ServiceKind::Repo, router(AppState::new()), config.bind_addr()?).await?;
    Ok(())
}

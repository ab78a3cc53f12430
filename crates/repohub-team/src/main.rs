//! Team roster CLI

use std::{io, path::PathBuf};

use clap::{Parser, Subcommand};
use repohub_common::logging;
use repohub_team::{TeamData, TeamManager, TerminalPresentation, DEFAULT_TEAM_FILE};

#[derive(Parser)]
#[command(name = "repohub-team")]
#[command(about = "Manage a team roster stored in a JSON file")]
struct Cli {
    /// Roster file
    #[arg(short, long, default_value = DEFAULT_TEAM_FILE)]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a member
    Add { name: String },
    /// Remove a member
    Remove { name: String },
    /// Show all members
    List,
    /// Add Alice and Bob, then show the team
    Demo,
}

fn main() -> anyhow::Result<()> {
    logging::init("warn");
    let cli = Cli::parse();

    let repository = TeamData::open(&cli.file)?;
    tracing::debug!(file = %repository.path().display(), "Team file opened");
    let mut presentation = TerminalPresentation::new(TeamManager::new(repository), io::stdout());

    match cli.command {
        Commands::Add { name } => presentation.add_member(&name)?,
        Commands::Remove { name } => presentation.remove_member(&name)?,
        Commands::List => presentation.show_team_members()?,
        Commands::Demo => presentation.run_demo()?,
    }
    Ok(())
}

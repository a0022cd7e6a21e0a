//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use spl_board::{
    cli::{Commands, SPL},
    commands::{
        data::handle_data, leaders::handle_leaders, players::handle_players,
        rankings::handle_rankings, scorecard::handle_scorecard, tournament::handle_tournament,
    },
    Result,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = SPL::parse();

    // RUST_LOG wins over --log-level; logs go to stderr so --json stays clean.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&app.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match app.command {
        Commands::Rankings {
            source,
            kind,
            limit,
        } => handle_rankings(&source, kind, limit).await?,

        Commands::Leaders { source } => handle_leaders(&source).await?,

        Commands::Players {
            source,
            search,
            sort,
        } => handle_players(&source, search, sort).await?,

        Commands::Tournament {
            source,
            name,
            category,
            limit,
            list,
        } => handle_tournament(&source, name, category, limit, list).await?,

        Commands::Scorecard {
            source,
            tournament,
            match_id,
        } => handle_scorecard(&source, tournament, match_id).await?,

        Commands::Data { source } => handle_data(&source).await?,
    }

    Ok(())
}

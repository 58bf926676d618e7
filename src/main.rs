//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use yahoo_fbb::{
    cli::{AuthCmd, Commands, GetCmd, Yahoo},
    commands::{
        auth::{handle_login, handle_status},
        leagues::handle_leagues,
        player_stats::{handle_player_stats, PlayerStatsParams},
        rank::{handle_rank, RankParams},
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Yahoo::parse();

    match app.command {
        Commands::Auth { cmd } => match cmd {
            AuthCmd::Login => handle_login().await?,
            AuthCmd::Status => handle_status()?,
        },

        Commands::Get { cmd } => match cmd {
            GetCmd::Leagues { game, debug } => handle_leagues(game, debug).await?,

            GetCmd::PlayerStats {
                filters,
                week,
                output,
                refresh,
                json,
            } => {
                handle_player_stats(PlayerStatsParams {
                    filters,
                    week,
                    output,
                    refresh,
                    json,
                })
                .await?
            }

            GetCmd::Rank {
                filters,
                top,
                output,
                refresh,
                json,
            } => {
                handle_rank(RankParams {
                    filters,
                    top,
                    output,
                    refresh,
                    json,
                })
                .await?
            }
        },
    }

    Ok(())
}

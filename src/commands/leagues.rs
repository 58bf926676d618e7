//! `get leagues` command implementation

use crate::{
    auth::{Credentials, Session},
    error::Result,
    yahoo::{flatten::flatten_user_leagues, http::YahooClient},
};

/// List the signed-in user's fantasy leagues for a game code.
pub async fn handle_leagues(game: String, debug: bool) -> Result<()> {
    let client = YahooClient::new(Session::new(Credentials::from_env()?));

    let payload = client.get_user_leagues(debug, &game).await?;
    let leagues = flatten_user_leagues(&payload)?;

    if leagues.is_empty() {
        println!("No {} leagues found for the signed-in user", game);
        return Ok(());
    }

    println!("Available leagues:");
    for league in leagues {
        println!(
            "  - {} (ID: {}, season {})",
            league.name, league.league_id, league.season
        );
    }

    Ok(())
}

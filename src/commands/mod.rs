//! Command implementations for the Yahoo Fantasy Basketball CLI

pub mod auth;
pub mod common;
pub mod leagues;
pub mod player_stats;
pub mod rank;

use crate::{
    cli::types::LeagueId,
    error::{Result, YahooError},
    LEAGUE_ID_ENV_VAR,
};

/// Resolve league ID from option or environment variable
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    league_id
        .or_else(|| {
            std::env::var(LEAGUE_ID_ENV_VAR)
                .ok()
                .and_then(|s| s.parse::<LeagueId>().ok())
        })
        .ok_or_else(|| YahooError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        })
}

//! Shared setup for `get` commands.

use std::path::PathBuf;

use crate::{
    auth::{Credentials, Session},
    cli::{types::LeagueId, CommonFilters},
    error::Result,
    yahoo::{cache::load_or_fetch_league_meta, http::YahooClient, types::LeagueMeta},
};

use super::resolve_league_id;

/// Resources most commands need: a resolved league and an authenticated
/// client with the league's metadata already loaded.
pub struct CommandContext {
    pub league_id: LeagueId,
    pub client: YahooClient,
    pub meta: LeagueMeta,
}

impl CommandContext {
    pub async fn new(filters: &CommonFilters, refresh: bool) -> Result<Self> {
        let league_id = resolve_league_id(filters.league_id)?;
        let client = YahooClient::new(Session::new(Credentials::from_env()?));

        if filters.verbose {
            println!("Loading league metadata...");
        }
        let meta =
            load_or_fetch_league_meta(&client, filters.debug, &filters.game, league_id, refresh)
                .await?;

        Ok(Self {
            league_id,
            client,
            meta,
        })
    }
}

/// Default output location under `data/`.
pub fn default_output_path(file_name: &str) -> PathBuf {
    PathBuf::from("data").join(file_name)
}

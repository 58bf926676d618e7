//! Disk-cached league metadata.

use crate::{
    cli::types::LeagueId,
    core::{league_meta_path, try_read_to_string, write_string},
    error::Result,
    yahoo::{flatten::flatten_league_meta, http::YahooClient, types::LeagueMeta},
};

/// Try the cache first. On a miss or `refresh == true`, fetch from Yahoo,
/// flatten the metadata, and re-write the cache.
pub async fn load_or_fetch_league_meta(
    client: &YahooClient,
    debug: bool,
    game: &str,
    league_id: LeagueId,
    refresh: bool,
) -> Result<LeagueMeta> {
    let path = league_meta_path(game, league_id.as_u32());

    // 1) Try cache (unless refresh)
    if !refresh {
        if let Some(s) = try_read_to_string(&path) {
            if let Ok(meta) = serde_json::from_str::<LeagueMeta>(&s) {
                return Ok(meta);
            }
        }
    }

    // 2) Fetch from the API
    let payload = client.get_league_meta(debug, game, league_id).await?;
    let meta = flatten_league_meta(&payload)?;

    // 3) Write cache; a failed write is not fatal
    if let Ok(json_str) = serde_json::to_string_pretty(&meta) {
        let _ = write_string(&path, &json_str);
    }

    Ok(meta)
}

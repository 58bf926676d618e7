//! Flattening of Yahoo's index-keyed JSON payloads.
//!
//! Yahoo's JSON mirrors its XML: collections are objects keyed by `"0"`,
//! `"1"`, ... plus a `"count"` field, and each resource is a list of one-key
//! fragment objects. Rather than model that shape with serde, these functions
//! walk the raw `Value` and surface a `Parse` error naming the first missing
//! field.

use serde_json::Value;

use crate::cli::types::{PlayerId, Season, StatCategory, Week};
use crate::error::{Result, YahooError};
use crate::export::PlayerStatRecord;
use crate::yahoo::types::LeagueMeta;


fn missing(field: &str) -> YahooError {
    YahooError::Parse {
        message: format!("missing field: {}", field),
    }
}

/// Look up a field across a resource's fragment list.
fn fragment<'a>(fragments: &'a [Value], key: &str) -> Option<&'a Value> {
    fragments.iter().find_map(|f| f.get(key))
}

fn fragment_str<'a>(fragments: &'a [Value], key: &str) -> Option<&'a str> {
    fragment(fragments, key).and_then(|v| v.as_str())
}

/// Yahoo emits numbers both bare and as strings; accept either.
fn value_as_u64(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}

fn value_to_string(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

/// Walk an index-keyed collection (`"0"`, `"1"`, ..., `"count"`) in order.
fn collection_entries(collection: &Value) -> Vec<&Value> {
    let count = collection
        .get("count")
        .and_then(value_as_u64)
        .unwrap_or(0) as usize;
    (0..count)
        .filter_map(|i| collection.get(i.to_string().as_str()))
        .collect()
}

/// Extract the player entries from one `league/{key}/players/stats` page.
///
/// A league resource with no `players` collection is an empty page, not an
/// error: Yahoo omits the collection entirely when a page starts past the end
/// of the player pool.
pub fn players_in_page(payload: &Value) -> Result<Vec<&Value>> {
    let league = payload
        .get("fantasy_content")
        .ok_or_else(|| missing("fantasy_content"))?
        .get("league")
        .ok_or_else(|| missing("fantasy_content.league"))?
        .as_array()
        .ok_or_else(|| missing("fantasy_content.league[]"))?;

    let Some(players) = league.iter().find_map(|part| part.get("players")) else {
        return Ok(Vec::new());
    };

    collection_entries(players)
        .into_iter()
        .map(|entry| entry.get("player").ok_or_else(|| missing("players.N.player")))
        .collect()
}

/// Flatten one player resource into per-category records.
///
/// Unknown stat ids are skipped; a missing expected field is a `Parse` error.
pub fn flatten_player(entry: &Value, season: Season) -> Result<Vec<PlayerStatRecord>> {
    let parts = entry.as_array().ok_or_else(|| missing("player[]"))?;
    let fragments = parts
        .first()
        .and_then(|v| v.as_array())
        .ok_or_else(|| missing("player[0] fragments"))?;

    let player_id = fragment(fragments, "player_id")
        .and_then(value_as_u64)
        .ok_or_else(|| missing("player_id"))?;

    let player_name = fragment(fragments, "name")
        .and_then(|n| n.get("full"))
        .and_then(|v| v.as_str())
        .ok_or_else(|| missing("name.full"))?
        .to_string();

    let team = fragment_str(fragments, "editorial_team_abbr")
        .unwrap_or_default()
        .to_string();

    let position = fragment_str(fragments, "primary_position")
        .or_else(|| fragment_str(fragments, "display_position"))
        .unwrap_or_default()
        .to_string();

    let stats_block = parts
        .iter()
        .find_map(|part| part.get("player_stats"))
        .ok_or_else(|| missing("player_stats"))?;

    let week = stats_block
        .get("week")
        .and_then(value_as_u64)
        .map(|w| Week::new(w as u16));

    let stats = stats_block
        .get("stats")
        .and_then(|s| s.as_array())
        .ok_or_else(|| missing("player_stats.stats"))?;

    let mut records = Vec::new();
    for item in stats {
        let stat = item.get("stat").ok_or_else(|| missing("stats.N.stat"))?;
        let stat_id = stat
            .get("stat_id")
            .and_then(value_as_u64)
            .ok_or_else(|| missing("stat.stat_id"))? as u32;

        let Some(stat_category) = StatCategory::from_stat_id(stat_id) else {
            continue;
        };

        let stat_value = stat
            .get("value")
            .map(value_to_string)
            .ok_or_else(|| missing("stat.value"))?;

        records.push(PlayerStatRecord {
            player_id: PlayerId::new(player_id),
            player_name: player_name.clone(),
            team: team.clone(),
            position: position.clone(),
            stat_category,
            stat_value,
            season,
            week,
        });
    }

    Ok(records)
}

/// Flatten a whole page. Also reports how many players the page held so the
/// caller can stop paginating on a short page.
pub fn flatten_player_stats_page(
    payload: &Value,
    season: Season,
) -> Result<(Vec<PlayerStatRecord>, usize)> {
    let players = players_in_page(payload)?;
    let mut records = Vec::new();
    for entry in &players {
        records.extend(flatten_player(entry, season)?);
    }
    Ok((records, players.len()))
}

/// League metadata out of a `league/{league_key}` payload. The meta object is
/// the first element of the `league` array.
pub fn flatten_league_meta(payload: &Value) -> Result<LeagueMeta> {
    let league = payload
        .get("fantasy_content")
        .ok_or_else(|| missing("fantasy_content"))?
        .get("league")
        .ok_or_else(|| missing("fantasy_content.league"))?
        .as_array()
        .ok_or_else(|| missing("fantasy_content.league[]"))?;

    let meta = league.first().ok_or_else(|| missing("league[0]"))?;
    serde_json::from_value(meta.clone()).map_err(|e| YahooError::Parse {
        message: format!("league metadata: {}", e),
    })
}

/// The user's leagues out of a `users;use_login=1/games/leagues` payload.
pub fn flatten_user_leagues(payload: &Value) -> Result<Vec<LeagueMeta>> {
    let users = payload
        .get("fantasy_content")
        .ok_or_else(|| missing("fantasy_content"))?
        .get("users")
        .ok_or_else(|| missing("fantasy_content.users"))?;

    let mut out = Vec::new();
    for user in collection_entries(users) {
        let user_parts = user
            .get("user")
            .and_then(|u| u.as_array())
            .ok_or_else(|| missing("users.N.user"))?;

        let Some(games) = user_parts.iter().find_map(|part| part.get("games")) else {
            continue;
        };

        for game in collection_entries(games) {
            let game_parts = game
                .get("game")
                .and_then(|g| g.as_array())
                .ok_or_else(|| missing("games.N.game"))?;

            let Some(leagues) = game_parts.iter().find_map(|part| part.get("leagues")) else {
                continue;
            };

            for league in collection_entries(leagues) {
                let league_parts = league
                    .get("league")
                    .and_then(|l| l.as_array())
                    .ok_or_else(|| missing("leagues.N.league"))?;

                let meta = league_parts.first().ok_or_else(|| missing("league[0]"))?;
                let meta: LeagueMeta =
                    serde_json::from_value(meta.clone()).map_err(|e| YahooError::Parse {
                        message: format!("league metadata: {}", e),
                    })?;
                out.push(meta);
            }
        }
    }

    Ok(out)
}

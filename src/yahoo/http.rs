//! HTTP calls against the Yahoo Fantasy Sports v2 API.

use reqwest::Client;
use serde_json::Value;

use crate::auth::Session;
use crate::cli::types::{LeagueId, Season, Week};
use crate::error::{Result, YahooError};

/// Base path for the Yahoo Fantasy Sports v2 API.
pub const FANTASY_BASE_URL: &str = "https://fantasysports.yahooapis.com/fantasy/v2";

/// Page size Yahoo uses for player collections.
pub const PLAYERS_PAGE_SIZE: usize = 25;

/// League key, e.g. `nba.l.12345`.
pub fn league_key(game: &str, league_id: LeagueId) -> String {
    format!("{}.l.{}", game, league_id)
}

/// Authenticated API client. Obtains a valid access token from the session
/// before every request, so token refresh is invisible to callers.
pub struct YahooClient {
    client: Client,
    session: Session,
}

impl YahooClient {
    pub fn new(session: Session) -> Self {
        Self {
            client: Client::new(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    async fn get(&self, debug: bool, url: &str) -> Result<Value> {
        let token = self.session.get_valid_token().await?;

        if debug {
            eprintln!("GET {}", url);
        }

        let res = self
            .client
            .get(url)
            .bearer_auth(&token.access_token)
            .query(&[("format", "json")])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let message = res.text().await.unwrap_or_default();
            return Err(YahooError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(res.json::<Value>().await?)
    }

    /// Leagues the signed-in user belongs to for a game code.
    pub async fn get_user_leagues(&self, debug: bool, game: &str) -> Result<Value> {
        let url = format!(
            "{FANTASY_BASE_URL}/users;use_login=1/games;game_keys={}/leagues",
            game
        );
        self.get(debug, &url).await
    }

    /// League metadata (name, season, scoring type).
    pub async fn get_league_meta(
        &self,
        debug: bool,
        game: &str,
        league_id: LeagueId,
    ) -> Result<Value> {
        let url = format!("{FANTASY_BASE_URL}/league/{}", league_key(game, league_id));
        self.get(debug, &url).await
    }

    /// One page of the league's players with their stats.
    /// `week == None` requests season totals.
    pub async fn get_league_player_stats_page(
        &self,
        debug: bool,
        game: &str,
        league_id: LeagueId,
        season: Season,
        week: Option<Week>,
        start: usize,
    ) -> Result<Value> {
        let coverage = match week {
            Some(w) => format!("type=week;week={}", w.as_u16()),
            None => format!("type=season;season={}", season.as_u16()),
        };
        let url = format!(
            "{FANTASY_BASE_URL}/league/{}/players;start={};count={}/stats;{}",
            league_key(game, league_id),
            start,
            PLAYERS_PAGE_SIZE,
            coverage
        );
        self.get(debug, &url).await
    }
}

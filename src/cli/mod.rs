//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{LeagueId, Season, Week};

/// Common fetch arguments shared between `get` subcommands.
#[derive(Debug, Args)]
pub struct CommonFilters {
    /// League ID (or set `YAHOO_FBB_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Yahoo game code (nba, mlb, nfl, nhl).
    #[clap(long, short, default_value = "nba")]
    pub game: String,

    /// Season year (e.g. 2025).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Print request URLs for debugging.
    #[clap(long)]
    pub debug: bool,

    /// Print progress while fetching.
    #[clap(long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum AuthCmd {
    /// Run the one-time browser authorization and cache the token.
    ///
    /// Prints the Yahoo approval URL, waits for the authorization code, and
    /// exchanges it for an access/refresh token pair.
    Login,

    /// Report whether a cached token exists and whether it is still valid.
    Status,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// List the signed-in user's fantasy leagues for a game code
    Leagues {
        /// Yahoo game code (nba, mlb, nfl, nhl).
        #[clap(long, short, default_value = "nba")]
        game: String,

        /// Print request URLs for debugging.
        #[clap(long)]
        debug: bool,
    },

    /// Fetch per-player stat categories and export them to CSV.
    ///
    /// Pages through `league/{key}/players;start=N;count=25/stats` and writes
    /// one CSV row per (player, stat category).
    PlayerStats {
        #[clap(flatten)]
        filters: CommonFilters,

        /// Single week; omit for season totals.
        #[clap(long, short)]
        week: Option<Week>,

        /// Output CSV path (default: data/player_stats_{season}.csv).
        #[clap(long, short)]
        output: Option<PathBuf>,

        /// Force refresh cached league metadata from Yahoo.
        #[clap(long)]
        refresh: bool,

        /// Output records as JSON to stdout instead of writing CSV.
        #[clap(long)]
        json: bool,
    },

    /// Compute a 9-category z-score fantasy ranking and export it to CSV.
    ///
    /// Fetches season-total stats for the whole player pool, z-scores each
    /// category (turnovers inverted), and ranks by summed score.
    Rank {
        #[clap(flatten)]
        filters: CommonFilters,

        /// Keep only the top N players.
        #[clap(long, default_value_t = 150)]
        top: usize,

        /// Output CSV path (default: data/fantasy_ranking_top{N}.csv).
        #[clap(long, short)]
        output: Option<PathBuf>,

        /// Force refresh cached league metadata from Yahoo.
        #[clap(long)]
        refresh: bool,

        /// Output the ranking as JSON to stdout instead of writing CSV.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "yahoo-fbb", about = "Yahoo Fantasy Basketball CLI")]
pub struct Yahoo {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage Yahoo OAuth authorization
    Auth {
        #[clap(subcommand)]
        cmd: AuthCmd,
    },

    /// Get data from the Yahoo Fantasy Sports API
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}

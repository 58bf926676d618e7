//! Yahoo Fantasy Basketball CLI Library
//!
//! A Rust library for the Yahoo Fantasy Sports API, covering the OAuth2
//! authorization-code flow, league and player-stat retrieval, and CSV export
//! of flattened per-category stat rows.
//!
//! ## Features
//!
//! - **OAuth2 Session Management**: One-time browser authorization, cached
//!   token persistence, and transparent refresh of expired access tokens
//! - **League Discovery**: List the signed-in user's leagues for a game code
//! - **Player Stats**: Paginated retrieval of per-player stat categories for a
//!   season or a single week
//! - **CSV Export**: One row per (player, stat category) with a fixed schema
//! - **9-Category Ranking**: Z-score fantasy ranking across the player pool
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use yahoo_fbb::auth::{Credentials, Session};
//!
//! # async fn example() -> yahoo_fbb::Result<()> {
//! let session = Session::new(Credentials::from_env()?);
//! let token = session.get_valid_token().await?;
//! println!("access token expires at {}", token.expires_at);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export YAHOO_CLIENT_ID=...
//! export YAHOO_CLIENT_SECRET=...
//! export YAHOO_FBB_LEAGUE_ID=12345   # optional, avoids passing -l everywhere
//! ```

pub mod analysis;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod export;
pub mod yahoo;

// Re-export commonly used types
pub use cli::types::{LeagueId, PlayerId, Season, StatCategory, Week};
pub use error::{Result, YahooError};
pub use export::PlayerStatRecord;

pub const CLIENT_ID_ENV_VAR: &str = "YAHOO_CLIENT_ID";
pub const CLIENT_SECRET_ENV_VAR: &str = "YAHOO_CLIENT_SECRET";
pub const LEAGUE_ID_ENV_VAR: &str = "YAHOO_FBB_LEAGUE_ID";
